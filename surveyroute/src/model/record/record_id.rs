use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// opaque record identifier assigned at ingestion time, never reused.
/// the engine treats these as tokens; it does not parse them.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
pub struct RecordId(pub String);

impl Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId(value.to_string())
    }
}
