use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// grouping key for arrangement: a colony name, a ward, or an upload batch id.
/// serial numbers are unique and contiguous only within one scope key.
#[derive(Debug, Clone, Eq, PartialEq, PartialOrd, Ord, Deserialize, Serialize, Hash)]
pub struct ScopeKey(pub String);

impl Display for ScopeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ScopeKey {
    fn from(value: &str) -> Self {
        ScopeKey(value.to_string())
    }
}
