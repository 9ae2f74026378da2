use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// lifecycle of a scope's arrangement. serial numbers written by an arrange
/// run are previewable at `Computed` and become export-authoritative only at
/// `Committed`. editing coordinates or membership demotes the scope back to
/// `Unarranged`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementPhase {
    #[default]
    Unarranged,
    Computed,
    Committed,
}

impl Display for ArrangementPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArrangementPhase::Unarranged => write!(f, "unarranged"),
            ArrangementPhase::Computed => write!(f, "computed"),
            ArrangementPhase::Committed => write!(f, "committed"),
        }
    }
}
