use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// serial-number state of a record within its scope. `NotApplicable` marks a
/// record that was excluded from the most recent arrangement for lacking
/// usable coordinates; it is a distinct, visible state rather than a silent
/// drop, so downstream rendering and export can separate it from a record
/// that has simply never been arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "serial")]
pub enum SerialStatus {
    /// never included in an arrangement for its scope.
    #[default]
    Unarranged,
    /// excluded from the most recent arrangement; rendered as "N/A".
    NotApplicable,
    /// 1-based position in the scope's most recent computed visiting order.
    Assigned(u32),
}

impl SerialStatus {
    pub fn serial(&self) -> Option<u32> {
        match self {
            SerialStatus::Assigned(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, SerialStatus::NotApplicable)
    }
}

impl Display for SerialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SerialStatus::Unarranged => write!(f, "-"),
            SerialStatus::NotApplicable => write!(f, "N/A"),
            SerialStatus::Assigned(n) => write!(f, "{}", n),
        }
    }
}
