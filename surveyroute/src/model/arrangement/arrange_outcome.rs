use serde::{Deserialize, Serialize};

/// result counts of one arrange run over a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ArrangeOutcome {
    /// geo-tagged records that received a serial number.
    pub count_arranged: usize,
    /// records excluded and flagged for lacking usable coordinates.
    pub count_excluded: usize,
}
