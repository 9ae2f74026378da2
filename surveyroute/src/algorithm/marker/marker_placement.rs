use serde::{Deserialize, Serialize};

/// where to draw one record's marker. display coordinates exist only for
/// the rendering surface; they are never written back to the store and
/// never participate in sequencing or distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPlacement {
    pub display_latitude: f64,
    pub display_longitude: f64,
    /// true when this marker was moved off its true coordinate to stay
    /// visually distinguishable from colliding neighbors.
    pub displaced: bool,
}
