use crate::model::record::{GeoPosition, RecordId};
use serde::{Deserialize, Serialize};

/// one entry of a committed visiting order, as handed to the export adapter
/// (PDF stamping, employee splitting). positions here are always the true
/// stored coordinates, never display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStop {
    pub id: RecordId,
    pub serial: u32,
    pub position: GeoPosition,
}
