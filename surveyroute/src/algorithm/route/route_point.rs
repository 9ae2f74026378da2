use crate::model::record::{GeoPosition, RecordId};

/// one sequenceable input: a record's identity, its validated position, and
/// the ingestion rank used to break every ordering tie deterministically.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePoint {
    pub id: RecordId,
    pub upload_order: u64,
    pub position: GeoPosition,
}
