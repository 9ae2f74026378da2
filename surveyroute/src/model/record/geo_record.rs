use super::{GeoPosition, RecordId, ScopeKey, SerialStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// one billable/surveyable unit: a property or bill row with its raw GPS
/// capture. latitude/longitude are kept exactly as ingested; validation into
/// a usable [`GeoPosition`] happens on read so that dirty captures stay
/// visible for correction instead of being rewritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub id: RecordId,
    pub scope_key: ScopeKey,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub serial: SerialStatus,
    /// monotonic ingestion counter. deterministic tie-break only, never a
    /// primary ordering key.
    pub upload_order: u64,
    pub created_at: DateTime<Utc>,
}

impl GeoRecord {
    pub fn new(
        id: RecordId,
        scope_key: ScopeKey,
        latitude: Option<f64>,
        longitude: Option<f64>,
        upload_order: u64,
        created_at: DateTime<Utc>,
    ) -> GeoRecord {
        GeoRecord {
            id,
            scope_key,
            latitude,
            longitude,
            serial: SerialStatus::Unarranged,
            upload_order,
            created_at,
        }
    }

    /// the validated position of this record, if it is geo-tagged.
    pub fn position(&self) -> Option<GeoPosition> {
        GeoPosition::from_raw(self.latitude, self.longitude)
    }
}
