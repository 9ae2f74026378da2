mod geo_record;
mod position;
mod record_id;
mod scope_key;
mod serial_status;

pub use geo_record::GeoRecord;
pub use position::GeoPosition;
pub use record_id::RecordId;
pub use scope_key::ScopeKey;
pub use serial_status::SerialStatus;
