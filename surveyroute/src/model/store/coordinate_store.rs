use super::StoreError;
use crate::model::record::{GeoRecord, RecordId, ScopeKey};
use serde::{Deserialize, Serialize};

/// the complete serial-number rewrite for one scope, produced by a single
/// arrangement run. records not named here keep their current status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArrangementUpdate {
    /// (record, serial) pairs in visiting order; serials are 1-based and
    /// contiguous.
    pub assigned: Vec<(RecordId, u32)>,
    /// records excluded for lacking usable coordinates, to be flagged
    /// not-applicable.
    pub excluded: Vec<RecordId>,
}

/// persistence seam for geo records. the surrounding application owns the
/// real database; this trait is the narrow slice of it the arrangement
/// engine reads and writes.
///
/// implementations must make [`CoordinateStore::apply_arrangement`] atomic
/// per scope: either every serial and flag in the update becomes visible, or
/// none do. callers rely on this to keep partial serial numberings from ever
/// being observable.
pub trait CoordinateStore: Send + Sync {
    /// every record in the scope, sorted by `upload_order`. an unknown scope
    /// is an empty scope, not an error.
    fn fetch_scope(&self, scope: &ScopeKey) -> Result<Vec<GeoRecord>, StoreError>;

    /// atomically rewrite serial numbers and exclusion flags for one scope.
    fn apply_arrangement(
        &self,
        scope: &ScopeKey,
        update: &ArrangementUpdate,
    ) -> Result<(), StoreError>;

    /// overwrite a record's raw coordinates (the operator edit path). the
    /// record's serial status is left as-is; arrangement-level staleness is
    /// the coordinator's concern.
    fn update_coordinates(
        &self,
        scope: &ScopeKey,
        id: &RecordId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), StoreError>;

    /// drop a scope and all of its records, returning how many were removed.
    fn remove_scope(&self, scope: &ScopeKey) -> Result<usize, StoreError>;
}
