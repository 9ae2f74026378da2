use super::{ArrangementUpdate, CoordinateStore, StoreError};
use crate::model::record::{GeoRecord, RecordId, ScopeKey, SerialStatus};
use itertools::Itertools;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

type ScopeRecords = HashMap<RecordId, GeoRecord>;

/// mutex-guarded in-memory [`CoordinateStore`], used by the test suite and
/// by embeddings that have not yet bound a database. writes can be poisoned
/// via [`MemoryStore::set_write_failure`] to exercise the persistence-failure
/// path without a real backend.
#[derive(Default)]
pub struct MemoryStore {
    scopes: Mutex<HashMap<ScopeKey, ScopeRecords>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> MemoryStore {
        MemoryStore::default()
    }

    /// insert (or overwrite) a record under its scope key. this is the
    /// ingestion path; the engine itself only ever rewrites serial state.
    pub fn insert(&self, record: GeoRecord) -> Result<(), StoreError> {
        let mut scopes = self.guard()?;
        scopes
            .entry(record.scope_key.clone())
            .or_default()
            .insert(record.id.clone(), record);
        Ok(())
    }

    /// when set, every subsequent arrangement write fails without touching
    /// any record.
    pub fn set_write_failure(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn guard(&self) -> Result<MutexGuard<'_, HashMap<ScopeKey, ScopeRecords>>, StoreError> {
        self.scopes
            .lock()
            .map_err(|_| StoreError::InternalError("record store lock poisoned".to_string()))
    }
}

impl CoordinateStore for MemoryStore {
    fn fetch_scope(&self, scope: &ScopeKey) -> Result<Vec<GeoRecord>, StoreError> {
        let scopes = self.guard()?;
        let records = match scopes.get(scope) {
            None => vec![],
            Some(records) => records
                .values()
                .cloned()
                .sorted_by_key(|r| (r.upload_order, r.id.clone()))
                .collect_vec(),
        };
        Ok(records)
    }

    fn apply_arrangement(
        &self,
        scope: &ScopeKey,
        update: &ArrangementUpdate,
    ) -> Result<(), StoreError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::WriteFailed(
                scope.clone(),
                "write failure injected".to_string(),
            ));
        }
        let mut scopes = self.guard()?;
        let records = scopes
            .get_mut(scope)
            .ok_or_else(|| StoreError::ScopeNotFound(scope.clone()))?;

        // validate the full update before mutating anything so a bad id
        // cannot leave a half-written numbering behind.
        for (id, _) in update.assigned.iter() {
            if !records.contains_key(id) {
                return Err(StoreError::RecordNotFound(id.clone(), scope.clone()));
            }
        }
        for id in update.excluded.iter() {
            if !records.contains_key(id) {
                return Err(StoreError::RecordNotFound(id.clone(), scope.clone()));
            }
        }

        for (id, serial) in update.assigned.iter() {
            if let Some(record) = records.get_mut(id) {
                record.serial = SerialStatus::Assigned(*serial);
            }
        }
        for id in update.excluded.iter() {
            if let Some(record) = records.get_mut(id) {
                record.serial = SerialStatus::NotApplicable;
            }
        }
        Ok(())
    }

    fn update_coordinates(
        &self,
        scope: &ScopeKey,
        id: &RecordId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), StoreError> {
        let mut scopes = self.guard()?;
        let records = scopes
            .get_mut(scope)
            .ok_or_else(|| StoreError::ScopeNotFound(scope.clone()))?;
        let record = records
            .get_mut(id)
            .ok_or_else(|| StoreError::RecordNotFound(id.clone(), scope.clone()))?;
        record.latitude = latitude;
        record.longitude = longitude;
        Ok(())
    }

    fn remove_scope(&self, scope: &ScopeKey) -> Result<usize, StoreError> {
        let mut scopes = self.guard()?;
        let removed = scopes
            .remove(scope)
            .ok_or_else(|| StoreError::ScopeNotFound(scope.clone()))?;
        Ok(removed.len())
    }
}
