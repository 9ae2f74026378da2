use super::{ArrangeOutcome, ArrangementError, ArrangementPhase, RouteStop, ScopeLocks};
use crate::algorithm::marker::{self, MarkerPlacement, SpreadConfig};
use crate::algorithm::route::{self, RoutePoint};
use crate::model::record::{GeoPosition, RecordId, ScopeKey};
use crate::model::store::{ArrangementUpdate, CoordinateStore};
use chrono::{DateTime, Utc};
use itertools::{Either, Itertools};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Copy, Default)]
struct ScopeState {
    phase: ArrangementPhase,
    committed_at: Option<DateTime<Utc>>,
}

/// applies computed visiting orders to the coordinate store, one scope at a
/// time. holds the per-scope lock for the full read-compute-write span, so
/// concurrent arrangements of the same scope fail fast with `ScopeBusy`
/// while different scopes proceed in parallel.
///
/// arrangement is two-phase: `arrange` writes serial numbers and leaves the
/// scope `Computed` (re-runnable, previewable); `save_arranged` promotes the
/// scope to `Committed`, the only phase whose order is authoritative for
/// export.
pub struct ArrangementCoordinator<S: CoordinateStore> {
    store: Arc<S>,
    locks: ScopeLocks,
    scopes: Mutex<HashMap<ScopeKey, ScopeState>>,
}

impl<S: CoordinateStore> ArrangementCoordinator<S> {
    pub fn new(store: Arc<S>) -> ArrangementCoordinator<S> {
        ArrangementCoordinator {
            store,
            locks: ScopeLocks::new(),
            scopes: Mutex::new(HashMap::new()),
        }
    }

    /// computes a visiting order for the scope's geo-tagged records and
    /// atomically rewrites their serial numbers 1..=K; records without
    /// usable coordinates are flagged not-applicable instead. idempotent:
    /// re-running over an unchanged scope reproduces the same numbering.
    ///
    /// a scope with no records at all succeeds with zero counts.
    pub fn arrange(&self, scope: &ScopeKey) -> Result<ArrangeOutcome, ArrangementError> {
        let _guard = self.locks.try_acquire(scope)?;
        log::debug!("begin arrange for scope '{scope}'");

        let records = self.store.fetch_scope(scope)?;
        if records.is_empty() {
            log::info!("scope '{scope}' has no records to arrange");
            return Ok(ArrangeOutcome::default());
        }

        let (route_points, excluded): (Vec<RoutePoint>, Vec<RecordId>) =
            records.iter().partition_map(|r| match r.position() {
                Some(position) => Either::Left(RoutePoint {
                    id: r.id.clone(),
                    upload_order: r.upload_order,
                    position,
                }),
                None => Either::Right(r.id.clone()),
            });
        if !excluded.is_empty() {
            log::warn!(
                "{} record(s) in scope '{scope}' lack usable coordinates and will be flagged",
                excluded.len()
            );
        }

        let order = route::walk_order(&route_points);
        let update = ArrangementUpdate {
            assigned: order
                .iter()
                .enumerate()
                .map(|(index, id)| (id.clone(), (index + 1) as u32))
                .collect(),
            excluded,
        };
        self.store.apply_arrangement(scope, &update)?;

        let outcome = ArrangeOutcome {
            count_arranged: update.assigned.len(),
            count_excluded: update.excluded.len(),
        };
        if outcome.count_arranged > 0 {
            let positions: HashMap<&RecordId, GeoPosition> = route_points
                .iter()
                .map(|p| (&p.id, p.position))
                .collect();
            let path = order
                .iter()
                .filter_map(|id| positions.get(id).copied())
                .collect_vec();
            log::info!(
                "arranged {} record(s) in scope '{scope}' ({} excluded), route length {:.0} m",
                outcome.count_arranged,
                outcome.count_excluded,
                route::path_length_meters(&path)
            );
            let mut scopes = self.scopes_guard()?;
            scopes.insert(
                scope.clone(),
                ScopeState {
                    phase: ArrangementPhase::Computed,
                    committed_at: None,
                },
            );
        } else {
            log::info!("scope '{scope}' has no geo-tagged records; flagged {} record(s)",
                outcome.count_excluded);
        }
        Ok(outcome)
    }

    /// promotes the scope's computed order to the committed, durable truth
    /// used for export, returning the commit timestamp. only a `Computed`
    /// scope can be saved; re-arrange first to save again.
    pub fn save_arranged(&self, scope: &ScopeKey) -> Result<DateTime<Utc>, ArrangementError> {
        let _guard = self.locks.try_acquire(scope)?;
        log::debug!("begin save_arranged for scope '{scope}'");

        let mut scopes = self.scopes_guard()?;
        match scopes.get_mut(scope) {
            Some(state) if state.phase == ArrangementPhase::Computed => {
                let now = Utc::now();
                state.phase = ArrangementPhase::Committed;
                state.committed_at = Some(now);
                log::info!("committed arrangement for scope '{scope}'");
                Ok(now)
            }
            _ => Err(ArrangementError::NothingComputed(scope.clone())),
        }
    }

    /// the export adapter contract: the committed visiting order with true
    /// coordinates, sorted by serial. available only once `save_arranged`
    /// has run for the scope's current order.
    pub fn committed_order(&self, scope: &ScopeKey) -> Result<Vec<RouteStop>, ArrangementError> {
        let phase = self.phase(scope)?;
        if phase != ArrangementPhase::Committed {
            log::debug!("scope '{scope}' is {phase}, not committed; refusing export order");
            return Err(ArrangementError::NotCommitted(scope.clone()));
        }
        let records = self.store.fetch_scope(scope)?;
        let stops = records
            .iter()
            .filter_map(|r| match (r.serial.serial(), r.position()) {
                (Some(serial), Some(position)) => Some(RouteStop {
                    id: r.id.clone(),
                    serial,
                    position,
                }),
                _ => None,
            })
            .sorted_by_key(|stop| stop.serial)
            .collect_vec();
        Ok(stops)
    }

    /// display placements for the scope's current records, for the map
    /// surface. read-only and lock-free: a render may race an arrange and
    /// show an order that is about to change, which is acceptable because
    /// the UI refetches once the arrange completes.
    pub fn render_markers(
        &self,
        scope: &ScopeKey,
        config: &SpreadConfig,
    ) -> Result<HashMap<RecordId, MarkerPlacement>, ArrangementError> {
        let records = self.store.fetch_scope(scope)?;
        Ok(marker::spread_markers(&records, config))
    }

    pub fn phase(&self, scope: &ScopeKey) -> Result<ArrangementPhase, ArrangementError> {
        let scopes = self.scopes_guard()?;
        Ok(scopes.get(scope).map(|s| s.phase).unwrap_or_default())
    }

    pub fn committed_at(&self, scope: &ScopeKey) -> Result<Option<DateTime<Utc>>, ArrangementError> {
        let scopes = self.scopes_guard()?;
        Ok(scopes.get(scope).and_then(|s| s.committed_at))
    }

    /// the operator edit path for coordinates. stale serial numbers remain
    /// visible afterwards, but the scope drops back to `Unarranged`: its
    /// order is no longer authoritative until re-arranged and re-saved.
    pub fn update_coordinates(
        &self,
        scope: &ScopeKey,
        id: &RecordId,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<(), ArrangementError> {
        let _guard = self.locks.try_acquire(scope)?;
        self.store.update_coordinates(scope, id, latitude, longitude)?;
        let mut scopes = self.scopes_guard()?;
        scopes.remove(scope);
        log::info!("coordinates updated for record '{id}'; scope '{scope}' is unarranged again");
        Ok(())
    }

    /// drops a scope and everything the coordinator remembers about it, so
    /// no serial from a deleted scope stays observable.
    pub fn remove_scope(&self, scope: &ScopeKey) -> Result<usize, ArrangementError> {
        let _guard = self.locks.try_acquire(scope)?;
        let removed = self.store.remove_scope(scope)?;
        let mut scopes = self.scopes_guard()?;
        scopes.remove(scope);
        log::info!("removed scope '{scope}' ({removed} record(s))");
        Ok(removed)
    }

    fn scopes_guard(&self) -> Result<MutexGuard<'_, HashMap<ScopeKey, ScopeState>>, ArrangementError> {
        self.scopes
            .lock()
            .map_err(|_| ArrangementError::InternalError("scope phase registry poisoned".to_string()))
    }
}
