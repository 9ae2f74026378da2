use super::ArrangementError;
use crate::model::record::ScopeKey;
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// registry of scopes with an arrangement operation in flight. acquisition
/// never blocks: a second caller on the same scope gets
/// [`ArrangementError::ScopeBusy`] immediately, while different scopes
/// proceed in parallel.
#[derive(Default)]
pub struct ScopeLocks {
    in_flight: Arc<Mutex<HashSet<ScopeKey>>>,
}

impl ScopeLocks {
    pub fn new() -> ScopeLocks {
        ScopeLocks::default()
    }

    pub fn try_acquire(&self, scope: &ScopeKey) -> Result<ScopeGuard, ArrangementError> {
        let mut held = self
            .in_flight
            .lock()
            .map_err(|_| ArrangementError::InternalError("scope lock registry poisoned".to_string()))?;
        if !held.insert(scope.clone()) {
            return Err(ArrangementError::ScopeBusy(scope.clone()));
        }
        Ok(ScopeGuard {
            in_flight: Arc::clone(&self.in_flight),
            scope: scope.clone(),
        })
    }
}

/// RAII release: dropping the guard frees the scope, including on panic or
/// early return, so a failed arrangement can never leave its scope busy.
pub struct ScopeGuard {
    in_flight: Arc<Mutex<HashSet<ScopeKey>>>,
    scope: ScopeKey,
}

impl Drop for ScopeGuard {
    fn drop(&mut self) {
        // a poisoned registry must still release the scope
        let mut held = match self.in_flight.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        held.remove(&self.scope);
    }
}
