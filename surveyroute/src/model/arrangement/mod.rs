mod arrange_outcome;
mod arrangement_error;
mod arrangement_phase;
mod coordinator;
mod route_stop;
mod scope_locks;

pub use arrange_outcome::ArrangeOutcome;
pub use arrangement_error::ArrangementError;
pub use arrangement_phase::ArrangementPhase;
pub use coordinator::ArrangementCoordinator;
pub use route_stop::RouteStop;
pub use scope_locks::{ScopeGuard, ScopeLocks};
