use crate::model::record::ScopeKey;
use crate::model::store::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ArrangementError {
    /// another arrangement operation holds the scope; the caller should
    /// retry rather than queue.
    #[error("another arrangement is already in flight for scope '{0}'")]
    ScopeBusy(ScopeKey),
    #[error("no computed arrangement to save for scope '{0}'")]
    NothingComputed(ScopeKey),
    #[error("scope '{0}' has no committed arrangement")]
    NotCommitted(ScopeKey),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("{0}")]
    InternalError(String),
}
