use crate::model::record::{RecordId, ScopeKey};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("scope '{0}' not found in store")]
    ScopeNotFound(ScopeKey),
    #[error("record '{0}' not found in scope '{1}'")]
    RecordNotFound(RecordId, ScopeKey),
    #[error("failure writing arrangement for scope '{0}': {1}")]
    WriteFailed(ScopeKey, String),
    #[error("{0}")]
    InternalError(String),
}
