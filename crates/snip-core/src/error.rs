use crate::short_id::ShortId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid short id: {0}")]
    InvalidShortId(String),
}

/// Failures reported by an association store backend.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    #[error("storage backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage operation timed out: {0}")]
    Timeout(String),
    #[error("storage query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
    #[error("storage operation failed: {0}")]
    Operation(String),
}

/// Domain-level outcome of an association operation.
///
/// The display text of `InvalidUrl` and `AssociationNotFound` is what HTTP
/// clients receive, so it stays fixed regardless of the carried detail.
#[derive(Debug, Clone, Error)]
pub enum ServiceError {
    #[error("Invalid url format")]
    InvalidUrl(String),
    #[error("URL not found")]
    AssociationNotFound(ShortId),
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] StorageError),
}
