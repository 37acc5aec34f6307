//! Store error model.

use thiserror::Error;

use crate::id::ItemId;

/// Result type used by every store operation.
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error.
///
/// These are outcome categories only; mapping to HTTP status codes happens at
/// the API boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A required field was missing or blank.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No item with the given id is held by the store.
    #[error("item {0} not found")]
    NotFound(ItemId),

    /// Unexpected internal fault (e.g. a poisoned lock).
    #[error("internal store fault: {0}")]
    Internal(String),
}

impl StoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn not_found(id: ItemId) -> Self {
        Self::NotFound(id)
    }
}
