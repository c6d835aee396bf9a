use crate::storage::StorageError;

/// Top-level error type for fallible site operations.
///
/// Nothing here is fatal at the page level: callers log the detail and
/// degrade to a user-facing message while the rest of the page stays
/// interactive.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
