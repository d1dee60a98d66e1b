//! Data store error types.

use thiserror::Error;

/// Errors that can occur during data store operations.
#[derive(Debug, Error)]
pub enum DataStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The connection URL names a backend this crate does not support.
    #[error("Unsupported database URL scheme: {0}")]
    UnsupportedDatabaseUrl(String),

    /// The store returned an id that does not fit a record key.
    #[error("Generated id out of range: {0}")]
    GeneratedIdOutOfRange(u64),
}

/// Result type for data store operations.
pub type DataStoreResult<T> = Result<T, DataStoreError>;
