//! Storage-specific error type wrapping sqlx errors.

use objectstore_domain::error::ObjectStoreError;

/// Errors originating from the `SQLite` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A query or connection failed.
    #[error("database error")]
    Database(#[from] sqlx::Error),

    /// A stored row did not hold a valid record, or a record failed to encode.
    #[error("JSON (de)serialization error")]
    Json(#[from] serde_json::Error),

    /// Failed to run migrations.
    #[error("migration error")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl From<StorageError> for ObjectStoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
