//! Storage-specific error type wrapping file and JSON errors.

use std::path::PathBuf;

use objectstore_domain::error::ObjectStoreError;

/// Errors originating from the flat-file storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading or writing the data file failed.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The data file does not hold a valid JSON array of records.
    #[error("failed to decode {}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The collection could not be encoded.
    #[error("JSON serialization error")]
    Encode(#[from] serde_json::Error),
}

impl From<StorageError> for ObjectStoreError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
