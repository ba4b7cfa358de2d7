//! JSON file implementation of [`CollectionStore`].

use std::future::Future;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use objectstore_app::ports::CollectionStore;
use objectstore_domain::collection::Collection;
use objectstore_domain::error::ObjectStoreError;

use crate::error::StorageError;

/// Collection store backed by one JSON file.
///
/// The file holds the whole collection as a pretty-printed array. It is read
/// in full on every call and overwritten in full on every write, with no
/// locking between processes or tasks.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store reading and writing `path`. The file need not exist.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the data file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

async fn read_collection(path: PathBuf) -> Result<Collection, StorageError> {
    let raw = match tokio::fs::read(&path).await {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file missing, starting empty");
            return Ok(Collection::new());
        }
        Err(source) => return Err(StorageError::Io { path, source }),
    };
    if raw.is_empty() {
        return Ok(Collection::new());
    }
    serde_json::from_slice(&raw).map_err(|source| StorageError::Decode { path, source })
}

async fn write_collection(path: PathBuf, payload: Vec<u8>) -> Result<(), StorageError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
    }
    if let Err(source) = tokio::fs::write(&path, payload).await {
        return Err(StorageError::Io { path, source });
    }
    Ok(())
}

impl CollectionStore for JsonFileStore {
    fn read_all(&self) -> impl Future<Output = Result<Collection, ObjectStoreError>> + Send {
        let path = self.path.clone();
        async move { read_collection(path).await.map_err(ObjectStoreError::from) }
    }

    fn write_all(
        &self,
        collection: &Collection,
    ) -> impl Future<Output = Result<(), ObjectStoreError>> + Send {
        let path = self.path.clone();
        let payload = serde_json::to_vec_pretty(collection);
        let count = collection.len();
        async move {
            let payload = payload.map_err(StorageError::from)?;
            write_collection(path, payload).await?;
            tracing::trace!(count, "collection written");
            Ok(())
        }
    }
}
