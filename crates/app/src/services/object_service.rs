//! Object service — use-cases for the record collection.
//!
//! Every call is one full read-modify-write cycle against the store. Nothing
//! is cached between calls and nothing serialises concurrent calls: two
//! overlapping mutations both start from the same snapshot and the later
//! write wins (lost update).

use objectstore_domain::collection::Collection;
use objectstore_domain::error::{NotFoundError, ObjectStoreError};
use objectstore_domain::id::ObjectId;
use objectstore_domain::record::{ObjectDraft, Record};

use crate::ports::CollectionStore;

/// Application service for record CRUD operations.
pub struct ObjectService<S> {
    store: S,
}

fn not_found(id: ObjectId) -> ObjectStoreError {
    NotFoundError {
        entity: "Object",
        id: id.to_string(),
    }
    .into()
}

impl<S: CollectionStore> ObjectService<S> {
    /// Create a new service backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// List every record in insertion order.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the store.
    #[tracing::instrument(skip(self))]
    pub async fn list_objects(&self) -> Result<Collection, ObjectStoreError> {
        self.store.read_all().await
    }

    /// Append a new record with the next free id and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns a storage error from the store, or
    /// [`ObjectStoreError::IdSpaceExhausted`] when no id is left.
    #[tracing::instrument(skip(self, draft), fields(object_name = %draft.name()))]
    pub async fn create_object(&self, draft: ObjectDraft) -> Result<Record, ObjectStoreError> {
        let mut collection = self.store.read_all().await?;
        let created = collection.insert(draft)?.clone();
        self.store.write_all(&collection).await?;
        tracing::debug!(id = %created.id, "object created");
        Ok(created)
    }

    /// Merge `draft` into the record with `id` and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::NotFound`] when no record has `id` (the
    /// store is not written in that case), or a storage error.
    #[tracing::instrument(skip(self, draft), fields(object_name = %draft.name()))]
    pub async fn update_object(
        &self,
        id: ObjectId,
        draft: ObjectDraft,
    ) -> Result<Record, ObjectStoreError> {
        let mut collection = self.store.read_all().await?;
        let updated = collection
            .update(id, draft)
            .cloned()
            .ok_or_else(|| not_found(id))?;
        self.store.write_all(&collection).await?;
        Ok(updated)
    }

    /// Remove the record with `id` and persist the collection.
    ///
    /// # Errors
    ///
    /// Returns [`ObjectStoreError::NotFound`] when no record has `id`, or a
    /// storage error.
    #[tracing::instrument(skip(self))]
    pub async fn delete_object(&self, id: ObjectId) -> Result<Record, ObjectStoreError> {
        let mut collection = self.store.read_all().await?;
        let removed = collection.remove(id).ok_or_else(|| not_found(id))?;
        self.store.write_all(&collection).await?;
        tracing::debug!(%id, "object deleted");
        Ok(removed)
    }
}
