//! Storage port — whole-collection persistence.

use std::future::Future;

use objectstore_domain::collection::Collection;
use objectstore_domain::error::ObjectStoreError;

/// Persistence for the single [`Collection`].
///
/// The contract is deliberately coarse: every operation loads the full
/// collection and every mutation writes it back in full. Implementations
/// provide no locking, so two interleaved read-modify-write cycles can lose
/// one of the updates.
pub trait CollectionStore {
    /// Load every record, in order.
    ///
    /// A store that has never been written to yields an empty collection.
    fn read_all(&self) -> impl Future<Output = Result<Collection, ObjectStoreError>> + Send;

    /// Replace the stored records with `collection`.
    fn write_all(
        &self,
        collection: &Collection,
    ) -> impl Future<Output = Result<(), ObjectStoreError>> + Send;
}
