//! Shared application state for axum handlers.

use std::sync::Arc;

use objectstore_app::ports::CollectionStore;
use objectstore_app::services::object_service::ObjectService;

/// Application state shared across all axum handlers.
///
/// Generic over the collection store to avoid dynamic dispatch.
/// `Clone` is implemented manually so the store itself does not need to be
/// `Clone`. Only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// Record CRUD service.
    pub object_service: Arc<ObjectService<S>>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            object_service: Arc::clone(&self.object_service),
        }
    }
}

impl<S> AppState<S>
where
    S: CollectionStore + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(object_service: ObjectService<S>) -> Self {
        Self {
            object_service: Arc::new(object_service),
        }
    }
}
