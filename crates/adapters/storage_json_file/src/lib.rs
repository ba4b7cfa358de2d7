//! # objectstore-adapter-storage-json-file
//!
//! Flat-file persistence adapter.
//!
//! ## Responsibilities
//! - Implement the [`CollectionStore`](objectstore_app::ports::CollectionStore)
//!   port over a single JSON file
//! - Treat a missing (or empty) file as an empty collection
//! - Rewrite the whole file, pretty-printed, on every mutation
//!
//! ## Dependency rule
//! Depends on `objectstore-app` (for the port trait) and `objectstore-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

pub mod error;
pub mod file_store;

pub use file_store::JsonFileStore;
