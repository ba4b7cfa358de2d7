//! # objectstore-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the [`CollectionStore`](objectstore_app::ports::CollectionStore)
//!   port on top of an embedded database
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain records and database rows
//!
//! ## Dependency rule
//! Depends on `objectstore-app` (for the port trait) and `objectstore-domain`
//! (for domain types). The `app` and `domain` crates must never reference
//! this adapter.

mod collection_store;
mod error;
mod pool;

pub use collection_store::SqliteCollectionStore;
pub use error::StorageError;
pub use pool::{Config, Database};
