//! # objectstore-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **port trait** that storage adapters must implement:
//!   - `CollectionStore` — read and write the whole collection at once
//! - Define the **use-case** driving adapters call into:
//!   - `ObjectService` — list, create, update, delete records
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `objectstore-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
