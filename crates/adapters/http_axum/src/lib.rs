//! # objectstore-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON object API** (`/objects`, `/objects/{id}`)
//! - Serve the **info endpoints** (`/`, `/hello`, `/time`, `/status`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into JSON responses, including the
//!   `{"error": "Route not found"}` fallback for anything unmatched
//!
//! ## Dependency rule
//! Depends on `objectstore-app` (for the port trait and service) and
//! `objectstore-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
