//! # objectstore-domain
//!
//! Pure domain model for the objectstore service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Records** (a named JSON object with a service-assigned id)
//! - Define **Drafts** (validated client payloads for create and update)
//! - Define the **Collection** (the ordered sequence of records) and the
//!   linear-scan operations applied to it
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod collection;
pub mod record;
