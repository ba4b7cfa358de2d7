//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`ObjectStoreError`] via `#[from]` (or an explicit `From` impl for boxed
//! adapter errors).

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum ObjectStoreError {
    /// The client payload broke a domain invariant.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// No record matched the requested id.
    #[error("not found")]
    NotFound(#[from] NotFoundError),

    /// The persistence adapter failed to read or write the collection.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The largest stored id is already `u64::MAX`.
    #[error("no identifier left to assign")]
    IdSpaceExhausted,
}

/// Invariant violations on client-supplied data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// `name` is missing, not a string, or empty.
    #[error("The name field is required")]
    MissingName,

    /// The request body could not be decoded as JSON.
    #[error("Invalid JSON body: {0}")]
    MalformedBody(String),
}

/// Lookup miss on a typed identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} not found")]
pub struct NotFoundError {
    /// Human-readable kind of the missing thing, e.g. `"Object"`.
    pub entity: &'static str,
    /// The identifier as it was requested.
    pub id: String,
}
