//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use objectstore_domain::error::ObjectStoreError;

/// JSON error body returned by every failing endpoint.
#[derive(Serialize)]
pub(crate) struct ErrorBody {
    pub(crate) error: String,
}

/// Maps [`ObjectStoreError`] to an HTTP response with appropriate status code.
///
/// Server-side failures never expose their cause: the client receives
/// `internal_message` and the cause goes to the log.
pub struct ApiError {
    inner: ObjectStoreError,
    internal_message: &'static str,
}

impl ApiError {
    /// Wrap `inner`, answering `internal_message` if it turns out to be a
    /// server-side failure.
    #[must_use]
    pub fn new(inner: ObjectStoreError, internal_message: &'static str) -> Self {
        Self {
            inner,
            internal_message,
        }
    }
}

impl From<ObjectStoreError> for ApiError {
    fn from(err: ObjectStoreError) -> Self {
        Self::new(err, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.inner {
            ObjectStoreError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ObjectStoreError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            ObjectStoreError::Storage(err) => {
                tracing::error!(error = ?err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.internal_message.to_string(),
                )
            }
            ObjectStoreError::IdSpaceExhausted => {
                tracing::error!(error = %self.inner, "cannot assign id");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    self.internal_message.to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use objectstore_domain::error::{NotFoundError, ValidationError};

    #[test]
    fn should_map_validation_to_bad_request() {
        let err = ObjectStoreError::from(ValidationError::MissingName);
        let resp = ApiError::from(err).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn should_map_not_found_to_404() {
        let err = NotFoundError {
            entity: "Object",
            id: "1".to_string(),
        };
        let resp = ApiError::from(ObjectStoreError::from(err)).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn should_map_storage_and_exhaustion_to_500() {
        let storage = ObjectStoreError::Storage(Box::new(std::io::Error::other("boom")));
        let resp = ApiError::new(storage, "Data reading error").into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let resp = ApiError::from(ObjectStoreError::IdSpaceExhausted).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
