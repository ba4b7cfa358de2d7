//! JSON REST handlers for the object collection.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use objectstore_app::ports::CollectionStore;
use objectstore_domain::collection::Collection;
use objectstore_domain::error::{NotFoundError, ObjectStoreError, ValidationError};
use objectstore_domain::id::ObjectId;
use objectstore_domain::record::{ObjectDraft, Record};

use crate::error::ApiError;
use crate::state::AppState;

const READ_FAILED: &str = "Data reading error";
const CREATE_FAILED: &str = "Object creation error";
const UPDATE_FAILED: &str = "Object update error";
const DELETE_FAILED: &str = "Object deletion error";

/// Body of a successful delete.
#[derive(Serialize)]
pub struct DeleteBody {
    pub success: bool,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Collection>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Record>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Ok(Json<Record>),
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Ok(Json<DeleteBody>),
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Turn the raw request body into a validated draft.
///
/// A request without a JSON content type is treated like an empty object,
/// so it fails on the missing name rather than on the media type.
fn parse_draft(body: Result<Json<Value>, JsonRejection>) -> Result<ObjectDraft, ApiError> {
    let value = match body {
        Ok(Json(value)) => value,
        Err(JsonRejection::MissingJsonContentType(_)) => {
            return Err(ObjectStoreError::from(ValidationError::MissingName).into());
        }
        Err(rejection) => {
            let err = ValidationError::MalformedBody(rejection.body_text());
            return Err(ObjectStoreError::from(err).into());
        }
    };
    ObjectDraft::from_value(value).map_err(|err| ObjectStoreError::from(err).into())
}

/// Largest integer a JSON number can carry without losing precision.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Parse a path id.
///
/// Plain integers (`1`, `+1`, `01`) and numeric spellings of a whole number
/// (`1.0`, `1e0`) both name a record. Anything else cannot match a stored
/// record, so it is reported as not found.
fn parse_id(raw: &str) -> Result<ObjectId, ApiError> {
    raw.parse()
        .ok()
        .or_else(|| whole_number(raw).and_then(ObjectId::new))
        .ok_or_else(|| {
            ObjectStoreError::from(NotFoundError {
                entity: "Object",
                id: raw.to_string(),
            })
            .into()
        })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_number(raw: &str) -> Option<u64> {
    let value: f64 = raw.parse().ok()?;
    let exact = value.is_finite() && value.fract() == 0.0;
    (exact && (0.0..=MAX_EXACT_INTEGER).contains(&value)).then(|| value as u64)
}

/// `GET /objects`
pub async fn list<S>(State(state): State<AppState<S>>) -> Result<ListResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let objects = state
        .object_service
        .list_objects()
        .await
        .map_err(|err| ApiError::new(err, READ_FAILED))?;
    Ok(ListResponse::Ok(Json(objects)))
}

/// `POST /objects`
pub async fn create<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let draft = parse_draft(body)?;
    let created = state
        .object_service
        .create_object(draft)
        .await
        .map_err(|err| ApiError::new(err, CREATE_FAILED))?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /objects/{id}`
pub async fn update<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let draft = parse_draft(body)?;
    let id = parse_id(&id)?;
    let updated = state
        .object_service
        .update_object(id, draft)
        .await
        .map_err(|err| ApiError::new(err, UPDATE_FAILED))?;
    Ok(UpdateResponse::Ok(Json(updated)))
}

/// `DELETE /objects/{id}`
pub async fn delete<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state
        .object_service
        .delete_object(id)
        .await
        .map_err(|err| ApiError::new(err, DELETE_FAILED))?;
    Ok(DeleteResponse::Ok(Json(DeleteBody { success: true })))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: &str) -> Option<u64> {
        parse_id(raw).ok().map(ObjectId::get)
    }

    #[test]
    fn should_accept_integer_spellings() {
        assert_eq!(id("1"), Some(1));
        assert_eq!(id("+1"), Some(1));
        assert_eq!(id("01"), Some(1));
    }

    #[test]
    fn should_accept_numeric_spellings_of_whole_numbers() {
        assert_eq!(id("1.0"), Some(1));
        assert_eq!(id("1e0"), Some(1));
        assert_eq!(id("2.5e1"), Some(25));
    }

    #[test]
    fn should_reject_ids_that_cannot_match_a_record() {
        for raw in ["abc", "0", "0.0", "-1", "1.5", "NaN", "inf", "1e300"] {
            assert_eq!(id(raw), None, "{raw}");
        }
    }
}
