//! Axum router assembly.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tower_http::trace::TraceLayer;

use objectstore_app::ports::CollectionStore;

use crate::error::ErrorBody;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Mounts every endpoint at the root, answers anything unmatched with a JSON
/// 404, and includes a [`TraceLayer`] that logs each HTTP request/response at
/// the `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: CollectionStore + Send + Sync + 'static,
{
    crate::api::routes::<S>()
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Fallback for unknown paths and unsupported methods.
pub async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "Route not found".to_string(),
        }),
    )
}
