//! JSON handler modules and the route table.

#[allow(clippy::missing_errors_doc)]
pub mod info;
#[allow(clippy::missing_errors_doc)]
pub mod objects;

use axum::Router;
use axum::routing::{get, put};

use objectstore_app::ports::CollectionStore;

use crate::state::AppState;

/// Build the route table for every defined endpoint.
///
/// Paths that exist but are hit with an unsupported method fall through to
/// [`route_not_found`](crate::router::route_not_found), same as unknown paths.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: CollectionStore + Send + Sync + 'static,
{
    let not_found = crate::router::route_not_found;

    Router::new()
        // Info
        .route("/", get(info::root).fallback(not_found))
        .route("/hello", get(info::hello).fallback(not_found))
        .route("/time", get(info::time).fallback(not_found))
        .route("/status", get(info::status).fallback(not_found))
        // Objects
        .route(
            "/objects",
            get(objects::list::<S>)
                .post(objects::create::<S>)
                .fallback(not_found),
        )
        .route(
            "/objects/{id}",
            put(objects::update::<S>)
                .delete(objects::delete::<S>)
                .fallback(not_found),
        )
}
