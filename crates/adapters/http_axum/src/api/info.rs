//! Health and info endpoints. None of them touch storage.

use axum::Json;
use serde::Serialize;

use objectstore_domain::time::{now, to_iso8601};

/// Body of `GET /hello`.
#[derive(Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// Body of `GET /time`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeResponse {
    pub server_time: String,
}

/// Body of `GET /status`.
#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// `GET /`
pub async fn root() -> &'static str {
    "Server is running"
}

/// `GET /hello`
pub async fn hello() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from server!",
    })
}

/// `GET /time`
pub async fn time() -> Json<TimeResponse> {
    Json(TimeResponse {
        server_time: to_iso8601(now()),
    })
}

/// `GET /status`
pub async fn status() -> Json<StatusResponse> {
    Json(StatusResponse { status: "ok" })
}
