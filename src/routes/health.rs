use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::utils::time::{now, to_rfc3339};

#[axum::debug_handler]
pub async fn health() -> impl IntoResponse {
    let body = json!({
        "status": "ok",
        "timestamp": to_rfc3339(now()),
    });
    (StatusCode::OK, Json(body))
}
