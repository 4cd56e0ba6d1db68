use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    #[error("HTTP error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match self {
            // Validation failures carry the full message list so the form
            // can show every problem at once.
            Error::Validation(errors) => (StatusCode::BAD_REQUEST, json!({ "errors": errors })),
            Error::BadRequest(msg) => (StatusCode::BAD_REQUEST, json!({ "error": msg })),
            Error::NotFound(msg) => (StatusCode::NOT_FOUND, json!({ "error": msg })),
            Error::Json(err) => (StatusCode::BAD_REQUEST, json!({ "error": err.to_string() })),
            Error::Reqwest(err) => (
                StatusCode::BAD_GATEWAY,
                json!({ "error": format!("External service error: {}", err) }),
            ),
            Error::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, json!({ "error": msg }))
            }
            Error::Internal(msg) => {
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An unexpected error occurred" }),
                )
            }
            Error::Anyhow(err) => {
                tracing::error!(error = ?err, "unhandled error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An unexpected error occurred" }),
                )
            }
            other => {
                tracing::error!(error = %other, "unexpected error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An unexpected error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
