use std::fmt;

use axum::{
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum AppError {
    NotFound,
    MethodNotAllowed { allow: &'static str },
    Internal(String),
    InvalidEvent(serde_json::Error),
    Encode(serde_json::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not Found"),
            AppError::MethodNotAllowed { .. } => write!(f, "Method Not Allowed"),
            AppError::Internal(msg) => write!(f, "Internal Server Error: {msg}"),
            AppError::InvalidEvent(e) => write!(f, "Unsupported invocation event: {e}"),
            AppError::Encode(e) => write!(f, "Failed to encode response envelope: {e}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::InvalidEvent(e) | AppError::Encode(e) => Some(e),
            _ => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "detail": "Not Found" })),
            )
                .into_response(),
            AppError::MethodNotAllowed { allow } => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, allow)],
                Json(json!({ "detail": "Method Not Allowed" })),
            )
                .into_response(),
            // The cause is logged, never sent to the caller.
            other => {
                error!("{other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "detail": "Internal Server Error" })),
                )
                    .into_response()
            }
        }
    }
}
