use crate::error::AppError;

/// Methods served on `/`. axum answers HEAD through the GET route.
pub const ROOT_ALLOW: &str = "GET, HEAD";

pub async fn not_found() -> AppError {
    AppError::NotFound
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed { allow: ROOT_ALLOW }
}
