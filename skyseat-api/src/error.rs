use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skyseat_core::CoreError;
use skyseat_seating::AllocationError;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Catalog failures are server-side: logged, then masked
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

/// Capacity failures reach the client verbatim
impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        AppError::ConflictError(err.to_string())
    }
}
