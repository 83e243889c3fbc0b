use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plan_core::PlanError;
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Plan error: {0}")]
    Plan(#[from] PlanError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Plan(e) if e.is_configuration() => {
                tracing::error!("Plan configuration error: {e}");
                (StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
            }
            AppError::Plan(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        };

        let body = json!({ "error": message });
        (status, Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
