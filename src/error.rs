use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found in stock")]
    ProductNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<weekly_meals_shared::Error> for AppError {
    fn from(err: weekly_meals_shared::Error) -> Self {
        match err {
            weekly_meals_shared::Error::ProductNotFound(name) => AppError::ProductNotFound(name),
            weekly_meals_shared::Error::InvalidIngredient(msg) => AppError::ValidationError(msg),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AppError::ProductNotFound(name) => {
                tracing::debug!(ingredient = %name, "product lookup missed");
                StatusCode::NOT_FOUND
            }
            AppError::ValidationError(msg) => {
                tracing::debug!("rejected request: {}", msg);
                StatusCode::UNPROCESSABLE_ENTITY
            }
        };

        (status_code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
