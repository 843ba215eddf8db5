use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// AppError
///
/// Errors a handler can return. Each variant maps to a status code and a
/// `{ "error": "..." }` JSON body.
#[derive(Error, Debug)]
pub enum AppError {
    /// A package slug or legal document that the catalog doesn't have.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Writing a page into its output buffer failed.
    #[error("Render error: {0}")]
    Render(#[from] std::fmt::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, self.to_string()),
            AppError::Render(e) => {
                // Logged in full, hidden from the client.
                tracing::error!("Render error: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Render error".to_string())
            }
        };

        (status, Json(json!({ "error": error_message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
