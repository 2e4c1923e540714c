//! Errors surfaced by the HTTP layer.
//!
//! Every failure becomes a JSON body of the form `{"error": "..."}` with a
//! status code chosen by `AppError::status`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    /// No todo is stored under the requested id.
    #[error("todo {0} not found")]
    NotFound(String),

    /// The request body was missing, not JSON, or not a valid todo.
    #[error(transparent)]
    MalformedBody(#[from] JsonRejection),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MalformedBody(rejection) => rejection.status(),
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Store(err) => tracing::error!(error = %err, "store operation failed"),
            AppError::MalformedBody(rejection) => {
                tracing::debug!(%status, reason = %rejection.body_text(), "rejected request body")
            }
            AppError::NotFound(id) => tracing::debug!(%id, "todo not found"),
        }
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
