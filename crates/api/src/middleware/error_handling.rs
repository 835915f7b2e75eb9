//! # Error Handling Middleware
//!
//! Maps [`SchedulerError`] onto HTTP status codes and a JSON body of the form
//! `{"error": "<message>"}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use slotbook_core::errors::SchedulerError;
use tracing::{error, warn};

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use slotbook_api::middleware::error_handling::AppError;
/// use slotbook_core::errors::SchedulerError;
/// use uuid::Uuid;
///
/// async fn handler(id: Uuid) -> Result<Json<()>, AppError> {
///     Err(SchedulerError::slot_not_found(id).into())
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub SchedulerError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            SchedulerError::NotFound(_) => StatusCode::NOT_FOUND,
            SchedulerError::Validation(_) => StatusCode::BAD_REQUEST,
            SchedulerError::Conflict(_) => StatusCode::CONFLICT,
            SchedulerError::AlreadyBooked(_) => StatusCode::CONFLICT,
            SchedulerError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SchedulerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            error!("Request failed: {:?}", self.0);
        } else {
            warn!("Request rejected ({}): {}", status, self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Allows `?` on `SchedulerResult` inside handlers.
impl From<SchedulerError> for AppError {
    fn from(err: SchedulerError) -> Self {
        AppError(err)
    }
}

/// Wraps an untyped report as `SchedulerError::Database`.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(SchedulerError::Database(err))
    }
}
