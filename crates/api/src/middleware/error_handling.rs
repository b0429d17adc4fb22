//! # Error Handling Middleware
//!
//! Maps [`BookingError`] to HTTP status codes and a JSON body of the form
//! `{"error": message, "code": CODE, "retryable": bool}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use salonbook_core::errors::BookingError;
use serde_json::json;
use tracing::error;

/// Handler error wrapper that implements `IntoResponse`.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::NotFound(_) => StatusCode::NOT_FOUND,
            BookingError::SlotBlocked { .. }
            | BookingError::SlotTaken { .. }
            | BookingError::AlreadyExists(_) => StatusCode::CONFLICT,
            BookingError::Authentication(_) => StatusCode::UNAUTHORIZED,
            BookingError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            BookingError::Delivery(_) => StatusCode::BAD_GATEWAY,
            BookingError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(code = self.0.code(), "request failed: {:?}", self.0);
        }

        let body = Json(json!({
            "error": self.0.to_string(),
            "code": self.0.code(),
            "retryable": self.0.is_retryable(),
        }));

        (status, body).into_response()
    }
}

impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}

/// Repository failures surface as store errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(BookingError::Store(err))
    }
}

pub fn map_error(err: BookingError) -> Response {
    AppError(err).into_response()
}
