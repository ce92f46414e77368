//! # Error Handling
//!
//! Maps [`BookingError`] values escaping a handler to HTTP responses. A
//! failure that reaches this layer is blocking: the user gets a full error
//! page and no partial data, per the frontend's failure contract. Expected
//! conditions (validation alerts, duplicate-key conflicts, availability
//! hints) are rendered inline by the handlers and never reach this type.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use slotbook_core::errors::BookingError;
use tracing::error;

use crate::views;

/// Application error wrapper that provides HTTP status code mapping.
#[derive(Debug)]
pub struct AppError(pub BookingError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            BookingError::Validation(_) => StatusCode::BAD_REQUEST,
            BookingError::Conflict(_) => StatusCode::CONFLICT,
            // Server-side rejections are not distinguished from transport
            // failures in what the user sees.
            BookingError::Rejected(_) => StatusCode::BAD_GATEWAY,
            BookingError::Api(_) => StatusCode::BAD_GATEWAY,
        };

        error!(error = %self.0, "request failed");

        let page = views::error_page(status);
        (status, page).into_response()
    }
}

/// Allows `?` on functions returning `BookingResult` inside handlers.
impl From<BookingError> for AppError {
    fn from(err: BookingError) -> Self {
        AppError(err)
    }
}
