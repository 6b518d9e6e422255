pub mod bookmarks;
pub mod catalog;
pub mod health;
pub mod practice;
pub mod progress;
pub mod schedule;
pub mod stats;

use std::fmt::Display;

use poem_openapi::payload::Json;

use crate::api::models::ErrorDto;

/// Logs a store failure and wraps it for a 503 body.
pub(crate) fn unavailable(context: &str, error: impl Display) -> Json<ErrorDto> {
    tracing::error!(error = %error, "{}", context);
    Json(ErrorDto::from(format!("database error: {}", error)))
}
