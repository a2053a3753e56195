use actix_web::{http::StatusCode, web, HttpResponse};

use crate::{
    config::Config,
    errors::{AppError, ErrorResponse},
};

/// Body size cap for the `web::Bytes` extractor.
pub fn payload_config(config: &Config) -> web::PayloadConfig {
    web::PayloadConfig::new(config.effective_max_body_bytes())
}

/// Turns a failed body extraction into an `AppError`, keeping 413 for
/// oversized payloads.
pub fn extracted_body(
    body: Result<web::Bytes, actix_web::Error>,
) -> Result<web::Bytes, AppError> {
    body.map_err(|err| {
        let status = err.as_response_error().status_code();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(format!("Request body is too large: {}", err))
        } else {
            AppError::InvalidInput(format!("Failed to read request body: {}", err))
        }
    })
}

/// Fallback for unmatched routes, keeping the usual error body shape.
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new("Not found"))
}
