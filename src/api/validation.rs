//! Валидация входных данных и санитизация текста перед отдачей клиенту.

use serde::de::DeserializeOwned;

use crate::errors::AppError;

/// Escapes angle brackets so stored markup is rendered as text.
/// Without `<` and `>` no tag, and therefore no script or event handler
/// attribute, can survive; everything else passes through untouched.
pub fn sanitize_text(value: &str) -> String {
    let mut sanitized = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '<' => sanitized.push_str("&lt;"),
            '>' => sanitized.push_str("&gt;"),
            _ => sanitized.push(c),
        }
    }
    sanitized
}

/// Parses a JSON request body. An empty body reads as `{}`.
pub fn parse_json_body<T>(body: &[u8]) -> Result<T, AppError>
where
    T: DeserializeOwned + Default,
{
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        log::debug!("Rejected request body: {}", e);
        AppError::InvalidInput(format!("Invalid JSON in request body: {}", e))
    })
}

/// Unwraps a required field or names it in a 400 error.
pub fn require_field<T>(value: Option<T>, field: &str) -> Result<T, AppError> {
    value.ok_or_else(|| AppError::InvalidInput(format!("Missing '{}' in request body", field)))
}
