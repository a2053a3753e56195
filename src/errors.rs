use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::database::repositories::StoreError;

/// Сообщение, которое клиент получает вместо деталей внутренней ошибки
pub const SERVER_ERROR_MESSAGE: &str = "server error";

/// Унифицированная структура ответа об ошибке: `{"error":{"message":"..."}}`
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: ErrorBody {
                message: message.into(),
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("Internal server error")]
    Internal,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Store(_) | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = if status.is_server_error() {
            log::error!("{}: {}", self.code(), self);
            SERVER_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorResponse::new(message))
    }
}

impl AppError {
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Store(StoreError::ConstraintViolation(_)) => "CONSTRAINT_VIOLATION",
            AppError::Store(StoreError::Database(_)) => "DB_ERROR",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            AppError::Internal => "INTERNAL",
        }
    }
}
