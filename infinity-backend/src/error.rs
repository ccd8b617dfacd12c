//! HTTP error type shared by all controllers.
//!
//! Storage failures are logged in full but only a generic message reaches
//! the client.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// A required form field was missing or blank
    #[error("{0}")]
    Validation(String),

    /// Malformed body or path parameter
    #[error("{0}")]
    BadRequest(String),

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("blocking task failed")]
    Blocking(#[from] actix_web::error::BlockingError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Storage(_) | ApiError::Blocking(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let message = match self {
            ApiError::Validation(m) | ApiError::BadRequest(m) => m.clone(),
            ApiError::Storage(e) => {
                log::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            ApiError::Blocking(e) => {
                log::error!("Blocking task error: {}", e);
                "Internal server error".to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(serde_json::json!({
            "error": message
        }))
    }
}
