//! Server errors.

use actix_http::StatusCode;
use actix_web::ResponseError;
use thiserror::Error;

/// Server error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(
        "Error while parsing webhook event for type {},\n  caused by: {}",
        event_type,
        source
    )]
    EventParseError {
        event_type: String,
        source: serde_json::Error,
    },

    #[error("I/O error,\n  caused by: {}", source)]
    IoError { source: std::io::Error },

    #[error("Domain error,\n  caused by: {}", source)]
    DomainError { source: glbot_core::DomainError },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match &self {
            ServerError::EventParseError { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Result alias for `ServerError`.
pub type Result<T> = core::result::Result<T, ServerError>;
