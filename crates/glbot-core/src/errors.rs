//! Core errors.

use thiserror::Error;

/// Core error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum DomainError {
    /// Wraps [`glbot_chat_interface::ChatError`].
    #[error("Chat error: {source}")]
    ChatError {
        source: glbot_chat_interface::ChatError,
    },

    /// Wraps [`glbot_database_interface::DatabaseError`].
    #[error("Database error: {source}")]
    DatabaseError {
        source: glbot_database_interface::DatabaseError,
    },
}

impl From<glbot_chat_interface::ChatError> for DomainError {
    fn from(e: glbot_chat_interface::ChatError) -> Self {
        Self::ChatError { source: e }
    }
}

impl From<glbot_database_interface::DatabaseError> for DomainError {
    fn from(e: glbot_database_interface::DatabaseError) -> Self {
        Self::DatabaseError { source: e }
    }
}

/// Result alias for `DomainError`.
pub type Result<T> = core::result::Result<T, DomainError>;
