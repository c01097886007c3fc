use thiserror::Error;

/// Chat service error.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("Unknown channel '{0}'")]
    UnknownChannel(String),

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = ChatError> = core::result::Result<T, E>;
