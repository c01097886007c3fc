use thiserror::Error;

#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Persistence error: {source}")]
    PersistenceError { source: std::io::Error },

    #[error("Serialization error: {source}")]
    SerializationError { source: serde_json::Error },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

pub type Result<T, E = DatabaseError> = core::result::Result<T, E>;
