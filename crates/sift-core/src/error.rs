//! Error types for Sift.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The caller supplied unusable input, or a component was used before it was configured.
    #[error("Invalid input: {0}")]
    Input(String),

    /// A downstream dependency (the LLM API) failed or is unavailable.
    #[error("Service error: {0}")]
    Service(String),

    /// The model answered, but its payload did not match the expected shape.
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Externally visible failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Client's fault.
    Input,
    /// Dependency unavailable or misbehaving.
    Service,
    /// Anything uncategorized.
    Internal,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Input(_) => ErrorKind::Input,
            Self::Service(_) => ErrorKind::Service,
            Self::Parse(_)
            | Self::Storage(_)
            | Self::Database(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::Config(_)
            | Self::Internal(_) => ErrorKind::Internal,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
