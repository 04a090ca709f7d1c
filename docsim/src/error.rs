//! Error types for docsim

use thiserror::Error;

/// docsim error type
#[derive(Error, Debug)]
pub enum Error {
    /// Fewer documents than the configured minimum were found
    #[error("Not enough text files: found {found}, need at least {required}")]
    InsufficientCorpus {
        /// Number of documents available
        found: usize,
        /// Configured minimum corpus size
        required: usize,
    },

    /// A document listed by the scanner could not be read
    #[error("Failed to read document {id}: {reason}")]
    DocumentRead {
        /// Document identifier
        id: String,
        /// Underlying cause
        reason: String,
    },

    /// Document enumeration failed
    #[error("Scan error: {0}")]
    Scan(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type alias for docsim operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<glob::PatternError> for Error {
    fn from(err: glob::PatternError) -> Self {
        Error::ConfigError(format!("Invalid glob pattern: {}", err))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        let path = err
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        Error::Scan(format!("{}: {}", path, err))
    }
}
