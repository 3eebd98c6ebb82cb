//! Unified error types for pitchdeck.
use thiserror::Error;

/// Main error type for pitchdeck operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised while building or serializing the presentation package
    #[error("OOXML error: {0}")]
    Ooxml(crate::ooxml::OoxmlError),

    /// Image could not be decoded
    #[error("Image error: {0}")]
    Image(String),

    /// YAML rendering failed
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for pitchdeck operations.
pub type Result<T> = std::result::Result<T, Error>;
