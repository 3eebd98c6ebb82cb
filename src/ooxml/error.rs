//! Errors of the presentation document layer.
use crate::ooxml::opc::error::OpcError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OoxmlError>;

#[derive(Error, Debug)]
pub enum OoxmlError {
    /// Reading or writing the ZIP package failed
    #[error("OPC error: {0}")]
    Opc(#[from] OpcError),

    /// Slide XML could not be written or parsed
    #[error("XML error: {0}")]
    Xml(String),

    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Unsupported picture bytes, bad partnames, mismatched slide lists
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for OoxmlError {
    fn from(err: quick_xml::Error) -> Self {
        OoxmlError::Xml(err.to_string())
    }
}

// `write!` into a String only fails if a Display impl does
impl From<std::fmt::Error> for OoxmlError {
    fn from(_: std::fmt::Error) -> Self {
        OoxmlError::Xml("formatting slide XML failed".to_string())
    }
}
