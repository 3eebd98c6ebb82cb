//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::OoxmlError;
use crate::ooxml::opc::error::OpcError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) | OoxmlError::Opc(OpcError::Io(e)) => Error::Io(e),
            other => Error::Ooxml(other),
        }
    }
}

impl From<OpcError> for Error {
    fn from(err: OpcError) -> Self {
        match err {
            OpcError::Io(e) => Error::Io(e),
            other => Error::Ooxml(OoxmlError::Opc(other)),
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        match err {
            image::ImageError::IoError(e) => Error::Io(e),
            other => Error::Image(other.to_string()),
        }
    }
}
