//! Error types for format selection and conversion

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("format not found: {0}")]
    FormatNotFound(String),

    #[error("{0}")]
    NotSupported(String),

    #[error("serialization failed: {0}")]
    SerializationError(String),

    #[error("parse failed: {0}")]
    ParseError(String),
}

impl From<vidprompt_core::Error> for FormatError {
    fn from(err: vidprompt_core::Error) -> Self {
        FormatError::ParseError(err.to_string())
    }
}
