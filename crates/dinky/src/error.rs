//! Error types for Dinky operations.
//!
//! This module provides the main error type [`DinkyError`] which wraps
//! the error conditions that can occur while processing a document.

use std::io;

use thiserror::Error;

use dinky_parser::error::ParseError;

/// The main error type for Dinky operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant contains structured error information with source
/// spans into the normalized source text, which is stored alongside the
/// error for snippet rendering.
#[derive(Debug, Error)]
pub enum DinkyError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Encode error: {0}")]
    Encode(Box<dyn std::error::Error>),
}

impl DinkyError {
    /// Create a new `Parse` error with the associated normalized source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}

impl From<png::EncodingError> for DinkyError {
    fn from(error: png::EncodingError) -> Self {
        Self::Encode(Box::new(error))
    }
}
