//! Error and diagnostic system for the Dinky parser.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled source spans for rich error context
//! - Severity levels
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which
//! represents a single error or warning message with an optional error
//! code, source locations, and help text. Diagnostics are wrapped in
//! [`ParseError`] for returning from the top-level parse entry point.
//!
//! # Example
//!
//! ```
//! # use dinky_parser::error::{Diagnostic, ErrorCode};
//! # use dinky_parser::Span;
//!
//! let span = Span::new(4..12);
//!
//! let diag = Diagnostic::error("unterminated block")
//!     .with_code(ErrorCode::E101)
//!     .with_label(span, "block opened here")
//!     .with_help("add a matching `]`");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use parse_error::Result;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
