//! Error codes for the Dinky diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Fragment scanning errors
//! - `E1xx` - Block structure errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Fragment Scanning Errors (E0xx)
    // =========================================================================
    /// Unterminated quote.
    ///
    /// A single-quoted span was opened but never closed before the end of
    /// the enclosing header or parameter item. Quoted spans suspend
    /// recognition of structural delimiters, so an open quote swallows the
    /// rest of the span.
    E001,

    // =========================================================================
    // Block Structure Errors (E1xx)
    // =========================================================================
    /// Unterminated header.
    ///
    /// A `%` opened a block header but no closing `%` was found before the
    /// end of the span.
    E100,

    /// Unterminated block.
    ///
    /// An opening `[` whose bracket nesting depth never returns to zero
    /// before the end of the span.
    E101,

    /// Malformed parameter.
    ///
    /// A header parameter item contains no `:` separator, so the split
    /// between parameter name and value is ambiguous.
    E102,

    /// Nesting depth exceeded.
    ///
    /// Blocks are nested deeper than the parser's recursion bound. The
    /// bound exists to reject adversarial input rather than overflow the
    /// stack.
    E103,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::E001 => write!(f, "E001"),
            ErrorCode::E100 => write!(f, "E100"),
            ErrorCode::E101 => write!(f, "E101"),
            ErrorCode::E102 => write!(f, "E102"),
            ErrorCode::E103 => write!(f, "E103"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E001.to_string(), "E001");
        assert_eq!(ErrorCode::E102.to_string(), "E102");
    }
}
