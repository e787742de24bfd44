//! Literal value normalization for header parameters.
//!
//! A raw parameter value token becomes a display-ready literal string:
//! quoted tokens are unwrapped verbatim, bare numeric tokens get the
//! default length unit appended, and everything else passes through
//! unchanged.

/// Default length unit appended to bare numeric values.
const DEFAULT_UNIT: &str = "rem";

/// Normalize a raw parameter value token.
///
/// - A token surrounded by single quotes (length >= 2) loses exactly one
///   leading and one trailing quote; the interior is returned verbatim
///   with no further escape processing.
/// - Otherwise, a token that parses as a finite number and does not end
///   in `%` gets `rem` appended.
/// - Any other token passes through unchanged.
///
/// This is a pure function with no side effects.
pub(crate) fn parse_literal(token: &str) -> String {
    if token.len() >= 2 && token.starts_with('\'') && token.ends_with('\'') {
        return token[1..token.len() - 1].to_string();
    }

    if !token.ends_with('%') && is_numeric(token) {
        return format!("{token}{DEFAULT_UNIT}");
    }

    token.to_string()
}

/// Whether the token reads as a plain finite number.
fn is_numeric(token: &str) -> bool {
    token
        .parse::<f64>()
        .map(|value| value.is_finite())
        .unwrap_or(false)
}
