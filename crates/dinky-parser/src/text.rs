//! Stateless text cleanup used around the block scan.
//!
//! These are pure character filters: newline collapsing before the scan
//! and blank-run normalization after it. Interior space collapsing happens
//! inside the scan itself via last-character lookback.

/// Remove every newline character from the input.
///
/// Newlines are structurally insignificant in Dinky markup; they do not
/// terminate blocks or separate parameters. Carriage returns are dropped
/// alongside line feeds so CRLF input behaves like LF input.
pub(crate) fn collapse_newlines(input: &str) -> String {
    input.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

/// Normalize an accumulated text buffer into a block's final text.
///
/// Leading and trailing spaces are dropped, which also normalizes a
/// fully-blank buffer to the empty string.
pub(crate) fn normalize_text(buffer: &str) -> String {
    buffer.trim_matches(' ').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_newlines() {
        assert_eq!(collapse_newlines("a\nb\r\nc"), "abc");
        assert_eq!(collapse_newlines("plain"), "plain");
    }

    #[test]
    fn test_normalize_trims_sides() {
        assert_eq!(normalize_text("  hello world "), "hello world");
    }

    #[test]
    fn test_normalize_blank_to_empty() {
        assert_eq!(normalize_text("    "), "");
        assert_eq!(normalize_text(""), "");
    }
}
