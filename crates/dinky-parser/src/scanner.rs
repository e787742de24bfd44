//! Quote-aware fragment scanning.
//!
//! The fragment scanner locates and splits around delimiter characters
//! while ignoring delimiters inside single-quoted spans. Quote state is a
//! single toggle: a `'` flips "inside quotes" on and off, and a delimiter
//! seen while inside quotes is never a match or a split point.
//!
//! A span still inside quotes when the input ends is a structural failure
//! reported as [`ScanError::UnterminatedQuote`].

use thiserror::Error;

/// Failure while scanning a fragment.
///
/// Offsets are relative to the scanned input; callers rebase them onto
/// the enclosing span before building a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum ScanError {
    /// A quoted span was opened but never closed.
    #[error("unterminated quote at offset {quote_pos}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        quote_pos: usize,
    },
}

/// Find the first unquoted occurrence of `needle` at or after `from`.
///
/// Returns `Ok(None)` when the delimiter does not occur; absence is not a
/// failure, callers validate the sentinel. `from` must lie on a character
/// boundary.
pub(crate) fn find_fragment(
    input: &str,
    needle: char,
    from: usize,
) -> Result<Option<usize>, ScanError> {
    let mut in_quote = false;
    let mut quote_pos = 0;

    for (offset, c) in input[from..].char_indices() {
        let i = from + offset;
        if c == '\'' {
            in_quote = !in_quote;
            if in_quote {
                quote_pos = i;
            }
            continue;
        }
        if in_quote {
            continue;
        }
        if c == needle {
            return Ok(Some(i));
        }
    }

    if in_quote {
        Err(ScanError::UnterminatedQuote { quote_pos })
    } else {
        Ok(None)
    }
}

/// Split `input` at every unquoted occurrence of `delim`.
///
/// Segments are produced in source order. Empty segments (adjacent
/// delimiters, or a leading/trailing delimiter) are preserved, and the
/// tail segment is always emitted even without a trailing delimiter.
pub(crate) fn split_fragments(input: &str, delim: char) -> Result<Vec<&str>, ScanError> {
    let mut segments = Vec::new();
    let mut in_quote = false;
    let mut quote_pos = 0;
    let mut segment_start = 0;

    for (i, c) in input.char_indices() {
        if c == '\'' {
            in_quote = !in_quote;
            if in_quote {
                quote_pos = i;
            }
            continue;
        }
        if in_quote {
            continue;
        }
        if c == delim {
            segments.push(&input[segment_start..i]);
            segment_start = i + c.len_utf8();
        }
    }

    if in_quote {
        return Err(ScanError::UnterminatedQuote { quote_pos });
    }

    segments.push(&input[segment_start..]);
    Ok(segments)
}
