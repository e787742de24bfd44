//! The block builder: nested block location and the per-span scan.
//!
//! [`parse_span`] performs one left-to-right scan over a source span,
//! dispatching on structural characters (header `%`, directive `!`,
//! escape `\`, nested block `[`) and accumulating free text with
//! space-run collapsing. Each recursion level owns a local builder state
//! that is finalized into exactly one [`Block`] and moved to the caller;
//! sibling recursive calls never share state.

use dinky_core::block::{Block, DEFAULT_KIND, ParamMap, StyleMap};

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    header,
    scanner::{self, ScanError},
    span::Span,
    styling, text,
};

/// Maximum markup nesting depth.
///
/// Recursion depth equals nesting depth, so the bound keeps adversarial
/// input from overflowing the stack. Real documents nest a handful of
/// levels.
pub(crate) const MAX_NESTING_DEPTH: usize = 128;

/// Find the closing bracket matching the opening bracket at `from`.
///
/// Matching respects arbitrary nesting depth: every unescaped `[`
/// increments a depth counter, every unescaped `]` decrements it, and the
/// position where depth returns to zero is the match. A bracket preceded
/// by a backslash is a literal character and does not participate in
/// depth counting.
///
/// Returns `None` when depth never returns to zero before the span ends.
pub(crate) fn find_block_end(input: &str, from: usize) -> Option<usize> {
    let mut depth = 0isize;
    let mut prev: Option<char> = None;

    for (offset, c) in input[from..].char_indices() {
        let escaped = prev == Some('\\') && (c == '[' || c == ']');
        if !escaped {
            if c == '[' {
                depth += 1;
            } else if c == ']' {
                depth -= 1;
                if depth == 0 {
                    return Some(from + offset);
                }
            }
        }
        prev = Some(c);
    }

    None
}

/// Parse one source span into a single block.
///
/// `base` is the byte offset of `input` within the normalized source and
/// `depth` the current nesting depth. The scan consumes headers, style
/// directives, and nested spans; what remains becomes the block's text
/// with space runs collapsed to one.
pub(crate) fn parse_span(input: &str, base: usize, depth: usize) -> Result<Block> {
    if depth >= MAX_NESTING_DEPTH {
        return Err(Diagnostic::error("block nesting is too deep")
            .with_code(ErrorCode::E103)
            .with_label(
                Span::new(base..base + input.len()),
                format!("nested more than {MAX_NESTING_DEPTH} levels"),
            )
            .with_help("flatten the document structure"));
    }

    let mut kind: Option<String> = None;
    let mut params: Option<ParamMap> = None;
    let mut styling = StyleMap::new();
    let mut children: Vec<Block> = Vec::new();
    let mut buffer = String::new();
    let mut last_char = '\0';
    let mut i = 0;

    while i < input.len() {
        let c = input[i..].chars().next().expect("i is on a char boundary");
        match c {
            // Block header: `%TYPE key:value%`.
            '%' => {
                let closed = scanner::find_fragment(input, '%', i + 1)
                    .map_err(|err| quote_diagnostic(err, base))?
                    .ok_or_else(|| {
                        Diagnostic::error("unterminated header")
                            .with_code(ErrorCode::E100)
                            .with_label(
                                Span::new(base + i..base + input.len()),
                                "header opened here",
                            )
                            .with_help("add a closing `%`")
                    })?;
                let (header_kind, header_params) =
                    header::parse_header(&input[i + 1..closed], base + i + 1)?;
                kind = Some(header_kind);
                params = Some(header_params);
                i = closed + 1;
            }
            // Inline style directive: `!name` or `!name=value`.
            '!' => {
                let directive = styling::parse_directive(input, i);
                styling.insert(
                    directive.name.to_string(),
                    directive.value.map(str::to_string),
                );
                // Skip the terminating space along with the token.
                i = if directive.end < input.len() {
                    directive.end + 1
                } else {
                    directive.end
                };
            }
            // Escaped bracket: literal character, not structure.
            '\\' if next_char_is_bracket(input, i) => {
                let bracket = input[i + 1..]
                    .chars()
                    .next()
                    .expect("guard checked the next char");
                buffer.push(bracket);
                last_char = bracket;
                i += 2;
            }
            // Nested block.
            '[' => {
                let closed = find_block_end(input, i).ok_or_else(|| {
                    Diagnostic::error("unterminated block")
                        .with_code(ErrorCode::E101)
                        .with_label(Span::new(base + i..base + input.len()), "block opened here")
                        .with_help("add a matching `]`")
                })?;
                let child = parse_span(&input[i + 1..closed], base + i + 1, depth + 1)?;
                children.push(child);
                i = closed + 1;
            }
            // Collapse runs of spaces to a single space.
            ' ' if last_char == ' ' => {
                i += 1;
            }
            _ => {
                buffer.push(c);
                last_char = c;
                i += c.len_utf8();
            }
        }
    }

    Ok(Block::new(
        kind.as_deref().unwrap_or(DEFAULT_KIND),
        params,
        styling,
        text::normalize_text(&buffer),
        children,
    ))
}

/// Whether the character after the backslash at `i` is a bracket.
fn next_char_is_bracket(input: &str, i: usize) -> bool {
    matches!(input[i + 1..].chars().next(), Some('[') | Some(']'))
}

/// Build the unterminated-quote diagnostic for a header scan failure.
fn quote_diagnostic(err: ScanError, base: usize) -> Diagnostic {
    let ScanError::UnterminatedQuote { quote_pos } = err;
    Diagnostic::error("unterminated quote in header")
        .with_code(ErrorCode::E001)
        .with_label(Span::at(base + quote_pos), "quote opened here")
        .with_help("close the `'` before the end of the header")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_block_end_flat() {
        assert_eq!(find_block_end("[abc]", 0), Some(4));
    }

    #[test]
    fn test_find_block_end_nested() {
        assert_eq!(find_block_end("[a[b[c]]d]", 0), Some(9));
        assert_eq!(find_block_end("[a[b[c]]d]", 2), Some(7));
    }

    #[test]
    fn test_find_block_end_skips_escaped_brackets() {
        assert_eq!(find_block_end("[a\\]b]", 0), Some(5));
        assert_eq!(find_block_end("[a\\[b]", 0), Some(5));
    }

    #[test]
    fn test_find_block_end_unterminated() {
        assert_eq!(find_block_end("[abc", 0), None);
        assert_eq!(find_block_end("[a[b]", 0), None);
    }

    #[test]
    fn test_parse_span_plain_text() {
        let block = parse_span("hello world", 0, 0).expect("span parses");
        assert_eq!(block.kind(), "TEXT");
        assert_eq!(block.text(), "hello world");
        assert!(block.children().is_empty());
        assert!(block.params().is_none());
    }

    #[test]
    fn test_parse_span_escaped_brackets_become_text() {
        let block = parse_span("a \\[literal\\] b", 0, 0).expect("span parses");
        assert_eq!(block.text(), "a [literal] b");
        assert!(block.children().is_empty());
    }

    #[test]
    fn test_parse_span_nesting_bound() {
        let err = parse_span("too deep", 0, MAX_NESTING_DEPTH).expect_err("depth is bounded");
        assert_eq!(err.code(), Some(ErrorCode::E103));
    }

    #[test]
    fn test_stray_closing_bracket_is_text() {
        let block = parse_span("a ] b", 0, 0).expect("span parses");
        assert_eq!(block.text(), "a ] b");
    }
}
