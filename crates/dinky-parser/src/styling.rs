//! Inline style directive parsing.
//!
//! A style directive is an inline `!name` or `!name=value` token attaching
//! a named attribute to the enclosing block. The token runs from just
//! after the `!` to the next space (or end of input); a value without `=`
//! means the directive is a boolean flag.

/// A parsed style directive.
///
/// Borrowed from the scanned span; `end` is the byte offset of the space
/// terminating the token (or the span length when the token runs to the
/// end). The consumed span includes the leading `!` and the trailing
/// space, so none of it reaches the block's text.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Directive<'a> {
    pub name: &'a str,
    pub value: Option<&'a str>,
    pub end: usize,
}

/// Parse the style directive starting at the `!` at byte offset `bang`.
pub(crate) fn parse_directive(input: &str, bang: usize) -> Directive<'_> {
    let tail = &input[bang + 1..];
    let token_len = tail.find(' ').unwrap_or(tail.len());
    let token = &tail[..token_len];
    let end = bang + 1 + token_len;

    match token.find('=') {
        Some(eq) => Directive {
            name: &token[..eq],
            value: Some(&token[eq + 1..]),
            end,
        },
        None => Directive {
            name: token,
            value: None,
            end,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_directive() {
        let d = parse_directive("!bold rest", 0);
        assert_eq!(d.name, "bold");
        assert_eq!(d.value, None);
        assert_eq!(d.end, 5);
    }

    #[test]
    fn test_valued_directive() {
        let d = parse_directive("!size=2 rest", 0);
        assert_eq!(d.name, "size");
        assert_eq!(d.value, Some("2"));
        assert_eq!(d.end, 7);
    }

    #[test]
    fn test_directive_at_end_of_input() {
        let d = parse_directive("text !bold", 5);
        assert_eq!(d.name, "bold");
        assert_eq!(d.value, None);
        assert_eq!(d.end, 10);
    }

    #[test]
    fn test_equals_after_space_belongs_to_text() {
        // The `=` is outside the directive token.
        let d = parse_directive("!bold a=b", 0);
        assert_eq!(d.name, "bold");
        assert_eq!(d.value, None);
    }

    #[test]
    fn test_empty_value() {
        let d = parse_directive("!k= x", 0);
        assert_eq!(d.name, "k");
        assert_eq!(d.value, Some(""));
    }
}
