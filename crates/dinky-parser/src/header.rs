//! Block header parsing.
//!
//! A header is the interior of a `%TYPE key:value key2:'value two'%`
//! directive: a type token, a space, then space-separated `key:value`
//! pairs. Splitting is quote-aware, so spaces and colons inside quoted
//! values never split.

use dinky_core::block::ParamMap;

use crate::{
    error::{Diagnostic, ErrorCode, Result},
    literal,
    scanner::{self, ScanError},
    span::Span,
};

/// Parse the interior of a `%...%` header into a type tag and parameters.
///
/// `base` is the byte offset of the interior within the normalized source,
/// used to rebase diagnostic spans.
///
/// The type token is everything before the first space, uppercased. A
/// header without parameters yields an empty map. Duplicate keys overwrite
/// earlier values (last occurrence wins) while keeping appearance order.
pub(crate) fn parse_header(interior: &str, base: usize) -> Result<(String, ParamMap)> {
    let (kind_token, rest, rest_base) = match interior.find(' ') {
        Some(space) => (
            &interior[..space],
            &interior[space + 1..],
            base + space + 1,
        ),
        None => (interior, "", base),
    };

    let kind = kind_token.to_uppercase();
    let mut params = ParamMap::new();

    let items = scanner::split_fragments(rest, ' ')
        .map_err(|err| quote_diagnostic(err, rest_base, "in header parameters"))?;

    let mut item_offset = 0;
    for item in items {
        // Adjacent spaces produce empty items; they carry no parameter.
        if !item.is_empty() {
            let item_span = Span::new(rest_base + item_offset..rest_base + item_offset + item.len());

            let colon = scanner::find_fragment(item, ':', 0)
                .map_err(|err| quote_diagnostic(err, rest_base + item_offset, "in this parameter"))?
                .ok_or_else(|| {
                    Diagnostic::error("parameter has no `:` separator")
                        .with_code(ErrorCode::E102)
                        .with_label(item_span, "in this parameter")
                        .with_help("write the parameter as `name:value`")
                })?;

            let name = &item[..colon];
            let value = literal::parse_literal(&item[colon + 1..]);
            params.insert(name.to_string(), value);
        }
        item_offset += item.len() + 1;
    }

    Ok((kind, params))
}

/// Build the unterminated-quote diagnostic for a scan failure.
fn quote_diagnostic(err: ScanError, base: usize, context: &str) -> Diagnostic {
    let ScanError::UnterminatedQuote { quote_pos } = err;
    Diagnostic::error(format!("unterminated quote {context}"))
        .with_code(ErrorCode::E001)
        .with_label(Span::at(base + quote_pos), "quote opened here")
        .with_help("close the `'` before the end of the header")
}
