//! # Dinky Parser
//!
//! Parser for the Dinky markup language. This crate turns a flat
//! character stream into a tree of typed content blocks: a quote-aware,
//! escape-aware, recursively-nested scan extracting per-block type tags,
//! keyed parameters, and inline styling directives from free text.
//!
//! ## Usage
//!
//! ```
//! let source = "[%title v:'Dinky!'%]";
//!
//! let document = dinky_parser::parse(source).expect("valid markup");
//! let block = &document.children()[0];
//! assert_eq!(block.kind(), "TITLE");
//! ```

mod builder;
mod header;
mod literal;
mod scanner;
mod span;
mod styling;
mod text;

pub mod error;

pub use error::ParseError;
pub use span::Span;

use log::{debug, trace};

use dinky_core::document::Document;

/// Normalize raw source text for parsing.
///
/// Newline characters are collapsed to nothing; they are structurally
/// insignificant in Dinky markup. Diagnostic spans produced by [`parse`]
/// refer to this normalized text, so callers that display source snippets
/// should display the normalized form. Normalization is idempotent.
pub fn normalize_source(source: &str) -> String {
    text::collapse_newlines(source)
}

/// Parse source text into a document tree.
///
/// This is the main entry point for parsing Dinky markup. The source is
/// normalized, one pair of enclosing brackets is stripped when the
/// leading `[` matches the final `]`, and the remaining span is scanned
/// recursively into a block tree rooted in a fresh [`Document`].
///
/// # Errors
///
/// Returns a [`ParseError`] for structural failures in the input:
/// unterminated headers, blocks, or quotes, and malformed header
/// parameters. The parser never truncates or guesses; each diagnostic
/// carries the offending byte span.
///
/// # Example
///
/// ```
/// let document = dinky_parser::parse("[hello [inner] world]").expect("valid markup");
///
/// let block = &document.children()[0];
/// assert_eq!(block.text(), "hello world");
/// assert_eq!(block.children()[0].text(), "inner");
/// ```
pub fn parse(source: &str) -> Result<Document, ParseError> {
    debug!("Parsing document");

    let normalized = normalize_source(source);
    let (span_text, base) = strip_enclosing_brackets(&normalized);
    trace!(base, span_len = span_text.len(); "Scanning top-level span");

    let block = builder::parse_span(span_text, base, 0).map_err(ParseError::from)?;

    let mut document = Document::new();
    document.push_block(block);

    debug!(block_count = document.block_count(); "Document parsed successfully");
    Ok(document)
}

/// Strip one pair of enclosing brackets from the whole input, if present.
///
/// The pair is stripped only when the leading `[` actually matches the
/// final `]`; in `[a][b]` the leading bracket closes early, so the input
/// is left untouched and both blocks parse as siblings.
///
/// Returns the span to scan and its byte offset within `input`.
fn strip_enclosing_brackets(input: &str) -> (&str, usize) {
    if input.starts_with('[') && builder::find_block_end(input, 0) == Some(input.len() - 1) {
        (&input[1..input.len() - 1], 1)
    } else {
        (input, 0)
    }
}
