//! Block tree nodes for parsed Dinky documents.
//!
//! A [`Block`] is one node of the parsed document tree, representing either
//! free text or a typed, parameterized content unit. Blocks own their
//! children exclusively; the tree has no sharing and no cycles.
//!
//! # Example
//!
//! ```
//! # use dinky_core::block::Block;
//! let block = Block::new("text", None, Default::default(), "hello", Vec::new());
//! assert_eq!(block.kind(), "TEXT");
//! assert_eq!(block.to_markup(), "[hello]");
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Keyed header parameters, in order of appearance in the source.
///
/// Duplicate keys overwrite earlier values while keeping the original
/// position (last occurrence wins).
pub type ParamMap = IndexMap<String, String>;

/// Inline style directives attached to a block.
///
/// A `None` value means the directive was given without `=value` and acts
/// as a boolean flag.
pub type StyleMap = IndexMap<String, Option<String>>;

/// The block type used when no header directive overrides it.
pub const DEFAULT_KIND: &str = "TEXT";

/// One node of the parsed document tree.
///
/// Every block is fully constructed in a single pass over its source span
/// and is immutable afterwards. The block's own text carries no structural
/// syntax: headers, style directives, and nested spans are consumed while
/// the tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Block {
    /// Uppercased block type tag.
    kind: String,
    /// Header parameters, `None` when no header directive was present.
    params: Option<ParamMap>,
    /// Inline style directives, in order of appearance.
    styling: StyleMap,
    /// The block's own text with space runs collapsed.
    text: String,
    /// Nested blocks, in order of appearance.
    children: Vec<Block>,
}

impl Block {
    /// Create a new block.
    ///
    /// The `kind` tag is uppercased, preserving the invariant that block
    /// types compare case-insensitively in source form.
    pub fn new(
        kind: impl AsRef<str>,
        params: Option<ParamMap>,
        styling: StyleMap,
        text: impl Into<String>,
        children: Vec<Block>,
    ) -> Self {
        Self {
            kind: kind.as_ref().to_uppercase(),
            params,
            styling,
            text: text.into(),
            children,
        }
    }

    /// Returns the uppercased block type tag.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the header parameters, or `None` when the block had no header.
    pub fn params(&self) -> Option<&ParamMap> {
        self.params.as_ref()
    }

    /// Returns the inline style directives.
    pub fn styling(&self) -> &StyleMap {
        &self.styling
    }

    /// Returns the block's own text content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the nested child blocks in source order.
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Returns `true` if this is a plain text block without a header.
    pub fn is_text(&self) -> bool {
        self.kind == DEFAULT_KIND && self.params.is_none()
    }

    /// Serialize this block back to canonical markup.
    ///
    /// The canonical form quotes every parameter value and separates the
    /// header, directives, text, and children with single spaces:
    ///
    /// ```text
    /// [%TITLE v:'Dinky!'% !bold text [child]]
    /// ```
    ///
    /// Parsing the canonical form yields a tree equal to this one.
    pub fn to_markup(&self) -> String {
        let mut pieces: Vec<String> = Vec::new();

        if let Some(params) = &self.params {
            let mut header = format!("%{}", self.kind);
            for (key, value) in params {
                header.push_str(&format!(" {key}:'{value}'"));
            }
            header.push('%');
            pieces.push(header);
        } else if self.kind != DEFAULT_KIND {
            pieces.push(format!("%{}%", self.kind));
        }

        for (name, value) in &self.styling {
            match value {
                Some(value) => pieces.push(format!("!{name}={value}")),
                None => pieces.push(format!("!{name}")),
            }
        }

        if !self.text.is_empty() {
            pieces.push(escape_brackets(&self.text));
        }

        for child in &self.children {
            pieces.push(child.to_markup());
        }

        format!("[{}]", pieces.join(" "))
    }
}

impl Default for Block {
    fn default() -> Self {
        Self {
            kind: DEFAULT_KIND.to_string(),
            params: None,
            styling: StyleMap::default(),
            text: String::new(),
            children: Vec::new(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_markup())
    }
}

/// Escape literal bracket characters so the text survives re-parsing.
fn escape_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '[' || c == ']' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_block_is_text() {
        let block = Block::default();
        assert_eq!(block.kind(), "TEXT");
        assert!(block.is_text());
        assert!(block.params().is_none());
        assert!(block.styling().is_empty());
        assert!(block.children().is_empty());
    }

    #[test]
    fn test_kind_is_uppercased() {
        let block = Block::new("title", None, StyleMap::default(), "", Vec::new());
        assert_eq!(block.kind(), "TITLE");
    }

    #[test]
    fn test_markup_plain_text() {
        let block = Block::new("text", None, StyleMap::default(), "hello world", Vec::new());
        assert_eq!(block.to_markup(), "[hello world]");
    }

    #[test]
    fn test_markup_with_header() {
        let mut params = ParamMap::default();
        params.insert("v".to_string(), "Dinky!".to_string());
        let block = Block::new("title", Some(params), StyleMap::default(), "", Vec::new());
        assert_eq!(block.to_markup(), "[%TITLE v:'Dinky!'%]");
    }

    #[test]
    fn test_markup_with_styling_and_children() {
        let mut styling = StyleMap::default();
        styling.insert("bold".to_string(), None);
        styling.insert("size".to_string(), Some("2".to_string()));
        let child = Block::new("text", None, StyleMap::default(), "inner", Vec::new());
        let block = Block::new("text", None, styling, "outer", vec![child]);
        assert_eq!(block.to_markup(), "[!bold !size=2 outer [inner]]");
    }

    #[test]
    fn test_markup_escapes_brackets_in_text() {
        let block = Block::new("text", None, StyleMap::default(), "a[b]c", Vec::new());
        assert_eq!(block.to_markup(), "[a\\[b\\]c]");
    }

    #[test]
    fn test_headerless_non_text_kind_emits_bare_header() {
        let block = Block::new("note", None, StyleMap::default(), "memo", Vec::new());
        assert_eq!(block.to_markup(), "[%NOTE% memo]");
    }

    #[test]
    fn test_display_matches_markup() {
        let block = Block::new("text", None, StyleMap::default(), "hi", Vec::new());
        assert_eq!(block.to_string(), block.to_markup());
    }

    #[test]
    fn test_serialize_to_json() {
        let block = Block::new("text", None, StyleMap::default(), "hi", Vec::new());
        let json = serde_json::to_value(&block).expect("block serializes");
        assert_eq!(json["kind"], "TEXT");
        assert_eq!(json["text"], "hi");
    }
}
