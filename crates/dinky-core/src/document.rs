//! Document root and document-level settings.
//!
//! A [`Document`] is the root produced by one parse invocation. It owns the
//! top-level [`Block`](crate::block::Block) sequence and carries fixed
//! rendering settings plus optional metadata slots that later stages may
//! populate (for example from a `TITLE` block).

use serde::Serialize;

use crate::block::Block;

/// How the rendered output may be scaled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalingMode {
    /// Output scales with the target canvas.
    #[default]
    Scalable,
    /// Output is locked to the nominal size.
    Fixed,
}

/// Color space of the rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorSpace {
    #[default]
    Rgb,
    Rgba,
    Grayscale,
}

/// Top-level layout flow for the document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LayoutMode {
    /// Top-down, left-to-right flow.
    #[default]
    Typical,
}

/// Fixed document-level configuration.
///
/// These are defaults carried on every document; they are not derived from
/// the markup input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSettings {
    /// Scaling behaviour of the output.
    scaling: ScalingMode,
    /// Nominal width in abstract units.
    width: u32,
    /// Nominal height in abstract units.
    height: u32,
    /// Color space of the output.
    colorspace: ColorSpace,
    /// Nominal pixel density.
    ppi: u32,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            scaling: ScalingMode::Scalable,
            width: 1,
            height: 1,
            colorspace: ColorSpace::Rgb,
            ppi: 1,
        }
    }
}

impl DocumentSettings {
    /// Returns the scaling mode.
    pub fn scaling(&self) -> ScalingMode {
        self.scaling
    }

    /// Returns the nominal width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the nominal height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the color space.
    pub fn colorspace(&self) -> ColorSpace {
        self.colorspace
    }

    /// Returns the nominal pixel density.
    pub fn ppi(&self) -> u32 {
        self.ppi
    }
}

/// The root of a parsed document tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    /// Fixed document-level settings.
    settings: DocumentSettings,
    /// Top-level layout flow.
    layout: LayoutMode,
    /// Top-level blocks in source order.
    children: Vec<Block>,
    /// Document title, unset unless populated by a later stage.
    title: Option<String>,
    /// Creation timestamp, unset unless populated by a later stage.
    created_at: Option<String>,
    /// Modification timestamp, unset unless populated by a later stage.
    modified_at: Option<String>,
    /// Author, unset unless populated by a later stage.
    author: Option<String>,
}

impl Document {
    /// Create an empty document with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the document settings.
    pub fn settings(&self) -> &DocumentSettings {
        &self.settings
    }

    /// Returns the top-level layout mode.
    pub fn layout(&self) -> LayoutMode {
        self.layout
    }

    /// Returns the top-level blocks in source order.
    pub fn children(&self) -> &[Block] {
        &self.children
    }

    /// Returns the document title, if set.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the author, if set.
    pub fn author(&self) -> Option<&str> {
        self.author.as_deref()
    }

    /// Returns the creation timestamp, if set.
    pub fn created_at(&self) -> Option<&str> {
        self.created_at.as_deref()
    }

    /// Returns the modification timestamp, if set.
    pub fn modified_at(&self) -> Option<&str> {
        self.modified_at.as_deref()
    }

    /// Append a top-level block.
    pub fn push_block(&mut self, block: Block) {
        self.children.push(block);
    }

    /// Total number of blocks in the tree, counting recursively.
    pub fn block_count(&self) -> usize {
        fn count(blocks: &[Block]) -> usize {
            blocks
                .iter()
                .map(|block| 1 + count(block.children()))
                .sum()
        }
        count(&self.children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::StyleMap;

    #[test]
    fn test_default_settings() {
        let settings = DocumentSettings::default();
        assert_eq!(settings.scaling(), ScalingMode::Scalable);
        assert_eq!(settings.width(), 1);
        assert_eq!(settings.height(), 1);
        assert_eq!(settings.colorspace(), ColorSpace::Rgb);
        assert_eq!(settings.ppi(), 1);
    }

    #[test]
    fn test_new_document_is_empty() {
        let doc = Document::new();
        assert!(doc.children().is_empty());
        assert!(doc.title().is_none());
        assert!(doc.author().is_none());
        assert_eq!(doc.layout(), LayoutMode::Typical);
        assert_eq!(doc.block_count(), 0);
    }

    #[test]
    fn test_block_count_is_recursive() {
        let grandchild = Block::default();
        let child = Block::new("text", None, StyleMap::default(), "", vec![grandchild]);
        let root = Block::new("text", None, StyleMap::default(), "", vec![child]);

        let mut doc = Document::new();
        doc.push_block(root);
        assert_eq!(doc.block_count(), 3);
    }

    #[test]
    fn test_settings_serialize_shape() {
        let json = serde_json::to_value(DocumentSettings::default()).expect("serializes");
        assert_eq!(json["scaling"], "scalable");
        assert_eq!(json["colorspace"], "rgb");
        assert_eq!(json["ppi"], 1);
    }
}
