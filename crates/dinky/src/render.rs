//! Placeholder bitmap renderer.
//!
//! The renderer accepts a parsed [`Document`], walks every block in the
//! tree, and produces pixel output: an RGBA8 [`Canvas`] filled with the
//! configured background, encoded as PNG bytes. Actual block drawing is
//! not implemented yet; the traversal and the tree-in, pixels-out
//! contract are.

use log::{debug, trace};

use dinky_core::{block::Block, document::Document};

use crate::config::CanvasConfig;

/// An RGBA8 pixel canvas.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    /// Allocate a canvas filled with the given background color.
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        let pixel_count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(pixel_count * 4);
        for _ in 0..pixel_count {
            pixels.extend_from_slice(&background);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 pixel data, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Encode the canvas as PNG bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, png::EncodingError> {
        let mut bytes = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut bytes, self.width, self.height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);
            let mut writer = encoder.write_header()?;
            writer.write_image_data(&self.pixels)?;
            writer.finish()?;
        }
        Ok(bytes)
    }
}

/// Render a document onto a fresh canvas.
pub(crate) fn render(document: &Document, config: &CanvasConfig) -> Canvas {
    debug!(
        width = config.width(),
        height = config.height();
        "Allocating canvas"
    );
    let canvas = Canvas::new(config.width(), config.height(), config.background());

    for block in document.children() {
        visit(block, 0);
    }

    canvas
}

/// Walk a block and its children, in source order.
fn visit(block: &Block, depth: usize) {
    trace!(
        depth,
        kind = block.kind(),
        text_len = block.text().len(),
        children = block.children().len();
        "Visiting block"
    );
    for child in block.children() {
        visit(child, depth + 1);
    }
}
