//! Dinky - A bracket-delimited markup language for structured documents.
//!
//! Parsing and rendering for the Dinky markup language. Source text is
//! parsed into a tree of typed blocks, which can then be rendered to a
//! PNG bitmap.

pub mod config;

mod error;
mod render;

pub use dinky_core::{block, document};

pub use error::DinkyError;
pub use render::Canvas;

use log::{debug, info, trace};

use config::AppConfig;

/// Builder for parsing and rendering Dinky documents.
///
/// This provides an API for processing Dinky markup through parsing and
/// rendering stages.
///
/// # Examples
///
/// ```rust
/// use dinky::{DocumentBuilder, config::AppConfig};
///
/// let source = "[%title v:'Dinky!'%][Dinky is a text]";
///
/// // With custom config
/// let config = AppConfig::default();
/// let builder = DocumentBuilder::new(config);
///
/// // Parse source to a block tree
/// let document = builder.parse(source)
///     .expect("Failed to parse");
///
/// // Render the tree to PNG bytes
/// let png = builder.render_png(&document)
///     .expect("Failed to render");
/// assert!(!png.is_empty());
///
/// // Or use default config
/// let builder = DocumentBuilder::default();
/// ```
#[derive(Default)]
pub struct DocumentBuilder {
    config: AppConfig,
}

impl DocumentBuilder {
    /// Create a new document builder with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Application configuration including canvas settings
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dinky::{DocumentBuilder, config::AppConfig};
    ///
    /// let config = AppConfig::default();
    /// let builder = DocumentBuilder::new(config);
    /// ```
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Parse markup source into a document.
    ///
    /// Newlines are stripped before scanning, so diagnostics carry byte
    /// offsets into the normalized source. The normalized text is stored
    /// on parse errors for snippet rendering.
    ///
    /// # Arguments
    ///
    /// * `source` - Dinky markup as a string
    ///
    /// # Errors
    ///
    /// Returns `DinkyError::Parse` for unterminated headers, blocks, or
    /// quotes, and for malformed header parameters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dinky::{DocumentBuilder, config::AppConfig};
    ///
    /// let builder = DocumentBuilder::new(AppConfig::default());
    /// let document = builder.parse("[hello world]")
    ///     .expect("Failed to parse document");
    /// assert_eq!(document.children()[0].text(), "hello world");
    /// ```
    pub fn parse(&self, source: &str) -> Result<document::Document, DinkyError> {
        info!("Parsing document");

        let normalized = dinky_parser::normalize_source(source);
        let document = dinky_parser::parse(source)
            .map_err(|err| DinkyError::new_parse_error(err, normalized))?;

        debug!(blocks = document.block_count(); "Document parsed successfully");
        trace!(document:?; "Parsed document");

        Ok(document)
    }

    /// Render a document to PNG bytes.
    ///
    /// Walks the block tree and produces a canvas of the configured size
    /// and background, encoded as a PNG image.
    ///
    /// # Arguments
    ///
    /// * `document` - A parsed document to render
    ///
    /// # Errors
    ///
    /// Returns `DinkyError::Encode` if PNG encoding fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dinky::{DocumentBuilder, config::AppConfig};
    ///
    /// let builder = DocumentBuilder::new(AppConfig::default());
    /// let document = builder.parse("[hello world]")
    ///     .expect("Failed to parse");
    ///
    /// let png = builder.render_png(&document)
    ///     .expect("Failed to render document");
    /// assert!(!png.is_empty());
    /// ```
    pub fn render_png(&self, document: &document::Document) -> Result<Vec<u8>, DinkyError> {
        info!(blocks = document.block_count(); "Rendering document");

        let canvas = render::render(document, self.config.canvas());
        let bytes = canvas.encode_png()?;

        info!(bytes = bytes.len(); "PNG rendered successfully");
        Ok(bytes)
    }
}
