//! Configuration types for Dinky document rendering.
//!
//! This module provides configuration structures that control the output
//! canvas. All types implement [`serde::Deserialize`] for loading from
//! external sources such as TOML files.
//!
//! # Example
//!
//! ```
//! # use dinky::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.canvas().width(), 256);
//! ```

use serde::Deserialize;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified canvas configuration.
    pub fn new(canvas: CanvasConfig) -> Self {
        Self { canvas }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }
}

/// Output canvas configuration.
///
/// Controls the pixel dimensions and background of the rendered bitmap.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    /// Canvas width in pixels.
    #[serde(default = "default_dimension")]
    width: u32,

    /// Canvas height in pixels.
    #[serde(default = "default_dimension")]
    height: u32,

    /// Background color as RGBA bytes.
    #[serde(default = "default_background")]
    background: [u8; 4],
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_dimension(),
            height: default_dimension(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    /// Creates a new [`CanvasConfig`] with the specified dimensions and
    /// background color.
    pub fn new(width: u32, height: u32, background: [u8; 4]) -> Self {
        Self {
            width,
            height,
            background,
        }
    }

    /// Returns the canvas width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the canvas height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the background color as RGBA bytes.
    pub fn background(&self) -> [u8; 4] {
        self.background
    }
}

fn default_dimension() -> u32 {
    256
}

fn default_background() -> [u8; 4] {
    [255, 255, 255, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_canvas() {
        let config = AppConfig::default();
        assert_eq!(config.canvas().width(), 256);
        assert_eq!(config.canvas().height(), 256);
        assert_eq!(config.canvas().background(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: AppConfig =
            serde_json::from_str(r#"{"canvas": {"width": 64}}"#).expect("config deserializes");
        assert_eq!(config.canvas().width(), 64);
        assert_eq!(config.canvas().height(), 256);
    }
}
