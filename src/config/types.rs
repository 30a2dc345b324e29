use serde::Deserialize;

use crate::output::DEFAULT_OUTPUT_DIR;
use crate::sheet::DEFAULT_TILE_EDGE;

/// PNG compression level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

/// Slicer configuration file structure.
///
/// `output_dir` is relative to the config file location.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Output directory for tile files
    pub output_dir: String,
    /// Tile width in pixels
    pub tile_width: u32,
    /// Tile height in pixels
    pub tile_height: u32,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            output_dir: DEFAULT_OUTPUT_DIR.to_string(),
            tile_width: DEFAULT_TILE_EDGE,
            tile_height: DEFAULT_TILE_EDGE,
            compress: None,
        }
    }
}
