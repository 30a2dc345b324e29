mod builder;

use std::path::{Path, PathBuf};

use anyhow::Result;

pub use builder::SpriteSlicer;

use crate::sheet::TileSize;

/// Outcome of slicing one sheet
#[derive(Debug, Clone)]
pub struct SliceReport {
    /// Number of tile rows written
    pub rows: u32,
    /// Number of tile columns written
    pub cols: u32,
    pub tile_size: TileSize,
    /// Pixels past the last full column that belong to no tile
    pub dropped_width: u32,
    /// Pixels past the last full row that belong to no tile
    pub dropped_height: u32,
    /// Pixels made transparent by the color key, across all tiles
    pub keyed_pixels: usize,
    /// Paths of written tiles, in row-major order
    pub written: Vec<PathBuf>,
}

impl SliceReport {
    pub fn tile_count(&self) -> usize {
        self.written.len()
    }
}

/// Slice `input` into 32x32 tiles under `output_dir`
pub fn slice_sheet(input: &Path, output_dir: &Path) -> Result<SliceReport> {
    SpriteSlicer::default().slice_sheet(input, output_dir)
}
