use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use image::RgbaImage;
use log::{debug, info};

use super::SliceReport;
use crate::cli::CompressionLevel;
use crate::error::SlicerError;
use crate::output::save_tile_image;
use crate::sheet::{Tile, TileGrid, TileSize, load_sheet};

/// Cuts a sprite sheet into fixed-size, color-keyed tiles
#[derive(Debug, Clone, Copy)]
pub struct SpriteSlicer {
    pub tile_size: TileSize,
    pub compress: Option<CompressionLevel>,
}

impl Default for SpriteSlicer {
    fn default() -> Self {
        Self {
            tile_size: TileSize::default(),
            compress: None,
        }
    }
}

impl SpriteSlicer {
    pub fn new(tile_width: u32, tile_height: u32) -> Self {
        Self {
            tile_size: TileSize::new(tile_width, tile_height),
            ..Self::default()
        }
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    fn grid_for(&self, sheet: &RgbaImage) -> Result<TileGrid> {
        if !self.tile_size.is_valid() {
            return Err(SlicerError::InvalidTileSize {
                width: self.tile_size.width,
                height: self.tile_size.height,
            }
            .into());
        }
        let (width, height) = sheet.dimensions();
        Ok(TileGrid::new(width, height, self.tile_size))
    }

    /// Cut an in-memory sheet into color-keyed tiles, in row-major order
    pub fn slice_image(&self, sheet: &RgbaImage) -> Result<Vec<Tile>> {
        let grid = self.grid_for(sheet)?;
        Ok(grid
            .coords()
            .map(|(row, col)| {
                let mut tile = Tile::extract(sheet, row, col, grid.rect(row, col));
                tile.apply_color_key();
                tile
            })
            .collect())
    }

    /// Slice the sheet at `input` and write every tile into `output_dir`.
    ///
    /// The sheet is decoded before anything touches the filesystem, so a bad
    /// input leaves no output behind. A failure while writing stops at that
    /// tile; tiles already written stay on disk.
    pub fn slice_sheet(&self, input: &Path, output_dir: &Path) -> Result<SliceReport> {
        let sheet = load_sheet(input)?;
        let grid = self.grid_for(&sheet)?;

        info!(
            "Loaded {} ({}x{})",
            input.display(),
            sheet.width(),
            sheet.height()
        );
        info!(
            "Grid: {} rows x {} cols of {}x{} tiles",
            grid.rows(),
            grid.cols(),
            self.tile_size.width,
            self.tile_size.height
        );
        if grid.dropped_width() > 0 || grid.dropped_height() > 0 {
            debug!(
                "Ignoring {}px on the right and {}px at the bottom that do not fill a tile",
                grid.dropped_width(),
                grid.dropped_height()
            );
        }

        fs::create_dir_all(output_dir).map_err(|e| SlicerError::CreateDir {
            path: output_dir.to_path_buf(),
            source: e,
        })?;

        let mut written: Vec<PathBuf> = Vec::with_capacity(grid.len());
        let mut keyed_pixels = 0;

        for (row, col) in grid.coords() {
            let mut tile = Tile::extract(&sheet, row, col, grid.rect(row, col));
            keyed_pixels += tile.apply_color_key();

            let path = output_dir.join(tile.file_name());
            save_tile_image(&tile.image, &path, self.compress)?;
            debug!("Saved {}", path.display());
            written.push(path);
        }

        Ok(SliceReport {
            rows: grid.rows(),
            cols: grid.cols(),
            tile_size: self.tile_size,
            dropped_width: grid.dropped_width(),
            dropped_height: grid.dropped_height(),
            keyed_pixels,
            written,
        })
    }
}
