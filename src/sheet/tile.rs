use image::RgbaImage;

use super::{TileRect, apply_color_key};
use crate::output::tile_png_filename;

/// One grid cell cut out of a sprite sheet
#[derive(Debug, Clone)]
pub struct Tile {
    /// Zero-indexed grid row
    pub row: u32,
    /// Zero-indexed grid column
    pub col: u32,
    /// Owned copy of the tile pixels
    pub image: RgbaImage,
}

impl Tile {
    /// Copy the region out of the sheet into its own buffer
    pub fn extract(sheet: &RgbaImage, row: u32, col: u32, rect: TileRect) -> Self {
        let image =
            image::imageops::crop_imm(sheet, rect.x, rect.y, rect.width, rect.height).to_image();
        Self { row, col, image }
    }

    /// Apply the black color key, returning how many pixels became transparent
    pub fn apply_color_key(&mut self) -> usize {
        apply_color_key(&mut self.image)
    }

    /// Output filename, e.g. `sprite_0_2.png`
    pub fn file_name(&self) -> String {
        tile_png_filename(self.row, self.col)
    }
}
