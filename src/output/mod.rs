mod format;

pub use format::save_tile_image;

/// Directory tiles are written to when none is given
pub const DEFAULT_OUTPUT_DIR: &str = "sprites";

/// Filename for the tile at the given grid position
pub fn tile_png_filename(row: u32, col: u32) -> String {
    format!("sprite_{}_{}.png", row, col)
}
