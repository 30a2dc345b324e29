mod color_key;
mod grid;
mod loader;
mod tile;

pub use color_key::{apply_color_key, is_key_color};
pub use grid::{DEFAULT_TILE_EDGE, TileGrid, TileRect, TileSize};
pub use loader::load_sheet;
pub use tile::Tile;
