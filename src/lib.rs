pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod sheet;
pub mod slicer;

pub use cli::{CliArgs, CompressionLevel};
pub use error::SlicerError;
pub use sheet::{Tile, TileGrid, TileSize};
pub use slicer::{SliceReport, SpriteSlicer, slice_sheet};
