use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlicerError {
    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to create output directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Tile size must be at least 1x1, got {width}x{height}")]
    InvalidTileSize { width: u32, height: u32 },
}

impl SlicerError {
    /// True when the input sheet could not be found or decoded.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            SlicerError::InputNotFound(_) | SlicerError::ImageLoad { .. }
        )
    }

    /// True when the output directory or a tile file could not be produced.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            SlicerError::CreateDir { .. }
                | SlicerError::ImageSave { .. }
                | SlicerError::OutputWrite { .. }
                | SlicerError::PngCompress { .. }
        )
    }
}
