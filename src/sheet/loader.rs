use std::path::Path;

use anyhow::Result;
use image::{ImageReader, RgbaImage};
use log::debug;

use crate::error::SlicerError;

/// Decode a sprite sheet and normalize it to 8-bit RGBA.
///
/// Sources without an alpha channel come back fully opaque.
pub fn load_sheet(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(SlicerError::InputNotFound(path.to_path_buf()).into());
    }

    let img = ImageReader::open(path)
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .with_guessed_format()
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    debug!("Decoded {} as {:?}", path.display(), img.color());

    Ok(img.into_rgba8())
}
