use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Result;
use image::{ImageFormat, RgbaImage};

use crate::cli::CompressionLevel;
use crate::error::SlicerError;

/// Save a tile image as PNG, optionally with compression
pub fn save_tile_image(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<()> {
    let png_data = encode_png(image, path, compress)?;

    fs::write(path, png_data).map_err(|e| SlicerError::OutputWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

/// Encode to PNG bytes in memory. `path` is only used for error reporting.
fn encode_png(
    image: &RgbaImage,
    path: &Path,
    compress: Option<CompressionLevel>,
) -> Result<Vec<u8>> {
    let mut png_data = Cursor::new(Vec::new());
    image
        .write_to(&mut png_data, ImageFormat::Png)
        .map_err(|e| SlicerError::ImageSave {
            path: path.to_path_buf(),
            source: e,
        })?;

    let Some(level) = compress else {
        return Ok(png_data.into_inner());
    };

    let opts = match level {
        CompressionLevel::Level(n) => oxipng::Options::from_preset(n),
        CompressionLevel::Max => oxipng::Options::max_compression(),
    };
    let compressed = oxipng::optimize_from_memory(&png_data.into_inner(), &opts).map_err(|e| {
        SlicerError::PngCompress {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
    })?;

    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn checker() -> RgbaImage {
        let mut img = RgbaImage::new(8, 8);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = if (x + y) % 2 == 0 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([255, 0, 0, 255])
            };
        }
        img
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite_0_0.png");
        let img = checker();

        save_tile_image(&img, &path, None).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_compressed_pixels_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sprite_0_0.png");
        let img = checker();

        save_tile_image(&img, &path, Some(CompressionLevel::Level(2))).unwrap();

        let reloaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!(reloaded, img);
    }

    #[test]
    fn test_encoding_is_deterministic() {
        let img = checker();
        let path = Path::new("sprite_0_0.png");

        let first = encode_png(&img, path, None).unwrap();
        let second = encode_png(&img, path, None).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("sprite_0_0.png");

        let err = save_tile_image(&checker(), &path, None).unwrap_err();
        let err = err.downcast_ref::<SlicerError>().unwrap();
        assert!(matches!(err, SlicerError::OutputWrite { .. }));
        assert!(err.is_write_error());
    }
}
