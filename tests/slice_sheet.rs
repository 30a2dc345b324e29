use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use slicer::{SlicerError, SpriteSlicer, slice_sheet};

fn sorted_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn half_black_half_red_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let mut sheet = RgbaImage::new(64, 32);
    for (x, _, pixel) in sheet.enumerate_pixels_mut() {
        *pixel = if x < 32 {
            Rgba([0, 0, 0, 255])
        } else {
            Rgba([255, 0, 0, 255])
        };
    }
    sheet.save(&input).unwrap();
    let out = dir.path().join("sprites");

    let report = slice_sheet(&input, &out).unwrap();

    assert_eq!(report.tile_count(), 2);
    assert_eq!(sorted_names(&out), vec!["sprite_0_0.png", "sprite_0_1.png"]);

    let left = image::open(out.join("sprite_0_0.png")).unwrap().into_rgba8();
    assert_eq!(left.dimensions(), (32, 32));
    assert!(left.pixels().all(|p| p[3] == 0));

    let right = image::open(out.join("sprite_0_1.png")).unwrap().into_rgba8();
    assert_eq!(right.dimensions(), (32, 32));
    assert!(right.pixels().all(|p| *p == Rgba([255, 0, 0, 255])));
}

#[test]
fn tile_count_matches_grid() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    RgbaImage::from_pixel(96, 64, Rgba([10, 10, 10, 255]))
        .save(&input)
        .unwrap();
    let out = dir.path().join("nested").join("sprites");

    let report = slice_sheet(&input, &out).unwrap();

    assert_eq!((report.rows, report.cols), (2, 3));
    assert_eq!(sorted_names(&out).len(), 6);
    assert!(out.join("sprite_1_2.png").is_file());
}

#[test]
fn rgb_sheet_keeps_colors_and_becomes_opaque() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let mut sheet = RgbImage::from_pixel(32, 32, Rgb([0, 128, 255]));
    sheet.put_pixel(5, 7, Rgb([0, 0, 0]));
    sheet.save(&input).unwrap();
    let out = dir.path().join("sprites");

    slice_sheet(&input, &out).unwrap();

    let tile = image::open(out.join("sprite_0_0.png")).unwrap().into_rgba8();
    assert_eq!(*tile.get_pixel(5, 7), Rgba([0, 0, 0, 0]));
    assert_eq!(*tile.get_pixel(0, 0), Rgba([0, 128, 255, 255]));
    assert_eq!(*tile.get_pixel(31, 31), Rgba([0, 128, 255, 255]));
}

#[test]
fn translucent_colors_keep_their_alpha() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    RgbaImage::from_pixel(32, 32, Rgba([40, 80, 120, 90]))
        .save(&input)
        .unwrap();
    let out = dir.path().join("sprites");

    slice_sheet(&input, &out).unwrap();

    let tile = image::open(out.join("sprite_0_0.png")).unwrap().into_rgba8();
    assert!(tile.pixels().all(|p| *p == Rgba([40, 80, 120, 90])));
}

#[test]
fn second_run_overwrites_with_identical_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let mut sheet = RgbaImage::from_pixel(64, 64, Rgba([200, 10, 10, 255]));
    for y in 0..64 {
        sheet.put_pixel(y, y, Rgba([0, 0, 0, 255]));
    }
    sheet.save(&input).unwrap();
    let out = dir.path().join("sprites");

    slice_sheet(&input, &out).unwrap();
    let first: Vec<_> = sorted_names(&out)
        .iter()
        .map(|n| fs::read(out.join(n)).unwrap())
        .collect();

    slice_sheet(&input, &out).unwrap();
    let second: Vec<_> = sorted_names(&out)
        .iter()
        .map(|n| fs::read(out.join(n)).unwrap())
        .collect();

    assert_eq!(first.len(), 4);
    assert_eq!(first, second);
}

#[test]
fn missing_input_is_a_decode_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("sprites");

    let err = slice_sheet(&dir.path().join("nope.png"), &out).unwrap_err();

    assert!(err.downcast_ref::<SlicerError>().unwrap().is_decode_error());
    assert!(!out.exists());
}

#[test]
fn compressed_tiles_match_uncompressed_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let mut sheet = RgbaImage::from_pixel(32, 32, Rgba([0, 255, 0, 255]));
    sheet.put_pixel(0, 0, Rgba([0, 0, 0, 255]));
    sheet.save(&input).unwrap();

    let plain = dir.path().join("plain");
    let packed = dir.path().join("packed");
    slice_sheet(&input, &plain).unwrap();
    SpriteSlicer::default()
        .compress(Some(slicer::CompressionLevel::Max))
        .slice_sheet(&input, &packed)
        .unwrap();

    let a = image::open(plain.join("sprite_0_0.png")).unwrap().into_rgba8();
    let b = image::open(packed.join("sprite_0_0.png")).unwrap().into_rgba8();
    assert_eq!(a, b);
    assert_eq!(*b.get_pixel(0, 0), Rgba([0, 0, 0, 0]));
}
