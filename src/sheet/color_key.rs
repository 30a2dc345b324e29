use image::{Rgba, RgbaImage};

/// Whether a pixel matches the pure black color key
pub fn is_key_color(pixel: &Rgba<u8>) -> bool {
    pixel[0] == 0 && pixel[1] == 0 && pixel[2] == 0
}

/// Make every pure black pixel fully transparent.
///
/// Only the alpha channel of matching pixels is rewritten; everything else is
/// left untouched. Returns the number of pixels that matched the key.
pub fn apply_color_key(image: &mut RgbaImage) -> usize {
    let mut keyed = 0;
    for pixel in image.pixels_mut() {
        if is_key_color(pixel) {
            pixel[3] = 0;
            keyed += 1;
        }
    }
    keyed
}
