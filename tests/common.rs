use image::{Rgb, RgbImage};
use std::path::Path;

/// Deterministic noise image. Noise keeps the encoded file comfortably above
/// the 100KB skip threshold, which solid fills would not.
pub fn noise_image(width: u32, height: u32) -> RgbImage {
    let mut img = RgbImage::new(width, height);
    let mut state: u32 = 0x9E37_79B9;
    for pixel in img.pixels_mut() {
        state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        *pixel = Rgb([(state >> 8) as u8, (state >> 16) as u8, (state >> 24) as u8]);
    }
    img
}

/// Write a noise image; the container is picked from the path's extension.
pub fn write_noise_image(path: &Path, width: u32, height: u32) {
    noise_image(width, height).save(path).unwrap();
}

/// Small solid-color image, well under the 100KB skip threshold.
pub fn write_tiny_image(path: &Path) {
    let mut img = RgbImage::new(50, 50);
    for pixel in img.pixels_mut() {
        *pixel = Rgb([120, 160, 200]);
    }
    img.save(path).unwrap();
}
