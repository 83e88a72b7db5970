// THEORY:
// The gradient is the background layer of every banner. It is built the way a
// paint program would do it: two solid full-size layers (start colour and end
// colour) and an 8-bit grayscale mask that decides, per pixel, how much of the
// end layer shows through. The mask is a horizontal ramp `floor(255 * x / W)`,
// identical on every row, so colour only varies along x.
//
// The ramp never reaches 255 (the last column is `floor(255 * (W-1) / W)`), so
// the rightmost column is a hair short of the pure end colour. That is kept.

use crate::core_modules::pixel::pixel::Pixel;
use image::{GrayImage, Luma, RgbImage};

/// Mask value for column `x` of a ramp `width` pixels wide.
pub fn mask_value(x: u32, width: u32) -> u8 {
    (255 * x as u64 / width as u64) as u8
}

/// A single-channel horizontal ramp, constant down each column.
pub fn gradient_mask(width: u32, height: u32) -> GrayImage {
    let ramp: Vec<u8> = (0..width).map(|x| mask_value(x, width)).collect();
    GrayImage::from_fn(width, height, |x, _| Luma([ramp[x as usize]]))
}

/// Builds a `width` x `height` horizontal gradient from `start` to `end`.
pub fn create_gradient(width: u32, height: u32, start: Pixel, end: Pixel) -> RgbImage {
    let mut base = RgbImage::from_pixel(width, height, start.into());
    let top = RgbImage::from_pixel(width, height, end.into());
    let mask = gradient_mask(width, height);
    paste_with_mask(&mut base, &top, &mask);
    base
}

/// Composites `top` over `base` using `mask` as per-pixel alpha.
fn paste_with_mask(base: &mut RgbImage, top: &RgbImage, mask: &GrayImage) {
    for ((base_pixel, top_pixel), weight) in base.pixels_mut().zip(top.pixels()).zip(mask.pixels()) {
        let mixed = Pixel::mix(
            Pixel::rgb(base_pixel[0], base_pixel[1], base_pixel[2]),
            Pixel::rgb(top_pixel[0], top_pixel[1], top_pixel[2]),
            weight[0],
        );
        *base_pixel = mixed.into();
    }
}
