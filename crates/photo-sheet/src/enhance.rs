//! Color and brightness boost applied to every photo before placement.

use image::{Rgb, RgbImage};
use imageproc::map::map_colors;
use tracing::debug;

/// Brightness multiplier derived from the saturation factor.
///
/// Half as aggressive: a factor of 1.2 brightens by 1.1.
pub fn brightness_factor(factor: f32) -> f32 {
    1.0 + (factor - 1.0) / 2.0
}

/// Rec. 601 luma with round-to-nearest, in 16.16 fixed point.
fn luma(Rgb([r, g, b]): Rgb<u8>) -> u8 {
    let l = u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000;
    (l >> 16) as u8
}

/// Interpolate (or extrapolate) from `from` toward `to`, clamped to a byte.
fn blend(from: u8, to: u8, factor: f32) -> u8 {
    let v = f32::from(from) + factor * (f32::from(to) - f32::from(from));
    if v <= 0.0 {
        0
    } else if v >= 255.0 {
        255
    } else {
        v as u8
    }
}

/// Scale saturation by `factor`, pulling channels away from their luma.
pub fn saturate(img: &RgbImage, factor: f32) -> RgbImage {
    map_colors(img, |px| {
        let l = luma(px);
        let Rgb([r, g, b]) = px;
        Rgb([blend(l, r, factor), blend(l, g, factor), blend(l, b, factor)])
    })
}

/// Scale brightness by `factor`.
pub fn brighten(img: &RgbImage, factor: f32) -> RgbImage {
    map_colors(img, |Rgb([r, g, b])| {
        Rgb([blend(0, r, factor), blend(0, g, factor), blend(0, b, factor)])
    })
}

/// Apply the saturation boost, then the damped brightness boost.
pub fn enhance(img: &RgbImage, factor: f32) -> RgbImage {
    let brightness = brightness_factor(factor);
    debug!(
        w = img.width(),
        h = img.height(),
        saturation = factor,
        brightness,
        "Enhancing image"
    );
    brighten(&saturate(img, factor), brightness)
}
