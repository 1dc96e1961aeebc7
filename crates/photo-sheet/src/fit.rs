//! Orientation and scale selection for placing a photo inside a region.
//!
//! A photo may be placed as-is or rotated 90 degrees; whichever orientation
//! covers more of the region wins, and the photo is then scaled uniformly
//! to the largest size that still fits.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

/// Orientation and output size chosen for one photo in one region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitResult {
    /// The photo is turned 90 degrees counter-clockwise before scaling.
    pub rotated: bool,
    /// Output width in pixels, never larger than the region width.
    pub width: u32,
    /// Output height in pixels, never larger than the region height.
    pub height: u32,
}

/// Largest uniform scale that fits `w` x `h` inside `region_w` x `region_h`.
fn scale_to_fit(w: f64, h: f64, region_w: f64, region_h: f64) -> f64 {
    (region_w / w).min(region_h / h)
}

/// Covered area for the original and the rotated orientation.
///
/// Returns `(area_normal, area_rotated)` in square pixels, before any
/// truncation to whole pixels.
pub fn covered_areas(img_w: u32, img_h: u32, region_w: u32, region_h: u32) -> (f64, f64) {
    let (w, h) = (f64::from(img_w), f64::from(img_h));
    let (rw, rh) = (f64::from(region_w), f64::from(region_h));

    let scale_normal = scale_to_fit(w, h, rw, rh);
    let scale_rotated = scale_to_fit(h, w, rw, rh);

    let area_normal = (w * scale_normal) * (h * scale_normal);
    let area_rotated = (h * scale_rotated) * (w * scale_rotated);
    (area_normal, area_rotated)
}

/// Best achievable covered area over both orientations.
pub fn best_area(img_w: u32, img_h: u32, region_w: u32, region_h: u32) -> f64 {
    let (normal, rotated) = covered_areas(img_w, img_h, region_w, region_h);
    normal.max(rotated)
}

/// Decide orientation and output size for an `img_w` x `img_h` photo.
///
/// Ties keep the original orientation. Output sizes are truncated to whole
/// pixels and never drop below 1.
pub fn fit(img_w: u32, img_h: u32, region_w: u32, region_h: u32) -> FitResult {
    let (area_normal, area_rotated) = covered_areas(img_w, img_h, region_w, region_h);
    let rotated = area_normal < area_rotated;

    let (w, h) = if rotated {
        (f64::from(img_h), f64::from(img_w))
    } else {
        (f64::from(img_w), f64::from(img_h))
    };
    let scale = scale_to_fit(w, h, f64::from(region_w), f64::from(region_h));

    let result = FitResult {
        rotated,
        width: ((w * scale) as u32).max(1),
        height: ((h * scale) as u32).max(1),
    };

    debug!(
        img_w,
        img_h,
        region_w,
        region_h,
        rotated,
        out_w = result.width,
        out_h = result.height,
        "Fitted image to region"
    );

    result
}

/// Rotate and resample `img` so it fits `region_w` x `region_h`.
///
/// Uses Lanczos3 filtering. Skips resampling when the oriented photo already
/// has the target size.
pub fn fit_image(img: &RgbImage, region_w: u32, region_h: u32) -> (RgbImage, FitResult) {
    let result = fit(img.width(), img.height(), region_w, region_h);

    let resize = |oriented: &RgbImage| {
        if oriented.dimensions() == (result.width, result.height) {
            oriented.clone()
        } else {
            imageops::resize(oriented, result.width, result.height, FilterType::Lanczos3)
        }
    };

    let fitted = if result.rotated {
        resize(&imageops::rotate270(img))
    } else {
        resize(img)
    };

    (fitted, result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    /// Create a test image with unique red values at corners.
    /// Top-left=10, Top-right=20, Bottom-left=30, Bottom-right=40
    fn create_corner_image(width: u32, height: u32) -> RgbImage {
        let mut img = RgbImage::from_pixel(width, height, Rgb([128, 128, 128]));
        img.put_pixel(0, 0, Rgb([10, 0, 0]));
        img.put_pixel(width - 1, 0, Rgb([20, 0, 0]));
        img.put_pixel(0, height - 1, Rgb([30, 0, 0]));
        img.put_pixel(width - 1, height - 1, Rgb([40, 0, 0]));
        img
    }

    fn red(img: &RgbImage, x: u32, y: u32) -> u8 {
        img.get_pixel(x, y)[0]
    }

    #[test]
    fn test_landscape_into_portrait_region_rotates() {
        let result = fit(3000, 2000, 900, 1200);
        assert_eq!(
            result,
            FitResult {
                rotated: true,
                width: 800,
                height: 1200,
            }
        );
    }

    #[test]
    fn test_landscape_into_landscape_region_keeps_orientation() {
        let result = fit(3000, 2000, 1800, 1200);
        assert!(!result.rotated);
        assert_eq!((result.width, result.height), (1800, 1200));
    }

    #[test]
    fn test_square_tie_keeps_orientation() {
        let (normal, rotated) = covered_areas(500, 500, 900, 600);
        assert_eq!(normal, rotated);

        let result = fit(500, 500, 900, 600);
        assert!(!result.rotated);
        assert_eq!((result.width, result.height), (600, 600));
    }

    #[test]
    fn test_equal_areas_after_rotation_keep_orientation() {
        // In a square region a 2:1 photo covers the same area either way.
        let result = fit(2000, 1000, 600, 600);
        assert!(!result.rotated);
        assert_eq!((result.width, result.height), (600, 300));
    }

    #[test]
    fn test_upscales_small_images() {
        let result = fit(300, 200, 1800, 1200);
        assert!(!result.rotated);
        assert_eq!((result.width, result.height), (1800, 1200));
    }

    #[test]
    fn test_fit_stays_inside_region() {
        let sizes = [1, 3, 7, 199, 640, 1001, 4032];
        let regions = [(900, 600), (1800, 600), (900, 1200), (1800, 1200), (5, 13)];

        for &w in &sizes {
            for &h in &sizes {
                for &(rw, rh) in &regions {
                    let r = fit(w, h, rw, rh);
                    assert!(r.width <= rw, "{w}x{h} in {rw}x{rh}: width {}", r.width);
                    assert!(r.height <= rh, "{w}x{h} in {rw}x{rh}: height {}", r.height);

                    // Truncation loses at most one pixel per side.
                    let (sw, sh) = if r.rotated { (h, w) } else { (w, h) };
                    let expected_h = f64::from(r.width) * f64::from(sh) / f64::from(sw);
                    let tolerance = 1.0 + f64::from(sh) / f64::from(sw);
                    assert!(
                        (expected_h - f64::from(r.height)).abs() <= tolerance,
                        "{w}x{h} in {rw}x{rh}: {}x{} is distorted",
                        r.width,
                        r.height
                    );
                }
            }
        }
    }

    #[test]
    fn test_fit_touches_region_edge() {
        let r = fit(4032, 3024, 900, 600);
        assert!(r.width == 900 || r.height == 600);
    }

    #[test]
    fn test_best_area_takes_larger_orientation() {
        let (normal, rotated) = covered_areas(3000, 2000, 900, 1200);
        assert_eq!(best_area(3000, 2000, 900, 1200), normal.max(rotated));
        assert!(rotated > normal);
    }

    #[test]
    fn test_fit_image_rotates_counter_clockwise() {
        let img = create_corner_image(6, 3);
        let (fitted, result) = fit_image(&img, 3, 6);

        assert!(result.rotated);
        assert_eq!(fitted.dimensions(), (3, 6));

        // Turning left moves the top-right corner to the top-left.
        assert_eq!(red(&fitted, 0, 0), 20);
        assert_eq!(red(&fitted, 0, 5), 10);
        assert_eq!(red(&fitted, 2, 0), 40);
        assert_eq!(red(&fitted, 2, 5), 30);
    }

    #[test]
    fn test_fit_image_without_rotation_is_untouched_at_target_size() {
        let img = create_corner_image(4, 2);
        let (fitted, result) = fit_image(&img, 4, 2);

        assert!(!result.rotated);
        assert_eq!(fitted, img);
    }

    #[test]
    fn test_fit_image_resamples_to_fit_dimensions() {
        let img = RgbImage::from_pixel(40, 30, Rgb([200, 100, 50]));
        let (fitted, result) = fit_image(&img, 20, 20);

        assert_eq!(fitted.dimensions(), (result.width, result.height));
        assert_eq!(fitted.dimensions(), (20, 15));
    }
}
