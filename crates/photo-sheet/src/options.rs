//! Sheet configuration.
//!
//! A `SheetConfig` is passed explicitly into every composition call; nothing
//! in this crate keeps configuration in global or per-object state.

use image::Rgb;

use crate::{DPI, ENHANCEMENT_FACTOR, JPEG_QUALITY, Result, SheetError};
use crate::layout::Region;

/// Paper width in inches (landscape 4x6).
pub const PAPER_WIDTH_IN: u32 = 6;

/// Paper height in inches (landscape 4x6).
pub const PAPER_HEIGHT_IN: u32 = 4;

/// Configuration for sheet composition and encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Print resolution, also written into the JPEG density header.
    pub dpi: u32,

    /// Paper width in inches.
    pub width_in: u32,

    /// Paper height in inches.
    pub height_in: u32,

    /// Saturation multiplier. Brightness uses a damped version of it.
    pub enhancement_factor: f32,

    /// Lossy encoding quality (1..=100).
    pub jpeg_quality: u8,

    /// Canvas fill color for areas no photo covers.
    pub background: Rgb<u8>,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            dpi: DPI,
            width_in: PAPER_WIDTH_IN,
            height_in: PAPER_HEIGHT_IN,
            enhancement_factor: ENHANCEMENT_FACTOR,
            jpeg_quality: JPEG_QUALITY,
            background: Rgb([255, 255, 255]),
        }
    }
}

impl SheetConfig {
    /// Create a config for a 300 DPI 4x6 sheet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the print resolution.
    pub fn with_dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    /// Builder: set the paper size in inches.
    pub fn with_paper_size(mut self, width_in: u32, height_in: u32) -> Self {
        self.width_in = width_in;
        self.height_in = height_in;
        self
    }

    /// Builder: set the enhancement factor.
    pub fn with_enhancement_factor(mut self, factor: f32) -> Self {
        self.enhancement_factor = factor;
        self
    }

    /// Builder: set the JPEG quality.
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Builder: set the background color.
    pub fn with_background(mut self, background: Rgb<u8>) -> Self {
        self.background = background;
        self
    }

    /// Canvas width in pixels.
    pub fn width_px(&self) -> u32 {
        self.width_in * self.dpi
    }

    /// Canvas height in pixels.
    pub fn height_px(&self) -> u32 {
        self.height_in * self.dpi
    }

    /// The whole canvas as a single region.
    pub fn canvas(&self) -> Region {
        Region::new(0, 0, self.width_px(), self.height_px())
    }

    /// Reject values that cannot produce a printable sheet.
    pub fn validate(&self) -> Result<()> {
        if self.dpi == 0 || self.dpi > u32::from(u16::MAX) {
            return Err(SheetError::InvalidConfig(format!(
                "dpi must be between 1 and {}, got {}",
                u16::MAX,
                self.dpi
            )));
        }
        if self.width_in == 0 || self.height_in == 0 {
            return Err(SheetError::InvalidConfig(format!(
                "paper size must be non-zero, got {}x{} in",
                self.width_in, self.height_in
            )));
        }
        let (Some(width), Some(height)) = (
            self.width_in.checked_mul(self.dpi),
            self.height_in.checked_mul(self.dpi),
        ) else {
            return Err(SheetError::InvalidConfig(format!(
                "canvas of {}x{} in at {} dpi is too large",
                self.width_in, self.height_in, self.dpi
            )));
        };
        // Quadrants are half the canvas in each direction.
        if width < 2 || height < 2 {
            return Err(SheetError::InvalidConfig(format!(
                "canvas of {width}x{height} px is too small to split"
            )));
        }
        if !self.enhancement_factor.is_finite() || self.enhancement_factor <= 0.0 {
            return Err(SheetError::InvalidConfig(format!(
                "enhancement factor must be positive, got {}",
                self.enhancement_factor
            )));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(SheetError::InvalidConfig(format!(
                "jpeg quality must be between 1 and 100, got {}",
                self.jpeg_quality
            )));
        }
        Ok(())
    }
}
