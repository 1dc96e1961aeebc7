//! Print-sheet composition for 4x6 photo prints.
//!
//! Packs decoded photographs onto fixed-size canvases, choosing per-image
//! rotation and scale (and, for two-up sheets, the split direction) so each
//! photo covers as much of its region as possible.

pub mod batch;
pub mod compose;
pub mod encode;
pub mod enhance;
pub mod fit;
pub mod layout;
pub mod options;

// Re-exports for convenience
pub use batch::{BatchReport, PassReport, process, render_chunk};
pub use compose::{Placement, Sheet, SheetKind, SourceImage, compose_sheet};
pub use enhance::enhance;
pub use fit::{FitResult, fit, fit_image};
pub use layout::{LayoutChoice, Partition, Region, select_layout};
pub use options::SheetConfig;

/// Default print resolution in dots per inch.
pub const DPI: u32 = 300;

/// Default enhancement factor (saturation x1.2, brightness x1.1).
pub const ENHANCEMENT_FACTOR: f32 = 1.2;

/// Default JPEG quality for finished sheets.
pub const JPEG_QUALITY: u8 = 95;

/// Errors that can occur while composing or writing sheets.
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Failed to decode '{name}': {source}")]
    Decode {
        name: String,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode sheet: {0}")]
    Encode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No usable images for {0} sheet")]
    NoUsableImages(SheetKind),

    #[error("Invalid sheet config: {0}")]
    InvalidConfig(String),
}

/// Result type alias for sheet operations.
pub type Result<T> = std::result::Result<T, SheetError>;
