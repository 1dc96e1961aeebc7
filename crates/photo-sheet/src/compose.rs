//! Sheet composition: enhance, fit and paste photos onto a blank canvas.
//!
//! Slots are explicit: a `None` slot is a photo that failed to decode and
//! leaves its region blank. Grid sheets keep slot positions; two-up sheets
//! compact the decoded photos before choosing a layout.

use std::fmt;
use std::path::Path;

use image::{RgbImage, imageops};
use tracing::{debug, info};

use crate::enhance::enhance;
use crate::fit::{FitResult, fit_image};
use crate::layout::{Partition, Region, choose_layout};
use crate::options::SheetConfig;
use crate::{Result, SheetError};

/// The two supported sheet types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKind {
    /// Up to two photos, split whichever way covers more area.
    Optimized,
    /// Up to four photos in fixed 2x2 quadrants.
    Grid,
}

impl SheetKind {
    /// Number of photos one sheet takes.
    pub fn capacity(self) -> usize {
        match self {
            SheetKind::Optimized => 2,
            SheetKind::Grid => 4,
        }
    }

    /// Output file name prefix.
    pub fn file_prefix(self) -> &'static str {
        match self {
            SheetKind::Optimized => "big_sheet",
            SheetKind::Grid => "small_sheet",
        }
    }
}

impl fmt::Display for SheetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SheetKind::Optimized => f.write_str("optimized"),
            SheetKind::Grid => f.write_str("2x2"),
        }
    }
}

/// A decoded photo and the name it is logged under.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub name: String,
    pub image: RgbImage,
}

impl SourceImage {
    pub fn new(name: impl Into<String>, image: RgbImage) -> Self {
        Self {
            name: name.into(),
            image,
        }
    }

    /// Decode a photo from disk, converting it to 8-bit RGB.
    pub fn open(path: &Path) -> Result<Self> {
        let name = display_name(path);
        let image = image::open(path)
            .map_err(|source| SheetError::Decode {
                name: name.clone(),
                source,
            })?
            .to_rgb8();
        Ok(Self { name, image })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// File name of `path` for log output, falling back to the full path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Where one photo ended up on a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub name: String,
    pub region: Region,
    pub fit: FitResult,
    pub x: u32,
    pub y: u32,
}

/// A composed sheet, ready to be saved.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub kind: SheetKind,
    pub partition: Partition,
    pub canvas: RgbImage,
    pub placements: Vec<Placement>,
}

impl Sheet {
    fn blank(kind: SheetKind, partition: Partition, config: &SheetConfig) -> Self {
        Self {
            kind,
            partition,
            canvas: RgbImage::from_pixel(config.width_px(), config.height_px(), config.background),
            placements: Vec::new(),
        }
    }

    /// Enhance `source`, fit it to `region` and paste it centered.
    fn place(&mut self, source: SourceImage, region: Region, factor: f32) {
        let enhanced = enhance(&source.image, factor);
        let (fitted, fit) = fit_image(&enhanced, region.width, region.height);
        let (x, y) = region.centered_origin(fit.width, fit.height);

        imageops::replace(&mut self.canvas, &fitted, i64::from(x), i64::from(y));
        debug!(
            name = %source.name,
            x,
            y,
            w = fit.width,
            h = fit.height,
            rotated = fit.rotated,
            "Placed image"
        );

        self.placements.push(Placement {
            name: source.name,
            region,
            fit,
            x,
            y,
        });
    }

    /// Encode as JPEG with density metadata and write to `path`.
    pub fn save(&self, path: &Path, config: &SheetConfig) -> Result<()> {
        crate::encode::write_jpeg(&self.canvas, path, config)
    }
}

/// Pair each region with the slot assigned to it, in order.
///
/// Regions beyond the supplied slots get `None`; slots beyond the regions
/// are dropped.
pub fn assign_slots(
    regions: Vec<Region>,
    slots: Vec<Option<SourceImage>>,
) -> Vec<(Region, Option<SourceImage>)> {
    let mut slots = slots.into_iter();
    regions
        .into_iter()
        .map(|region| (region, slots.next().flatten()))
        .collect()
}

/// Compose one sheet from `slots` in input order.
///
/// Fails with [`SheetError::NoUsableImages`] only for an optimized sheet
/// with no decoded photo; a grid sheet always succeeds.
pub fn compose_sheet(
    slots: Vec<Option<SourceImage>>,
    kind: SheetKind,
    config: &SheetConfig,
) -> Result<Sheet> {
    config.validate()?;
    match kind {
        SheetKind::Grid => Ok(compose_grid(slots, config)),
        SheetKind::Optimized => compose_optimized(slots, config),
    }
}

fn compose_grid(slots: Vec<Option<SourceImage>>, config: &SheetConfig) -> Sheet {
    let mut sheet = Sheet::blank(SheetKind::Grid, Partition::Quadrants, config);
    let regions = Partition::Quadrants.regions(config.width_px(), config.height_px());

    for (index, (region, slot)) in assign_slots(regions, slots).into_iter().enumerate() {
        match slot {
            Some(source) => sheet.place(source, region, config.enhancement_factor),
            None => debug!(quadrant = index, "Quadrant left blank"),
        }
    }

    sheet
}

fn compose_optimized(slots: Vec<Option<SourceImage>>, config: &SheetConfig) -> Result<Sheet> {
    let capacity = SheetKind::Optimized.capacity();
    let images: Vec<SourceImage> = slots.into_iter().take(capacity).flatten().collect();
    let dims: Vec<(u32, u32)> = images.iter().map(SourceImage::dimensions).collect();

    let (width, height) = (config.width_px(), config.height_px());
    let choice = choose_layout(&dims, width, height)
        .ok_or(SheetError::NoUsableImages(SheetKind::Optimized))?;

    info!(
        layout = %choice.partition,
        total_area = choice.total_area,
        "Using {} layout",
        choice.partition
    );

    let mut sheet = Sheet::blank(SheetKind::Optimized, choice.partition, config);
    let regions = choice.partition.regions(width, height);
    for (region, source) in regions.into_iter().zip(images) {
        sheet.place(source, region, config.enhancement_factor);
    }

    Ok(sheet)
}
