//! Batch scheduling: chunk file lists into sheets and render them in order.
//!
//! The two passes (optimized two-up sheets and 2x2 grid sheets) are
//! independent. A missing or empty file list, an undecodable photo or a
//! failed sheet is logged and skipped; nothing here aborts the batch except
//! being unable to create the output directory.

use std::path::{Path, PathBuf};

use tracing::{error, info, warn};

use crate::Result;
use crate::compose::{SheetKind, SourceImage, compose_sheet};
use crate::options::SheetConfig;

/// Outcome of one pass over a file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub kind: SheetKind,
    /// Chunks attempted (one sheet each).
    pub attempted: usize,
    /// Sheets written successfully.
    pub produced: usize,
    /// Paths of the written sheets, in order.
    pub outputs: Vec<PathBuf>,
}

impl PassReport {
    fn empty(kind: SheetKind) -> Self {
        Self {
            kind,
            attempted: 0,
            produced: 0,
            outputs: Vec::new(),
        }
    }

    /// Chunks that did not produce a sheet.
    pub fn failed(&self) -> usize {
        self.attempted - self.produced
    }
}

/// Outcome of both passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub optimized: PassReport,
    pub grid: PassReport,
}

impl BatchReport {
    /// Produced sheet counts as `(optimized, grid)`.
    pub fn counts(&self) -> (usize, usize) {
        (self.optimized.produced, self.grid.produced)
    }

    /// Attempted sheet counts as `(optimized, grid)`.
    pub fn attempted(&self) -> (usize, usize) {
        (self.optimized.attempted, self.grid.attempted)
    }

    /// Every written sheet, optimized pass first.
    pub fn outputs(&self) -> impl Iterator<Item = &Path> {
        self.optimized
            .outputs
            .iter()
            .chain(self.grid.outputs.iter())
            .map(PathBuf::as_path)
    }
}

/// Split `files` into consecutive chunks of at most `size`, keeping order.
pub fn chunk_files(files: &[PathBuf], size: usize) -> Vec<&[PathBuf]> {
    files.chunks(size.max(1)).collect()
}

/// Output file name for the `index`-th sheet (1-based) of `kind`.
pub fn sheet_file_name(kind: SheetKind, index: usize) -> String {
    format!("{}_{index:03}.jpg", kind.file_prefix())
}

/// Decode each path into a slot; failures become empty slots.
pub fn load_slots(paths: &[PathBuf]) -> Vec<Option<SourceImage>> {
    paths
        .iter()
        .map(|path| match SourceImage::open(path) {
            Ok(source) => Some(source),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error opening image, leaving slot empty");
                None
            }
        })
        .collect()
}

/// Decode, compose and save one chunk as a `kind` sheet at `output`.
pub fn render_chunk(
    paths: &[PathBuf],
    kind: SheetKind,
    output: &Path,
    config: &SheetConfig,
) -> Result<()> {
    info!(kind = %kind, output = %output.display(), "Creating photo sheet");

    let slots = load_slots(&paths[..paths.len().min(kind.capacity())]);
    let sheet = compose_sheet(slots, kind, config)?;
    sheet.save(output, config)?;

    for placement in &sheet.placements {
        info!(
            name = %placement.name,
            factor = config.enhancement_factor,
            "Processed image"
        );
    }
    Ok(())
}

/// Render every chunk of `files` as `kind` sheets into `output_dir`.
///
/// `None` means the source folder was not found.
pub fn run_pass(
    files: Option<&[PathBuf]>,
    kind: SheetKind,
    output_dir: &Path,
    config: &SheetConfig,
) -> PassReport {
    let mut report = PassReport::empty(kind);

    let Some(files) = files else {
        warn!(kind = %kind, "Source folder not found, skipping pass");
        return report;
    };
    if files.is_empty() {
        warn!(kind = %kind, "No images found, skipping pass");
        return report;
    }

    for (i, chunk) in chunk_files(files, kind.capacity()).into_iter().enumerate() {
        report.attempted += 1;
        let output = output_dir.join(sheet_file_name(kind, i + 1));

        match render_chunk(chunk, kind, &output, config) {
            Ok(()) => {
                info!(kind = %kind, output = %output.display(), "Created sheet");
                report.produced += 1;
                report.outputs.push(output);
            }
            Err(e) => {
                error!(kind = %kind, output = %output.display(), error = %e, "Error creating sheet");
            }
        }
    }

    report
}

/// Run the optimized pass over `optimized_files` and the grid pass over
/// `grid_files`, writing sheets into `output_dir` (created if missing).
pub fn process(
    optimized_files: Option<&[PathBuf]>,
    grid_files: Option<&[PathBuf]>,
    output_dir: &Path,
    config: &SheetConfig,
) -> Result<BatchReport> {
    if !output_dir.exists() {
        std::fs::create_dir_all(output_dir)?;
        info!(dir = %output_dir.display(), "Created output directory");
    }

    let optimized = run_pass(optimized_files, SheetKind::Optimized, output_dir, config);
    let grid = run_pass(grid_files, SheetKind::Grid, output_dir, config);

    Ok(BatchReport { optimized, grid })
}
