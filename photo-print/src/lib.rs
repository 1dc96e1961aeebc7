//! Turns two folders of photos into printable 4x6 sheets.
//!
//! The big folder becomes two-up sheets, the small folder 2x2 grids. Folder
//! listing and printing are injected so a run can be driven without a real
//! filesystem layout or print queue.

pub mod bootstrap;
pub mod config;
pub mod services;

use photo_sheet::BatchReport;
use sheet_printer::SheetPrinter;

pub use config::AppConfig;
pub use services::{DirectorySource, ImageSource};

/// What a run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub report: BatchReport,
    pub printed: usize,
}

/// Discover photos, compose every sheet, then print if requested.
///
/// Only an invalid sheet configuration or an uncreatable output folder
/// aborts the run; everything else is logged and skipped.
pub fn run<S, P>(config: &AppConfig, source: &S, printer: &P) -> anyhow::Result<RunSummary>
where
    S: ImageSource + ?Sized,
    P: SheetPrinter + ?Sized,
{
    config.sheet.validate()?;

    tracing::info!("--- Starting Photo Processing Job ---");
    tracing::info!("Big photos folder: {}", config.big_folder.display());
    tracing::info!("Small photos folder: {}", config.small_folder.display());
    tracing::info!("Output folder: {}", config.output_folder.display());
    if config.print {
        match &config.printer {
            Some(name) => tracing::info!("Print mode enabled (printer: {name})"),
            None => tracing::info!("Print mode enabled (default printer)"),
        }
    } else {
        tracing::info!("Process only mode (use -p to print)");
    }

    let big = source.list_images(&config.big_folder);
    let small = source.list_images(&config.small_folder);

    let report = photo_sheet::process(
        big.as_deref(),
        small.as_deref(),
        &config.output_folder,
        &config.sheet,
    )?;

    let (big_sheets, small_sheets) = report.counts();
    let (big_attempted, small_attempted) = report.attempted();
    tracing::info!("--- Photo Processing Finished ---");
    tracing::info!(
        "Created {big_sheets} of {big_attempted} big sheets and {small_sheets} of {small_attempted} small sheets"
    );
    tracing::info!(
        "All processed files are in the '{}' directory",
        config.output_folder.display()
    );

    let printed = services::printing::print_sheets(config, printer, report.outputs());

    Ok(RunSummary { report, printed })
}
