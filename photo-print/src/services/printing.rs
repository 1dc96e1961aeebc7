//! Printing finished sheets after the batch completes.

use std::path::Path;

use sheet_printer::{LpPrinter, PrintOptions, SheetPrinter, print_all};

use crate::config::AppConfig;

/// Build the system printer described by `config`.
pub fn build_printer(config: &AppConfig) -> LpPrinter {
    LpPrinter::new(
        PrintOptions::new()
            .with_command(config.print_command.clone())
            .with_printer(config.printer.clone())
            .with_copies(config.copies.max(1)),
    )
}

/// Print `sheets` if printing is enabled; returns how many were sent.
pub fn print_sheets<'a, P, I>(config: &AppConfig, printer: &P, sheets: I) -> usize
where
    P: SheetPrinter + ?Sized,
    I: IntoIterator<Item = &'a Path>,
{
    if !config.print {
        tracing::info!("Use -p/--print to send sheets to the printer automatically");
        return 0;
    }

    let printed = print_all(printer, sheets);
    tracing::info!("Sent {printed} sheets to printer");
    printed
}
