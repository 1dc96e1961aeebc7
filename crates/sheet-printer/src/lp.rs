//! `lp`-style command printer.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::{PrintError, PrintOptions, Result, SheetPrinter};

/// Prints sheets by running the configured command with the file as its
/// last argument.
#[derive(Debug, Clone, Default)]
pub struct LpPrinter {
    options: PrintOptions,
}

impl LpPrinter {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }
}

impl SheetPrinter for LpPrinter {
    fn print(&self, sheet: &Path) -> Result<()> {
        if !sheet.is_file() {
            return Err(PrintError::MissingFile(sheet.to_path_buf()));
        }

        let command = &self.options.command;
        let args = self.options.args_for(&sheet.to_string_lossy());
        debug!(command = %command, ?args, "Running print command");

        let output = Command::new(command)
            .args(&args)
            .output()
            .map_err(|source| PrintError::Spawn {
                command: command.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PrintError::CommandFailed {
                command: command.clone(),
                stderr: stderr.trim().to_string(),
            });
        }

        Ok(())
    }
}
