//! Sending finished sheets to a system printer.
//!
//! Printing shells out to the CUPS `lp` command (or a configured
//! replacement) once per sheet, blocking until the command returns.

pub mod lp;
pub mod options;

use std::path::{Path, PathBuf};

// Re-exports for convenience
pub use lp::LpPrinter;
pub use options::PrintOptions;

/// Errors that can occur while printing a sheet.
#[derive(Debug, thiserror::Error)]
pub enum PrintError {
    #[error("Sheet not found: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to run {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
}

/// Result type alias for printing operations.
pub type Result<T> = std::result::Result<T, PrintError>;

/// Something that can print one finished sheet.
pub trait SheetPrinter {
    fn print(&self, sheet: &Path) -> Result<()>;
}

/// Print every sheet in order, logging failures and carrying on.
///
/// Returns the number of sheets sent to the printer.
pub fn print_all<'a, P, I>(printer: &P, sheets: I) -> usize
where
    P: SheetPrinter + ?Sized,
    I: IntoIterator<Item = &'a Path>,
{
    let mut printed = 0;
    for sheet in sheets {
        match printer.print(sheet) {
            Ok(()) => {
                tracing::info!(sheet = %sheet.display(), "Printed sheet");
                printed += 1;
            }
            Err(e) => {
                tracing::error!(sheet = %sheet.display(), error = %e, "Failed to print sheet");
            }
        }
    }
    printed
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Records every sheet it is asked to print; fails on names containing "bad".
    #[derive(Default)]
    struct RecordingPrinter {
        printed: RefCell<Vec<PathBuf>>,
    }

    impl SheetPrinter for RecordingPrinter {
        fn print(&self, sheet: &Path) -> Result<()> {
            if sheet.to_string_lossy().contains("bad") {
                return Err(PrintError::CommandFailed {
                    command: "lp".into(),
                    stderr: "no default destination".into(),
                });
            }
            self.printed.borrow_mut().push(sheet.to_path_buf());
            Ok(())
        }
    }

    #[test]
    fn test_print_all_counts_successes() {
        let printer = RecordingPrinter::default();
        let sheets = [
            PathBuf::from("big_sheet_001.jpg"),
            PathBuf::from("bad_sheet.jpg"),
            PathBuf::from("small_sheet_001.jpg"),
        ];

        let printed = print_all(&printer, sheets.iter().map(PathBuf::as_path));

        assert_eq!(printed, 2);
        assert_eq!(
            *printer.printed.borrow(),
            vec![
                PathBuf::from("big_sheet_001.jpg"),
                PathBuf::from("small_sheet_001.jpg")
            ]
        );
    }

    #[test]
    fn test_print_all_with_nothing() {
        let printer = RecordingPrinter::default();
        assert_eq!(print_all(&printer, std::iter::empty()), 0);
    }

    #[test]
    fn test_error_messages() {
        let err = PrintError::CommandFailed {
            command: "lp".into(),
            stderr: "printer offline".into(),
        };
        assert_eq!(err.to_string(), "lp failed: printer offline");

        let err = PrintError::MissingFile(PathBuf::from("x.jpg"));
        assert_eq!(err.to_string(), "Sheet not found: x.jpg");
    }
}
