//! Print command options.

/// Default print command (CUPS).
pub const DEFAULT_COMMAND: &str = "lp";

/// Configuration for the system print command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintOptions {
    /// Executable to run once per sheet.
    pub command: String,

    /// Destination printer (`-d`). `None` uses the system default.
    pub printer: Option<String>,

    /// Copies per sheet (`-n`).
    pub copies: u32,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            command: DEFAULT_COMMAND.to_string(),
            printer: None,
            copies: 1,
        }
    }
}

impl PrintOptions {
    /// Create options that print one copy on the default printer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set the print command.
    pub fn with_command(mut self, command: impl Into<String>) -> Self {
        self.command = command.into();
        self
    }

    /// Builder: set the destination printer. Blank names mean the default.
    pub fn with_printer(mut self, printer: Option<String>) -> Self {
        self.printer = printer.filter(|p| !p.trim().is_empty());
        self
    }

    /// Builder: set the number of copies.
    ///
    /// # Panics
    /// Panics if `copies` is zero.
    pub fn with_copies(mut self, copies: u32) -> Self {
        assert!(copies >= 1, "Copies must be at least 1, got {copies}");
        self.copies = copies;
        self
    }

    /// Command-line arguments for printing `file`, excluding the command.
    pub fn args_for(&self, file: &str) -> Vec<String> {
        let mut args = Vec::new();
        if let Some(printer) = &self.printer {
            args.push("-d".to_string());
            args.push(printer.clone());
        }
        if self.copies > 1 {
            args.push("-n".to_string());
            args.push(self.copies.to_string());
        }
        args.push(file.to_string());
        args
    }
}
