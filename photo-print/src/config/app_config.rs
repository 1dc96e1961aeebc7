//! Runtime configuration: setting defaults, environment overrides, then CLI.

use std::path::PathBuf;

use photo_sheet::SheetConfig;

use super::defaults::{self, get_default};
use super::validation::validate_setting;

/// Everything one run needs, resolved before any work starts.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Photos for optimized two-up sheets.
    pub big_folder: PathBuf,
    /// Photos for 2x2 grid sheets.
    pub small_folder: PathBuf,
    pub output_folder: PathBuf,
    /// Send finished sheets to the printer.
    pub print: bool,
    pub print_command: String,
    pub printer: Option<String>,
    /// Copies printed of each sheet, at least 1.
    pub copies: u32,
    pub sheet: SheetConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load(|_| None)
    }
}

impl AppConfig {
    /// Load configuration through `lookup` (usually the process environment).
    ///
    /// Missing keys fall back to their defaults; invalid values are logged
    /// and replaced by the default.
    pub fn load<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> String { setting(&lookup, key) };
        let sheet_defaults = SheetConfig::default();

        let printer = g(defaults::PRINTER);
        let sheet = sheet_defaults
            .clone()
            .with_dpi(parse_u32(&g(defaults::DPI), sheet_defaults.dpi))
            .with_enhancement_factor(parse_f32(
                &g(defaults::ENHANCEMENT_FACTOR),
                sheet_defaults.enhancement_factor,
            ))
            .with_jpeg_quality(parse_u8(
                &g(defaults::JPEG_QUALITY),
                sheet_defaults.jpeg_quality,
            ));

        Self {
            big_folder: PathBuf::new(),
            small_folder: PathBuf::new(),
            output_folder: PathBuf::from(g(defaults::OUTPUT_FOLDER)),
            print: false,
            print_command: g(defaults::PRINT_COMMAND),
            printer: if printer.is_empty() { None } else { Some(printer) },
            copies: parse_u32(&g(defaults::COPIES), 1).max(1),
            sheet,
        }
    }

    /// Load configuration from the process environment.
    pub fn from_env() -> Self {
        Self::load(|key| std::env::var(key).ok())
    }

    /// Builder: set both input folders.
    pub fn with_folders(mut self, big: PathBuf, small: PathBuf) -> Self {
        self.big_folder = big;
        self.small_folder = small;
        self
    }

    /// Builder: override the output folder.
    pub fn with_output_folder(mut self, output: PathBuf) -> Self {
        self.output_folder = output;
        self
    }

    /// Builder: enable or disable printing.
    pub fn with_print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    /// Builder: override the destination printer.
    pub fn with_printer(mut self, printer: Option<String>) -> Self {
        if printer.is_some() {
            self.printer = printer;
        }
        self
    }

    /// Builder: override the number of copies. Zero is raised to 1.
    pub fn with_copies(mut self, copies: Option<u32>) -> Self {
        if let Some(copies) = copies {
            self.copies = copies.max(1);
        }
        self
    }

    /// Resolve all folders to absolute paths.
    pub fn resolve_paths(mut self) -> Self {
        for path in [
            &mut self.big_folder,
            &mut self.small_folder,
            &mut self.output_folder,
        ] {
            if let Ok(abs) = std::path::absolute(&*path) {
                *path = abs;
            }
        }
        self
    }
}

/// Read `key` through `lookup`, falling back to its default when missing or invalid.
fn setting<F>(lookup: &F, key: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let default = get_default(key).unwrap_or_default();
    match lookup(key) {
        Some(value) => match validate_setting(key, &value) {
            Ok(()) => value,
            Err(e) => {
                tracing::warn!("Ignoring {key}={value:?}: {e}");
                default.to_string()
            }
        },
        None => default.to_string(),
    }
}

fn parse_f32(s: &str, default: f32) -> f32 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_u32(s: &str, default: u32) -> u32 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}

fn parse_u8(s: &str, default: u8) -> u8 {
    if s.is_empty() {
        return default;
    }
    s.parse().unwrap_or(default)
}
