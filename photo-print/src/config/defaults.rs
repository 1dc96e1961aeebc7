//! All setting definitions with their default values.

use std::collections::HashMap;
use std::sync::LazyLock;

pub const OUTPUT_FOLDER: &str = "PHOTO_PRINT_OUTPUT_FOLDER";
pub const ENHANCEMENT_FACTOR: &str = "PHOTO_PRINT_ENHANCEMENT_FACTOR";
pub const JPEG_QUALITY: &str = "PHOTO_PRINT_JPEG_QUALITY";
pub const DPI: &str = "PHOTO_PRINT_DPI";
pub const PRINT_COMMAND: &str = "PHOTO_PRINT_COMMAND";
pub const PRINTER: &str = "PHOTO_PRINT_PRINTER";
pub const COPIES: &str = "PHOTO_PRINT_COPIES";

type DefTuple = (&'static str, &'static str, &'static str);

const DEFS: &[DefTuple] = &[
    (OUTPUT_FOLDER, "TOPRINT", "Output folder for processed sheets"),
    (ENHANCEMENT_FACTOR, "1.2", "Saturation boost; brightness gets half of it"),
    (JPEG_QUALITY, "95", "JPEG quality of finished sheets"),
    (DPI, "300", "Print resolution of a 4x6 sheet"),
    (PRINT_COMMAND, "lp", "Command used to print each sheet"),
    (PRINTER, "", "Destination printer; empty uses the system default"),
    (COPIES, "1", "Copies printed of each sheet"),
];

/// A single setting definition.
#[derive(Debug, Clone)]
pub struct SettingDef {
    pub key: &'static str,
    pub default: &'static str,
    pub description: &'static str,
}

/// Global setting definitions indexed by key.
pub static DEFAULT_SETTINGS: LazyLock<HashMap<&'static str, SettingDef>> = LazyLock::new(|| {
    DEFS.iter()
        .map(|&(key, default, description)| {
            (
                key,
                SettingDef {
                    key,
                    default,
                    description,
                },
            )
        })
        .collect()
});

/// Get the default value for a setting key, or `None` if not defined.
pub fn get_default(key: &str) -> Option<&'static str> {
    DEFAULT_SETTINGS.get(key).map(|d| d.default)
}
