//! Setting value validation.

use regex::Regex;
use std::sync::LazyLock;

use super::defaults;

/// CUPS destination names: printable, no whitespace, '/' or '#'.
static RE_PRINTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s/#]{1,127}$").expect("printer name regex"));

/// Validate a setting value. Returns `Ok(())` if valid, or an error message.
pub fn validate_setting(key: &str, value: &str) -> Result<(), String> {
    match key {
        defaults::OUTPUT_FOLDER | defaults::PRINT_COMMAND => {
            if value.trim().is_empty() {
                return Err("must not be empty".into());
            }
        }
        defaults::ENHANCEMENT_FACTOR => {
            let v: f32 = value.parse().map_err(|_| "must be a float")?;
            if !(0.1..=4.0).contains(&v) {
                return Err("must be between 0.1 and 4.0".into());
            }
        }
        defaults::JPEG_QUALITY => validate_int_range(value, 1, 100)?,
        defaults::DPI => validate_int_range(value, 72, 1200)?,
        defaults::COPIES => validate_int_range(value, 1, 99)?,
        defaults::PRINTER => {
            if !value.is_empty() && !RE_PRINTER.is_match(value) {
                return Err("invalid printer name (no spaces, '/' or '#')".into());
            }
        }
        _ => {}
    }
    Ok(())
}

fn validate_int_range(value: &str, min: i32, max: i32) -> Result<(), String> {
    let v: i32 = value.parse().map_err(|_| "must be an integer")?;
    if v < min || v > max {
        return Err(format!("must be between {min} and {max}"));
    }
    Ok(())
}
