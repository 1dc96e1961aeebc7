//! JPEG output with embedded print resolution.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::jpeg::{JpegEncoder, PixelDensity};
use image::{ExtendedColorType, RgbImage};
use tracing::debug;

use crate::Result;
use crate::options::SheetConfig;

/// Encode `img` as JPEG into `writer`, tagging it with `dpi` in the JFIF header.
pub fn encode_jpeg<W: Write>(img: &RgbImage, writer: W, dpi: u16, quality: u8) -> Result<()> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    encoder.set_pixel_density(PixelDensity::dpi(dpi));
    encoder.encode(img.as_raw(), img.width(), img.height(), ExtendedColorType::Rgb8)?;
    Ok(())
}

/// Write `img` to `path` using the resolution and quality from `config`.
pub fn write_jpeg(img: &RgbImage, path: &Path, config: &SheetConfig) -> Result<()> {
    config.validate()?;
    // validate() bounds dpi to u16.
    let dpi = u16::try_from(config.dpi).unwrap_or(u16::MAX);

    let mut writer = BufWriter::new(File::create(path)?);
    encode_jpeg(img, &mut writer, dpi, config.jpeg_quality)?;
    writer.flush()?;

    debug!(
        path = %path.display(),
        dpi,
        quality = config.jpeg_quality,
        "Wrote sheet"
    );
    Ok(())
}
