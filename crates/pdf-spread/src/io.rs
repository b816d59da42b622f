//! Raster file I/O

use crate::types::*;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader, RgbImage};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// JPEG quality for pages and spreads
pub const JPEG_QUALITY: u8 = 100;

/// Decode a page image from disk
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)?.with_guessed_format()?;
    reader
        .decode()
        .map_err(|e| SpreadError::Decode(format!("{}: {}", path.display(), e)))
}

/// Encode `image` as a maximum-quality JPEG at `path`
pub fn save_jpeg(image: &RgbImage, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    let encoder = JpegEncoder::new_with_quality(&mut writer, JPEG_QUALITY);
    image.write_with_encoder(encoder)?;
    writer.flush()?;
    Ok(())
}

/// Copy `path` byte-for-byte into `dest_dir`, keeping its file name
pub fn copy_into(path: &Path, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        SpreadError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("{} has no file name", path.display()),
        ))
    })?;
    let dest = dest_dir.join(file_name);
    std::fs::copy(path, &dest)?;
    Ok(dest)
}
