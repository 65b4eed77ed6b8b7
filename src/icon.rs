use std::io::Cursor;
use std::path::Path;

use anyhow::{bail, Context, Result};
use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbaImage};

use crate::targets::MIN_SOURCE_EDGE;

pub const FILTER: FilterType = FilterType::Lanczos3;

/// Loads the source icon as RGBA. A missing file is reported before any
/// decoding is attempted.
pub fn load_source(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        bail!("Source icon not found: {}", path.display());
    }

    let img =
        image::open(path).with_context(|| format!("Failed to open icon: {}", path.display()))?;

    Ok(img.to_rgba8())
}

/// Upscales rasters whose longest edge is below [`MIN_SOURCE_EDGE`] to a
/// `MIN_SOURCE_EDGE` square. Larger rasters are returned untouched.
pub fn ensure_baseline(img: RgbaImage) -> RgbaImage {
    if img.width().max(img.height()) >= MIN_SOURCE_EDGE {
        return img;
    }
    imageops::resize(&img, MIN_SOURCE_EDGE, MIN_SOURCE_EDGE, FILTER)
}

/// Resizes to an exact `size`×`size` square.
pub fn resize_square(img: &RgbaImage, size: u32) -> RgbaImage {
    imageops::resize(img, size, size, FILTER)
}

pub fn encode_png(img: &RgbaImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("Failed to encode PNG")?;
    Ok(buf)
}
