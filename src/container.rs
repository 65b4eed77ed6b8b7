//! Multi-resolution icon containers: Windows ICO and macOS ICNS.
//!
//! Each embedded entry is a separate Lanczos resize of the working raster,
//! so small entries are not derived from other small entries.

use std::io::Cursor;

use anyhow::{anyhow, Context, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use icns::{IconFamily, IconType, PixelFormat};
use image::RgbaImage;

use crate::icon::resize_square;

pub fn encode_ico(img: &RgbaImage, sizes: &[u32]) -> Result<Vec<u8>> {
    let mut dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        let rgba = resize_square(img, size);
        let image = IconImage::from_rgba_data(size, size, rgba.into_raw());
        let entry = IconDirEntry::encode(&image)
            .with_context(|| format!("Failed to encode {size}x{size} ICO entry"))?;
        dir.add_entry(entry);
    }

    let mut buf = Vec::new();
    dir.write(&mut buf).context("Failed to write ICO")?;
    Ok(buf)
}

pub fn encode_icns(img: &RgbaImage, sizes: &[u32]) -> Result<Vec<u8>> {
    let mut family = IconFamily::new();

    for &size in sizes {
        let icon_type = icns_type_for(size)?;
        let rgba = resize_square(img, size);
        let image = icns::Image::from_data(PixelFormat::RGBA, size, size, rgba.into_raw())
            .with_context(|| format!("Failed to build {size}x{size} ICNS image"))?;
        family
            .add_icon_with_type(&image, icon_type)
            .with_context(|| format!("Failed to encode {size}x{size} ICNS entry"))?;
    }

    let mut buf = Vec::new();
    family
        .write(Cursor::new(&mut buf))
        .context("Failed to write ICNS")?;
    Ok(buf)
}

/// Maps a square edge to the 1x RGBA ICNS slot of that size.
fn icns_type_for(size: u32) -> Result<IconType> {
    match size {
        16 => Ok(IconType::RGBA32_16x16),
        32 => Ok(IconType::RGBA32_32x32),
        64 => Ok(IconType::RGBA32_64x64),
        128 => Ok(IconType::RGBA32_128x128),
        256 => Ok(IconType::RGBA32_256x256),
        512 => Ok(IconType::RGBA32_512x512),
        _ => Err(anyhow!("No ICNS icon type holds {size}x{size}")),
    }
}
