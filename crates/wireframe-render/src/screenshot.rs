//! Saving and loading raster buffers as image files.

use std::path::Path;

use image::ImageFormat;

use crate::{RasterBuffer, RenderError, RenderResult};

/// Saves a raster buffer to an image file.
///
/// The format is chosen from the extension: `.png`, `.jpg` or `.jpeg`.
/// JPEG is lossy, so only PNG output is suitable for pixel-exact comparison.
pub fn save_image(path: impl AsRef<Path>, buffer: &RasterBuffer) -> RenderResult<()> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let format = match extension.as_str() {
        "png" => ImageFormat::Png,
        "jpg" | "jpeg" => ImageFormat::Jpeg,
        _ => return Err(RenderError::UnsupportedFormat(extension)),
    };
    buffer.image().save_with_format(path, format)?;
    log::info!("saved {}x{} image to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}

/// Loads an image file as a raster buffer, converting it to 8-bit RGB.
pub fn load_image(path: impl AsRef<Path>) -> RenderResult<RasterBuffer> {
    let image = image::open(path)?.to_rgb8();
    Ok(RasterBuffer::from_image(image))
}

/// Encodes a raster buffer as PNG in memory.
pub fn encode_png(buffer: &RasterBuffer) -> RenderResult<Vec<u8>> {
    let mut bytes = std::io::Cursor::new(Vec::new());
    buffer.image().write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}

/// Decodes PNG bytes produced by [`encode_png`].
pub fn decode_png(bytes: &[u8]) -> RenderResult<RasterBuffer> {
    let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)?.to_rgb8();
    Ok(RasterBuffer::from_image(image))
}
