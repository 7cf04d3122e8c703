//! Headless rendering entry points.
//!
//! These wrap [`render_wireframe`] with the load and save steps around it,
//! taking camera and image settings from a [`RenderConfig`].

use std::path::Path;

use wireframe_core::{Model, RenderConfig};
use wireframe_render::{render_wireframe, save_image, RasterBuffer};

use crate::Result;

/// Renders a model with the camera and image size from `config`.
///
/// The config is not validated here; use [`RenderConfig::validate`] (or load
/// it with [`RenderConfig::load`]) first if it comes from an untrusted source.
///
/// # Example
/// ```
/// use wireframe::*;
///
/// let model = Model::polyline(vec![DVec3::new(-1.0, 0.0, 0.0), DVec3::new(1.0, 0.0, 0.0)]);
/// let image = render(&model, &RenderConfig::default());
/// assert_eq!(image.as_raw().len(), 512 * 512 * 3);
/// ```
pub fn render(model: &Model, config: &RenderConfig) -> RasterBuffer {
    render_wireframe(
        model,
        &config.pose(),
        &config.intrinsics(),
        config.image_width,
        config.image_height,
    )
}

/// Renders a model and saves the image (`.png`, `.jpg` or `.jpeg`).
pub fn render_to_file(path: impl AsRef<Path>, model: &Model, config: &RenderConfig) -> Result<()> {
    config.validate()?;
    let image = render(model, config);
    save_image(path, &image)?;
    Ok(())
}

/// Loads a model from JSON, renders it, and saves the image.
pub fn render_model_file(
    model_path: impl AsRef<Path>,
    config: &RenderConfig,
    output_path: impl AsRef<Path>,
) -> Result<()> {
    let model = Model::load(model_path)?;
    render_to_file(output_path, &model, config)
}
