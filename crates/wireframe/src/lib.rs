//! wireframe-rs: render 3D wireframe models through a pinhole camera.
//!
//! A model is a list of world-space vertices plus edges between them. Rendering
//! moves the vertices into the camera frame, projects them onto the image
//! plane, and draws a white line for every edge whose endpoints are both in
//! front of the camera.
//!
//! # Quick Start
//!
//! ```no_run
//! use wireframe::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let square = Model::closed_loop(vec![
//!         DVec3::new(-0.5, -0.5, 0.0),
//!         DVec3::new(0.5, -0.5, 0.0),
//!         DVec3::new(0.5, 0.5, 0.0),
//!         DVec3::new(-0.5, 0.5, 0.0),
//!     ]);
//!
//!     // 512x512, focal length 500, camera at (0, 0, -5)
//!     let config = RenderConfig::default();
//!     render_to_file("square.png", &square, &config)?;
//!     Ok(())
//! }
//! ```
//!
//! # Crates
//!
//! - `wireframe-core`: [`Model`], [`CameraPose`], [`Intrinsics`], [`CameraRig`], [`RenderConfig`]
//! - `wireframe-render`: the pipeline stages and [`RasterBuffer`]
//! - this crate: headless entry points and the [`regression`] harness

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod error;
mod headless;
pub mod regression;

pub use error::{Error, Result};
pub use headless::{render, render_model_file, render_to_file};

// Re-export core types
pub use wireframe_core::{
    clamp_pitch, yaw_pitch_rotation, CameraPose, CameraRig, DMat3, DVec3, Edge, I64Vec2, IVec2,
    Intrinsics, LocalDirection, Model, RenderConfig, WireframeError,
};

// Re-export render types
pub use wireframe_render::{
    decode_png, encode_png, load_image, project_point, project_points, rasterize_wireframe,
    render_wireframe, save_image, to_camera_space, world_to_camera, ProjectedPoint,
    RasterBuffer, RenderError, BACKGROUND, LINE_COLOR,
};

/// Initializes `env_logger` from `RUST_LOG`.
///
/// Safe to call more than once; later calls do nothing.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
