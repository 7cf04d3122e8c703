//! Rendering pipeline for wireframe-rs.
//!
//! The pipeline runs in three stages, each a pure function of its inputs:
//!
//! 1. [`to_camera_space`] moves world-space vertices into the camera frame.
//! 2. [`project_points`] maps camera-space points to pixels, marking points at
//!    or behind the camera plane as [`ProjectedPoint::Absent`].
//! 3. [`rasterize_wireframe`] draws every fully visible edge into a fresh
//!    [`RasterBuffer`].
//!
//! [`render_wireframe`] chains the three.

// Internal functions don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
// Pixel coordinates move between i64, i32, u32 and f64
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod camera_space;
pub mod error;
pub mod pipeline;
pub mod projection;
pub mod raster;
pub mod screenshot;

pub use camera_space::{to_camera_space, world_to_camera};
pub use error::{RenderError, RenderResult};
pub use pipeline::render_wireframe;
pub use projection::{project_point, project_points, ProjectedPoint};
pub use raster::{rasterize_wireframe, RasterBuffer, BACKGROUND, LINE_COLOR};
pub use screenshot::{decode_png, encode_png, load_image, save_image};
