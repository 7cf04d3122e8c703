//! Core types for wireframe-rs.
//!
//! This crate provides the data shared by every stage of the wireframe pipeline:
//! - [`Model`] and [`Edge`]: world-space vertices plus index pairs connecting them
//! - [`CameraPose`]: camera rotation and position in world space
//! - [`Intrinsics`]: the pinhole projection matrix built from a focal length
//! - [`CameraRig`] and [`RenderConfig`]: serializable camera and image settings

// Internal functions don't need exhaustive error docs
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod error;
pub mod intrinsics;
pub mod model;
pub mod pose;
pub mod rig;

pub use config::RenderConfig;
pub use error::{Result, WireframeError};
pub use intrinsics::Intrinsics;
pub use model::{Edge, Model};
pub use pose::{clamp_pitch, yaw_pitch_rotation, CameraPose};
pub use rig::{CameraRig, LocalDirection};

// Re-export glam types for convenience
pub use glam::{DMat3, DVec3, I64Vec2, IVec2};
