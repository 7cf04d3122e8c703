//! Stepwise camera navigation.

use std::f64::consts::PI;

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::{clamp_pitch, CameraPose, Intrinsics};

/// Distance moved per translation step, in world units.
pub const TRANSLATION_STEP: f64 = 0.2;

/// Angle turned per rotation step (10 degrees).
pub const ROTATION_STEP: f64 = PI / 18.0;

/// Focal length multiplier per zoom step.
pub const FOCAL_FACTOR: f64 = 1.1;

/// Direction of travel relative to the camera's own axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalDirection {
    Right,
    Left,
    Up,
    Down,
    Forward,
    Backward,
}

impl LocalDirection {
    /// Returns the unit vector for this direction in camera space.
    #[must_use]
    pub fn to_dvec3(self) -> DVec3 {
        match self {
            LocalDirection::Right => DVec3::X,
            LocalDirection::Left => DVec3::NEG_X,
            LocalDirection::Up => DVec3::Y,
            LocalDirection::Down => DVec3::NEG_Y,
            LocalDirection::Forward => DVec3::Z,
            LocalDirection::Backward => DVec3::NEG_Z,
        }
    }
}

/// A camera described by yaw, pitch, position and focal length.
///
/// The rig is the editable form of a camera; [`CameraRig::pose`] and
/// [`CameraRig::intrinsics`] produce the values the pipeline consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRig {
    /// Rotation about the world up axis, in radians.
    pub yaw: f64,
    /// Rotation about the camera right axis, in radians.
    pub pitch: f64,
    /// Camera position in world space.
    pub translation: DVec3,
    /// Focal length in pixels.
    pub focal_length: f64,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            yaw: 0.0,
            pitch: 0.0,
            translation: DVec3::new(0.0, 0.0, -5.0),
            focal_length: 500.0,
        }
    }
}

impl CameraRig {
    /// Returns the camera pose for the current yaw, pitch and position.
    pub fn pose(&self) -> CameraPose {
        CameraPose::from_yaw_pitch(self.yaw, self.pitch, self.translation)
    }

    /// Returns intrinsics for the current focal length and the given image size.
    pub fn intrinsics(&self, image_width: u32, image_height: u32) -> Intrinsics {
        Intrinsics::from_focal_length(self.focal_length, image_width, image_height)
    }

    /// Moves `steps` translation steps along one of the camera's own axes.
    /// Negative steps move the opposite way.
    pub fn move_local(&mut self, direction: LocalDirection, steps: i32) {
        let world_dir = self.pose().rotation * direction.to_dvec3();
        self.translation += world_dir * (TRANSLATION_STEP * f64::from(steps));
    }

    /// Turns by whole rotation steps. Pitch stays within `[-pi/2, pi/2]`.
    pub fn turn(&mut self, yaw_steps: i32, pitch_steps: i32) {
        self.yaw += ROTATION_STEP * f64::from(yaw_steps);
        self.pitch = clamp_pitch(self.pitch + ROTATION_STEP * f64::from(pitch_steps));
    }

    /// Scales the focal length by [`FOCAL_FACTOR`] per step; negative steps zoom out.
    pub fn zoom(&mut self, steps: i32) {
        self.focal_length *= FOCAL_FACTOR.powi(steps);
    }
}
