//! Camera pose (rotation and position in world space).

use std::f64::consts::FRAC_PI_2;

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// Placement of a camera in world space.
///
/// The columns of `rotation` are the camera's right, up and forward axes
/// expressed in world coordinates, so multiplying a camera-space direction by
/// it yields a world-space direction. `translation` is the camera position.
///
/// The rotation is expected to be a proper rotation (orthonormal, determinant
/// +1). Nothing in the pipeline checks this; use
/// [`CameraPose::is_proper_rotation`] at the boundary where poses are built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    /// Camera axes in world coordinates.
    pub rotation: DMat3,
    /// Camera position in world coordinates.
    pub translation: DVec3,
}

impl CameraPose {
    /// Creates a pose from a rotation and a translation.
    pub const fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// A camera at the origin aligned with the world axes.
    pub const IDENTITY: Self = Self::new(DMat3::IDENTITY, DVec3::ZERO);

    /// Creates a pose from yaw and pitch angles (radians) and a position.
    pub fn from_yaw_pitch(yaw: f64, pitch: f64, translation: DVec3) -> Self {
        Self::new(yaw_pitch_rotation(yaw, pitch), translation)
    }

    /// Creates a pose with no rotation at the given position.
    pub fn from_translation(translation: DVec3) -> Self {
        Self::new(DMat3::IDENTITY, translation)
    }

    /// Returns true if the rotation is orthonormal with determinant +1,
    /// within `tolerance`.
    pub fn is_proper_rotation(&self, tolerance: f64) -> bool {
        let gram = self.rotation.transpose() * self.rotation;
        gram.abs_diff_eq(DMat3::IDENTITY, tolerance)
            && (self.rotation.determinant() - 1.0).abs() <= tolerance
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Builds the rotation `Yaw(yaw) * Pitch(pitch)`.
///
/// Yaw turns about the world +y axis, pitch about the camera's +x axis.
/// Both angles are in radians.
pub fn yaw_pitch_rotation(yaw: f64, pitch: f64) -> DMat3 {
    DMat3::from_rotation_y(yaw) * DMat3::from_rotation_x(pitch)
}

/// Clamps a pitch angle to `[-pi/2, pi/2]`.
pub fn clamp_pitch(pitch: f64) -> f64 {
    pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
}
