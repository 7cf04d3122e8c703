//! Pinhole camera intrinsics.

use glam::{DMat3, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// A 3x3 pinhole intrinsics matrix.
///
/// Matrices built by [`Intrinsics::from_focal_length`] have the form
///
/// ```text
/// [ f   0  cx ]
/// [ 0  -f  cy ]
/// [ 0   0   1 ]
/// ```
///
/// The negated vertical focal term maps the camera's +y (up) onto decreasing
/// image rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Intrinsics {
    matrix: DMat3,
}

impl Intrinsics {
    /// Builds intrinsics with the principal point at the image center.
    ///
    /// `focal_length` is in pixels. Callers must pass a positive focal length
    /// and positive dimensions; other values produce a meaningless matrix.
    pub fn from_focal_length(focal_length: f64, image_width: u32, image_height: u32) -> Self {
        let cx = f64::from(image_width) / 2.0;
        let cy = f64::from(image_height) / 2.0;
        Self {
            matrix: DMat3::from_cols(
                DVec3::new(focal_length, 0.0, 0.0),
                DVec3::new(0.0, -focal_length, 0.0),
                DVec3::new(cx, cy, 1.0),
            ),
        }
    }

    /// Wraps an arbitrary intrinsics matrix.
    pub const fn from_matrix(matrix: DMat3) -> Self {
        Self { matrix }
    }

    /// Returns the underlying matrix.
    pub fn matrix(&self) -> DMat3 {
        self.matrix
    }

    /// Horizontal focal length in pixels.
    pub fn focal_length(&self) -> f64 {
        self.matrix.x_axis.x
    }

    /// Principal point in pixels.
    pub fn principal_point(&self) -> DVec2 {
        self.matrix.z_axis.truncate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_focal_length() {
        let k = Intrinsics::from_focal_length(500.0, 512, 384);
        let m = k.matrix();
        // Rows of the matrix
        assert_eq!(m.row(0), DVec3::new(500.0, 0.0, 256.0));
        assert_eq!(m.row(1), DVec3::new(0.0, -500.0, 192.0));
        assert_eq!(m.row(2), DVec3::new(0.0, 0.0, 1.0));
        assert_eq!(k.focal_length(), 500.0);
        assert_eq!(k.principal_point(), DVec2::new(256.0, 192.0));
    }

    #[test]
    fn test_odd_dimensions_keep_half_pixel_center() {
        let k = Intrinsics::from_focal_length(100.0, 511, 3);
        assert_eq!(k.principal_point(), DVec2::new(255.5, 1.5));
    }
}
