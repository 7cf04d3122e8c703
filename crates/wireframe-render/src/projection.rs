//! Perspective projection of camera-space points onto the image plane.

use glam::{DVec3, I64Vec2};
use serde::{Deserialize, Serialize};
use wireframe_core::Intrinsics;

/// The image of a camera-space point.
///
/// Coordinates are 64-bit so points close to the camera plane keep their
/// exact truncated position far outside any image. Serialized as `[u, v]`
/// when present and `null` when absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<[i64; 2]>", into = "Option<[i64; 2]>")]
pub enum ProjectedPoint {
    /// Integer pixel coordinates on the (unbounded) image plane.
    Present { u: i64, v: i64 },
    /// The point lies on or behind the camera plane (z <= 0).
    Absent,
}

impl ProjectedPoint {
    /// Returns the pixel if the point is present.
    pub fn pixel(&self) -> Option<I64Vec2> {
        match *self {
            ProjectedPoint::Present { u, v } => Some(I64Vec2::new(u, v)),
            ProjectedPoint::Absent => None,
        }
    }

    /// Returns true if the point is present.
    pub fn is_present(&self) -> bool {
        matches!(self, ProjectedPoint::Present { .. })
    }
}

impl From<Option<[i64; 2]>> for ProjectedPoint {
    fn from(value: Option<[i64; 2]>) -> Self {
        match value {
            Some([u, v]) => ProjectedPoint::Present { u, v },
            None => ProjectedPoint::Absent,
        }
    }
}

impl From<ProjectedPoint> for Option<[i64; 2]> {
    fn from(point: ProjectedPoint) -> Self {
        point.pixel().map(|p| p.to_array())
    }
}

/// Projects a single camera-space point.
///
/// Points with `z <= 0` are [`ProjectedPoint::Absent`]; this also guarantees
/// the perspective divide never sees a zero depth. Pixel coordinates are
/// truncated toward zero, not rounded. Only quotients beyond the `i64` range
/// (a depth some 1e-16 of the lateral offset) saturate.
#[inline]
pub fn project_point(point: DVec3, intrinsics: &Intrinsics) -> ProjectedPoint {
    if point.z <= 0.0 {
        return ProjectedPoint::Absent;
    }
    let q = intrinsics.matrix() * point;
    ProjectedPoint::Present {
        u: (q.x / q.z) as i64,
        v: (q.y / q.z) as i64,
    }
}

/// Projects every camera-space point, preserving order.
pub fn project_points(points: &[DVec3], intrinsics: &Intrinsics) -> Vec<ProjectedPoint> {
    points
        .iter()
        .map(|&p| project_point(p, intrinsics))
        .collect()
}
