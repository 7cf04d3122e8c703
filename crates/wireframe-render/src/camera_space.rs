//! World-to-camera transform.

use glam::DVec3;
use wireframe_core::CameraPose;

/// Expresses a world-space point in the camera's frame: `R^T * (v - t)`.
///
/// The transpose stands in for the inverse, which only holds for a proper
/// rotation. The pose is not checked.
#[inline]
pub fn world_to_camera(pose: &CameraPose, vertex: DVec3) -> DVec3 {
    pose.rotation.transpose() * (vertex - pose.translation)
}

/// Transforms every vertex into camera space, preserving order.
pub fn to_camera_space(vertices: &[DVec3], pose: &CameraPose) -> Vec<DVec3> {
    let inverse_rotation = pose.rotation.transpose();
    vertices
        .iter()
        .map(|&v| inverse_rotation * (v - pose.translation))
        .collect()
}
