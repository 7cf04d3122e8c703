//! End-to-end wireframe rendering.

use wireframe_core::{CameraPose, Intrinsics, Model};

use crate::{project_points, rasterize_wireframe, to_camera_space, RasterBuffer};

/// Renders a model as white lines on black, as seen from `pose`.
///
/// Runs [`to_camera_space`], [`project_points`] and [`rasterize_wireframe`]
/// in order. The result depends only on the arguments, so separate calls may
/// run on separate threads.
pub fn render_wireframe(
    model: &Model,
    pose: &CameraPose,
    intrinsics: &Intrinsics,
    image_width: u32,
    image_height: u32,
) -> RasterBuffer {
    let camera_points = to_camera_space(model.vertices(), pose);
    let projected = project_points(&camera_points, intrinsics);
    log::debug!(
        "{} of {} vertices in front of the camera",
        projected.iter().filter(|p| p.is_present()).count(),
        projected.len()
    );
    rasterize_wireframe(&projected, model.edges(), image_width, image_height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LINE_COLOR;
    use glam::DVec3;

    fn unit_square() -> Model {
        Model::closed_loop(vec![
            DVec3::new(-0.5, -0.5, 0.0),
            DVec3::new(0.5, -0.5, 0.0),
            DVec3::new(0.5, 0.5, 0.0),
            DVec3::new(-0.5, 0.5, 0.0),
        ])
    }

    #[test]
    fn test_square_in_front_renders_outline() {
        let pose = CameraPose::from_translation(DVec3::new(0.0, 0.0, -5.0));
        let k = Intrinsics::from_focal_length(500.0, 512, 512);
        let buffer = render_wireframe(&unit_square(), &pose, &k, 512, 512);

        // 101x101 outline
        assert_eq!(buffer.count_lit(), 400);
        for (x, y) in [(206, 206), (306, 206), (306, 306), (206, 306), (256, 206), (306, 256)] {
            assert_eq!(buffer.pixel(x, y), Some(LINE_COLOR.0), "({x}, {y})");
        }
        assert_eq!(buffer.pixel(256, 256), Some([0, 0, 0]));
    }

    #[test]
    fn test_square_behind_camera_renders_nothing() {
        let pose = CameraPose::from_translation(DVec3::new(0.0, 0.0, 5.0));
        let k = Intrinsics::from_focal_length(500.0, 512, 512);
        let buffer = render_wireframe(&unit_square(), &pose, &k, 512, 512);
        assert_eq!(buffer.as_raw().len(), 512 * 512 * 3);
        assert_eq!(buffer.count_lit(), 0);
    }

    #[test]
    fn test_edge_ending_near_camera_plane_keeps_slope() {
        // The far end projects billions of pixels off-screen at slope -1/2.
        let model = Model::polyline(vec![DVec3::new(0.0, 0.0, 1.0), DVec3::new(1.0, 0.5, 1e-7)]);
        let k = Intrinsics::from_focal_length(500.0, 512, 512);
        let buffer = render_wireframe(&model, &CameraPose::IDENTITY, &k, 512, 512);

        assert_eq!(buffer.count_lit(), 256);
        assert_eq!(buffer.pixel(400, 184), Some(LINE_COLOR.0));
        assert_eq!(buffer.pixel(400, 112), Some([0, 0, 0]));
        assert_eq!(buffer.pixel(511, 1), Some([0, 0, 0]));
    }

    #[test]
    fn test_render_is_deterministic() {
        let pose = CameraPose::from_yaw_pitch(-0.15, 0.11, DVec3::new(1.5, 1.0, -5.0));
        let k = Intrinsics::from_focal_length(500.0, 512, 512);
        let first = render_wireframe(&unit_square(), &pose, &k, 512, 512);
        let second = render_wireframe(&unit_square(), &pose, &k, 512, 512);
        assert!(first.count_lit() > 0);
        assert_eq!(first.as_raw(), second.as_raw());
    }
}
