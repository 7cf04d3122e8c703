//! Wireframe rasterization onto an RGB raster buffer.

use glam::{DVec2, I64Vec2, IVec2};
use image::{Rgb, RgbImage};
use wireframe_core::Edge;

use crate::{ProjectedPoint, RenderError, RenderResult};

/// Color of an untouched pixel.
pub const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Color of wireframe lines.
pub const LINE_COLOR: Rgb<u8> = Rgb([255, 255, 255]);

/// An RGB image, `width * height * 3` bytes, rows top to bottom.
///
/// Pixel writes outside the buffer are ignored, and [`RasterBuffer::draw_line`]
/// clips segments to the buffer before stepping along them, so arbitrarily
/// distant endpoints are cheap to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterBuffer {
    image: RgbImage,
}

impl RasterBuffer {
    /// Creates a buffer filled with [`BACKGROUND`].
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::new(width, height),
        }
    }

    /// Wraps an existing image.
    pub fn from_image(image: RgbImage) -> Self {
        Self { image }
    }

    /// Builds a buffer from interleaved RGB bytes, row by row from the top.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> RenderResult<Self> {
        RgbImage::from_raw(width, height, data)
            .map(Self::from_image)
            .ok_or(RenderError::InvalidImageData)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Returns the color at (x, y), or None if out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        self.image.get_pixel_checked(x, y).map(|p| p.0)
    }

    /// Raw interleaved RGB bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Borrows the underlying image.
    pub fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes the buffer, returning the underlying image.
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Number of pixels that differ from [`BACKGROUND`].
    pub fn count_lit(&self) -> usize {
        self.image.pixels().filter(|&&p| p != BACKGROUND).count()
    }

    fn contains(&self, p: IVec2) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width() && (p.y as u32) < self.height()
    }

    fn contains_wide(&self, p: I64Vec2) -> bool {
        (0..i64::from(self.width())).contains(&p.x) && (0..i64::from(self.height())).contains(&p.y)
    }

    /// Sets a pixel. Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, p: IVec2, color: Rgb<u8>) {
        if self.contains(p) {
            self.image.put_pixel(p.x as u32, p.y as u32, color);
        }
    }

    /// Draws a 1-pixel line from `from` to `to`, both endpoints included,
    /// using Bresenham's algorithm.
    ///
    /// Endpoints may lie anywhere on the image plane. A segment with an
    /// endpoint outside the buffer is first clipped to the buffer rectangle
    /// along its exact direction and the clipped endpoints rounded to the
    /// nearest pixel. Segments that lie entirely inside are drawn unmodified.
    pub fn draw_line(&mut self, from: I64Vec2, to: I64Vec2, color: Rgb<u8>) {
        let Some((from, to)) = self.clip_segment(from, to) else {
            return;
        };

        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let sx = if from.x < to.x { 1 } else { -1 };
        let sy = if from.y < to.y { 1 } else { -1 };
        let mut err = dx + dy;
        let mut p = from;

        loop {
            self.set_pixel(p, color);

            if p == to {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                err += dx;
                p.y += sy;
            }
        }
    }

    /// Liang-Barsky clip against `[0, width-1] x [0, height-1]`, narrowing
    /// the result to in-buffer pixels.
    fn clip_segment(&self, a: I64Vec2, b: I64Vec2) -> Option<(IVec2, IVec2)> {
        if self.width() == 0 || self.height() == 0 {
            return None;
        }
        if self.contains_wide(a) && self.contains_wide(b) {
            return Some((a.as_ivec2(), b.as_ivec2()));
        }

        let max = DVec2::new(f64::from(self.width() - 1), f64::from(self.height() - 1));
        let start = a.as_dvec2();
        let delta = b.as_dvec2() - start;

        let mut t0 = 0.0_f64;
        let mut t1 = 1.0_f64;
        let boundaries = [
            (-delta.x, start.x),
            (delta.x, max.x - start.x),
            (-delta.y, start.y),
            (delta.y, max.y - start.y),
        ];
        for (p, q) in boundaries {
            if p == 0.0 {
                if q < 0.0 {
                    return None;
                }
            } else {
                let r = q / p;
                if p < 0.0 {
                    if r > t1 {
                        return None;
                    }
                    t0 = t0.max(r);
                } else {
                    if r < t0 {
                        return None;
                    }
                    t1 = t1.min(r);
                }
            }
        }

        // Endpoints that were not clipped are inside and keep their exact pixel.
        let snap = |t: f64| {
            if t == 0.0 {
                a.as_ivec2()
            } else if t == 1.0 {
                b.as_ivec2()
            } else {
                (start + delta * t).round().clamp(DVec2::ZERO, max).as_ivec2()
            }
        };
        Some((snap(t0), snap(t1)))
    }
}

/// Draws every edge whose endpoints are both present into a fresh buffer.
///
/// Edges touching an absent point are skipped whole. Edges whose indices fall
/// outside `points` are skipped with a warning.
pub fn rasterize_wireframe(
    points: &[ProjectedPoint],
    edges: &[Edge],
    width: u32,
    height: u32,
) -> RasterBuffer {
    let mut buffer = RasterBuffer::new(width, height);
    let mut drawn = 0usize;

    for (i, edge) in edges.iter().enumerate() {
        let (Some(start), Some(end)) = (points.get(edge.start), points.get(edge.end)) else {
            log::warn!(
                "edge {i} ({}, {}) is out of range for {} points; skipping",
                edge.start,
                edge.end,
                points.len()
            );
            continue;
        };
        if let (Some(from), Some(to)) = (start.pixel(), end.pixel()) {
            buffer.draw_line(from, to, LINE_COLOR);
            drawn += 1;
        }
    }

    log::debug!(
        "rasterized {drawn} of {} edges into {width}x{height}",
        edges.len()
    );
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn present(u: i64, v: i64) -> ProjectedPoint {
        ProjectedPoint::Present { u, v }
    }

    fn line(buffer: &mut RasterBuffer, from: (i64, i64), to: (i64, i64)) {
        buffer.draw_line(I64Vec2::new(from.0, from.1), I64Vec2::new(to.0, to.1), LINE_COLOR);
    }

    fn is_lit(buffer: &RasterBuffer, x: u32, y: u32) -> bool {
        buffer.pixel(x, y) == Some(LINE_COLOR.0)
    }

    #[test]
    fn test_new_buffer_is_black() {
        let buffer = RasterBuffer::new(7, 5);
        assert_eq!(buffer.as_raw().len(), 7 * 5 * 3);
        assert!(buffer.as_raw().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_raw_checks_length() {
        let buffer = RasterBuffer::from_raw(2, 1, vec![0, 0, 0, 255, 255, 255]).unwrap();
        assert_eq!(buffer.pixel(1, 0), Some(LINE_COLOR.0));
        assert!(matches!(
            RasterBuffer::from_raw(2, 2, vec![0; 6]),
            Err(RenderError::InvalidImageData)
        ));
    }

    #[test]
    fn test_no_edges_gives_black_buffer() {
        let points = [present(1, 1), present(3, 3)];
        let buffer = rasterize_wireframe(&points, &[], 16, 8);
        assert_eq!(buffer.as_raw().len(), 16 * 8 * 3);
        assert_eq!(buffer.count_lit(), 0);
    }

    #[test]
    fn test_horizontal_and_vertical_lines() {
        let mut buffer = RasterBuffer::new(10, 10);
        line(&mut buffer, (2, 3), (7, 3));
        assert_eq!(buffer.count_lit(), 6);
        assert!((2..=7).all(|x| is_lit(&buffer, x, 3)));

        let mut buffer = RasterBuffer::new(10, 10);
        line(&mut buffer, (4, 8), (4, 1));
        assert_eq!(buffer.count_lit(), 8);
        assert!((1..=8).all(|y| is_lit(&buffer, 4, y)));
    }

    #[test]
    fn test_diagonal_line() {
        let mut buffer = RasterBuffer::new(10, 10);
        line(&mut buffer, (0, 0), (9, 9));
        assert_eq!(buffer.count_lit(), 10);
        assert!((0..10).all(|i| is_lit(&buffer, i, i)));
    }

    #[test]
    fn test_shallow_line_has_one_pixel_per_column() {
        let mut buffer = RasterBuffer::new(20, 10);
        line(&mut buffer, (0, 0), (19, 4));
        assert_eq!(buffer.count_lit(), 20);
        assert!(is_lit(&buffer, 0, 0));
        assert!(is_lit(&buffer, 19, 4));
    }

    #[test]
    fn test_self_loop_draws_single_pixel() {
        let points = [present(5, 5)];
        let buffer = rasterize_wireframe(&points, &[Edge::new(0, 0)], 10, 10);
        assert_eq!(buffer.count_lit(), 1);
        assert!(is_lit(&buffer, 5, 5));
    }

    #[test]
    fn test_edges_with_absent_endpoint_are_skipped() {
        let points = [present(1, 1), ProjectedPoint::Absent, present(8, 1)];
        let edges = [Edge::new(0, 1), Edge::new(1, 2)];
        let buffer = rasterize_wireframe(&points, &edges, 10, 10);
        assert_eq!(buffer.count_lit(), 0);

        let edges = [Edge::new(0, 1), Edge::new(0, 2), Edge::new(2, 1)];
        let with_hidden = rasterize_wireframe(&points, &edges, 10, 10);
        let visible_only = rasterize_wireframe(&points, &edges[1..2], 10, 10);
        assert_eq!(with_hidden, visible_only);
    }

    #[test]
    fn test_out_of_range_edge_is_skipped() {
        let points = [present(1, 1), present(4, 1)];
        let buffer = rasterize_wireframe(&points, &[Edge::new(0, 5), Edge::new(0, 1)], 10, 10);
        assert_eq!(buffer.count_lit(), 4);
    }

    #[test]
    fn test_line_crossing_buffer_is_clipped() {
        let mut buffer = RasterBuffer::new(10, 10);
        line(&mut buffer, (-100, 5), (100, 5));
        assert_eq!(buffer.count_lit(), 10);
        assert!((0..10).all(|x| is_lit(&buffer, x, 5)));
    }

    #[test]
    fn test_line_outside_buffer_draws_nothing() {
        let mut buffer = RasterBuffer::new(10, 10);
        line(&mut buffer, (-5, -5), (20, -1));
        line(&mut buffer, (12, 12), (12, 12));
        assert_eq!(buffer.count_lit(), 0);
    }

    #[test]
    fn test_extreme_coordinates_finish() {
        let mut buffer = RasterBuffer::new(32, 32);
        line(&mut buffer, (-(1 << 50), 16), (1 << 50, 16));
        assert_eq!(buffer.count_lit(), 32);

        let mut buffer = RasterBuffer::new(32, 32);
        line(&mut buffer, (16, 16), (i64::MAX, i64::MAX));
        assert!(is_lit(&buffer, 16, 16));
        assert!(is_lit(&buffer, 31, 31));
    }

    #[test]
    fn test_far_endpoint_keeps_line_slope() {
        // A slope of -1/2 leaving the buffer billions of pixels away, past
        // the range of 32-bit coordinates.
        let points = [present(256, 256), present(5_000_000_256, -2_499_999_744)];
        let buffer = rasterize_wireframe(&points, &[Edge::new(0, 1)], 512, 512);

        assert_eq!(buffer.count_lit(), 256);
        assert!(is_lit(&buffer, 256, 256));
        assert!(is_lit(&buffer, 400, 184));
        assert!(is_lit(&buffer, 511, 128) || is_lit(&buffer, 511, 129));
        assert!(!is_lit(&buffer, 400, 112));
        assert!(!is_lit(&buffer, 511, 1));
    }

    #[test]
    fn test_zero_sized_buffer() {
        let points = [present(0, 0), present(3, 3)];
        let buffer = rasterize_wireframe(&points, &[Edge::new(0, 1)], 0, 0);
        assert!(buffer.as_raw().is_empty());
    }
}
