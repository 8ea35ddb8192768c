// Tube grid geometry: the glowing wireframe the camera flies through.

use super::curve::{frame_at, ClosedCurve};
use glam::Vec3;
use std::f32::consts::TAU;

/// Position on the tube surface at curve parameter `u` and cross-section
/// angle `v`, offset `r` from the curve centerline.
#[inline]
pub fn surface_point(curve: &ClosedCurve, u: f32, v: f32, r: f32) -> Vec3 {
    let frame = frame_at(curve, u);
    let cx = -r * v.cos();
    let cy = r * v.sin();
    curve.point_at(u) + frame.normal * cx + frame.binormal * cy
}

/// Line-list vertices for the tunnel's quad grid: rails running along the
/// tube plus rings around each cross-section. Consecutive vertex pairs form
/// one segment.
pub fn grid_line_vertices(
    curve: &ClosedCurve,
    radius: f32,
    tubular_segments: usize,
    radial_segments: usize,
) -> Vec<Vec3> {
    let stride = radial_segments + 1;
    let mut ring_points = Vec::with_capacity((tubular_segments + 1) * stride);
    for i in 0..=tubular_segments {
        let u = i as f32 / tubular_segments as f32;
        for j in 0..=radial_segments {
            let v = j as f32 / radial_segments as f32 * TAU;
            ring_points.push(surface_point(curve, u, v, radius));
        }
    }

    let mut lines =
        Vec::with_capacity(2 * (tubular_segments * stride + (tubular_segments + 1) * radial_segments));
    // rails: connect matching cross-section points of adjacent rings
    for i in 0..tubular_segments {
        for j in 0..=radial_segments {
            lines.push(ring_points[i * stride + j]);
            lines.push(ring_points[(i + 1) * stride + j]);
        }
    }
    // rings: connect neighbours within each cross-section
    for i in 0..=tubular_segments {
        for j in 0..radial_segments {
            lines.push(ring_points[i * stride + j]);
            lines.push(ring_points[i * stride + j + 1]);
        }
    }
    lines
}
