// Closed curve math: the tunnel path and its local coordinate frames.
//
// The curve is a uniform Catmull-Rom spline through a fixed set of control
// points, closed by wrapping segment indices. Everything here is pure and
// host-testable; the renderer and scene builder consume it.

use super::constants::FRAME_EPSILON;
use glam::Vec3;

/// Wrap a curve parameter into [0, 1). Handles negative inputs and the
/// floating-point edge where `u - u.floor()` rounds up to exactly 1.0.
#[inline]
pub fn wrap_unit(u: f32) -> f32 {
    let w = u - u.floor();
    if w >= 1.0 {
        0.0
    } else {
        w
    }
}

/// An immutable periodic 3D path parametrized by `u` in [0, 1).
///
/// `point_at(0.0)` and `point_at(1.0)` coincide by construction.
pub struct ClosedCurve {
    points: Vec<Vec3>,
}

impl ClosedCurve {
    pub fn new(points: Vec<Vec3>) -> Self {
        assert!(points.len() >= 3, "closed curve needs at least 3 points");
        Self { points }
    }

    /// The default tunnel path: control points on a circle of `radius` with a
    /// doubled-frequency vertical wobble.
    pub fn tunnel_path(control_points: usize, radius: f32) -> Self {
        let mut points = Vec::with_capacity(control_points);
        for i in 0..control_points {
            let angle = i as f32 / control_points as f32 * std::f32::consts::TAU;
            points.push(Vec3::new(
                radius * angle.cos(),
                (angle * 2.0).sin() * radius * 0.5,
                radius * angle.sin(),
            ));
        }
        Self::new(points)
    }

    pub fn control_points(&self) -> &[Vec3] {
        &self.points
    }

    pub fn point_at(&self, u: f32) -> Vec3 {
        let n = self.points.len();
        let t = wrap_unit(u) * n as f32;
        let seg = (t.floor() as usize).min(n - 1);
        let local = t - t.floor();
        let p0 = self.points[(seg + n - 1) % n];
        let p1 = self.points[seg];
        let p2 = self.points[(seg + 1) % n];
        let p3 = self.points[(seg + 2) % n];
        catmull_rom(p0, p1, p2, p3, local)
    }

    /// Unit tangent via a centered finite difference. A degenerate curve
    /// (coincident points) yields a fixed +X tangent rather than NaN.
    pub fn tangent_at(&self, u: f32) -> Vec3 {
        let ahead = self.point_at(u + FRAME_EPSILON);
        let behind = self.point_at(u - FRAME_EPSILON);
        let d = ahead - behind;
        if d.length_squared() == 0.0 {
            Vec3::X
        } else {
            d.normalize()
        }
    }
}

#[inline]
fn catmull_rom(p0: Vec3, p1: Vec3, p2: Vec3, p3: Vec3, t: f32) -> Vec3 {
    let t2 = t * t;
    let t3 = t2 * t;
    ((p1 * 2.0)
        + (p2 - p0) * t
        + (p0 * 2.0 - p1 * 5.0 + p2 * 4.0 - p3) * t2
        + (p1 * 3.0 - p2 * 3.0 + p3 - p0) * t3)
        * 0.5
}

/// Orthonormal basis at a point on the curve, used to place objects around
/// the tube cross-section.
#[derive(Clone, Copy, Debug)]
pub struct LocalFrame {
    pub tangent: Vec3,
    pub normal: Vec3,
    pub binormal: Vec3,
}

/// Compute the local frame at `u` by comparing the tangent against the
/// tangent a small step ahead. Near-parallel tangents (straight or degenerate
/// regions) fall back to a fixed axis so no NaN ever leaves this function.
pub fn frame_at(curve: &ClosedCurve, u: f32) -> LocalFrame {
    let tangent = curve.tangent_at(u);
    let next_tangent = curve.tangent_at(wrap_unit(u + FRAME_EPSILON));

    let cross = tangent.cross(next_tangent);
    let binormal = if cross.length_squared() == 0.0 {
        // fallback axis, swapped when it would be parallel to the tangent
        if tangent.z.abs() > 0.9 {
            Vec3::X
        } else {
            Vec3::Z
        }
    } else {
        cross.normalize()
    };
    let normal = binormal.cross(tangent).normalize();
    // Re-derive the binormal so the basis is orthogonal even when the
    // fallback axis was not quite perpendicular to the tangent.
    let binormal = tangent.cross(normal).normalize();

    LocalFrame {
        tangent,
        normal,
        binormal,
    }
}
