// Host-side tests for the curve and tube geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod tunnel_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod curve {
        include!("../src/core/curve.rs");
    }
    pub mod tunnel {
        include!("../src/core/tunnel.rs");
    }
}

use glam::Vec3;
use tunnel_core::constants::*;
use tunnel_core::curve::*;
use tunnel_core::tunnel::*;

fn tunnel() -> ClosedCurve {
    ClosedCurve::tunnel_path(PATH_CONTROL_POINTS, PATH_RADIUS)
}

#[test]
fn wrap_unit_stays_in_range() {
    for u in [-3.7_f32, -1.0, -0.25, 0.0, 0.5, 1.0, 1.25, 42.9] {
        let w = wrap_unit(u);
        assert!((0.0..1.0).contains(&w), "wrap_unit({u}) = {w}");
    }
    assert_eq!(wrap_unit(1.0), 0.0);
    assert_eq!(wrap_unit(-1.0), 0.0);
    // tiny negative values round up to exactly 1.0 in f32; the guard must
    // fold that back to 0
    let w = wrap_unit(-1e-9);
    assert!((0.0..1.0).contains(&w));
}

#[test]
fn curve_is_periodic() {
    let curve = tunnel();
    let a = curve.point_at(0.0);
    let b = curve.point_at(1.0);
    assert!(a.distance(b) < 1e-4, "endpoints differ: {a:?} vs {b:?}");
    let c = curve.point_at(0.3);
    let d = curve.point_at(1.3);
    assert!(c.distance(d) < 1e-4);
}

#[test]
fn curve_interpolates_control_points() {
    let curve = tunnel();
    let n = curve.control_points().len();
    for (i, &p) in curve.control_points().iter().enumerate() {
        let u = i as f32 / n as f32;
        assert!(curve.point_at(u).distance(p) < 1e-4);
    }
}

#[test]
fn circle_tangent_is_perpendicular_to_radius() {
    // control points on a flat circle: at each control point the Catmull-Rom
    // tangent is symmetric, hence perpendicular to the radius
    let n = 8;
    let points: Vec<Vec3> = (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            Vec3::new(a.cos(), 0.0, a.sin())
        })
        .collect();
    let curve = ClosedCurve::new(points);
    for i in 0..n {
        let u = i as f32 / n as f32;
        let radial = curve.point_at(u).normalize();
        let tangent = curve.tangent_at(u);
        assert!(
            radial.dot(tangent).abs() < 1e-3,
            "tangent not perpendicular at u={u}"
        );
    }
}

#[test]
fn quarter_turn_tangents_are_perpendicular() {
    let n = 8;
    let points: Vec<Vec3> = (0..n)
        .map(|i| {
            let a = i as f32 / n as f32 * std::f32::consts::TAU;
            Vec3::new(a.cos(), a.sin(), 0.0)
        })
        .collect();
    let curve = ClosedCurve::new(points);
    let t0 = curve.tangent_at(0.0);
    let t_quarter = curve.tangent_at(0.25);
    assert!(t0.dot(t_quarter).abs() < 1e-3);
}

#[test]
fn frames_are_orthonormal_along_tunnel() {
    let curve = tunnel();
    for i in 0..100 {
        let u = i as f32 / 100.0;
        let f = frame_at(&curve, u);
        assert!((f.tangent.length() - 1.0).abs() < 1e-3, "u={u}");
        assert!((f.normal.length() - 1.0).abs() < 1e-3, "u={u}");
        assert!((f.binormal.length() - 1.0).abs() < 1e-3, "u={u}");
        assert!(f.tangent.dot(f.normal).abs() < 1e-3, "u={u}");
        assert!(f.tangent.dot(f.binormal).abs() < 1e-3, "u={u}");
        assert!(f.normal.dot(f.binormal).abs() < 1e-3, "u={u}");
    }
}

#[test]
fn degenerate_curve_falls_back_to_fixed_frame() {
    // all control points coincide, so tangents vanish everywhere
    let curve = ClosedCurve::new(vec![Vec3::ONE; 4]);
    let f = frame_at(&curve, 0.5);
    assert!(f.tangent.is_finite());
    assert!(f.normal.is_finite());
    assert!(f.binormal.is_finite());
    assert!((f.tangent.length() - 1.0).abs() < 1e-3);
    assert!((f.normal.length() - 1.0).abs() < 1e-3);
    assert!((f.binormal.length() - 1.0).abs() < 1e-3);
}

#[test]
fn surface_point_sits_at_tube_radius() {
    let curve = tunnel();
    for i in 0..20 {
        let u = i as f32 / 20.0;
        let v = i as f32 * 0.7;
        let p = surface_point(&curve, u, v, TUNNEL_RADIUS);
        let d = p.distance(curve.point_at(u));
        assert!(
            (d - TUNNEL_RADIUS).abs() < 1e-3,
            "offset {d} at u={u}, v={v}"
        );
    }
}

#[test]
fn grid_vertex_count_matches_segments() {
    let curve = tunnel();
    let lines = grid_line_vertices(&curve, TUNNEL_RADIUS, TUBULAR_SEGMENTS, RADIAL_SEGMENTS);
    let rails = TUBULAR_SEGMENTS * (RADIAL_SEGMENTS + 1);
    let rings = (TUBULAR_SEGMENTS + 1) * RADIAL_SEGMENTS;
    assert_eq!(lines.len(), 2 * (rails + rings));
    assert_eq!(lines.len() % 2, 0);
}
