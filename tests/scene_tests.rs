// Host-side tests for scene construction and per-frame animation.

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
    pub mod scene {
        include!("../src/core/scene.rs");
    }
}

use glam::{Quat, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tunnel_core::constants::*;
use tunnel_core::curve::ClosedCurve;
use tunnel_core::scene::*;

fn build_scene(seed: u64) -> SceneAnimationState {
    let curve = ClosedCurve::tunnel_path(PATH_CONTROL_POINTS, PATH_RADIUS);
    let mut rng = StdRng::seed_from_u64(seed);
    SceneAnimationState::build(&curve, TUNNEL_RADIUS, NEON_TEXTURE_COUNT, &mut rng)
}

#[test]
fn population_counts_are_fixed() {
    let scene = build_scene(7);
    assert_eq!(scene.moving.len(), MOVING_SHAPE_COUNT);
    assert_eq!(scene.planes.len(), NEON_PLANE_COUNT);
    assert_eq!(scene.particles.len(), PARTICLE_COUNT);
}

#[test]
fn construction_is_deterministic_for_a_seed() {
    let a = build_scene(42);
    let b = build_scene(42);
    for (x, y) in a.moving.iter().zip(&b.moving) {
        assert_eq!(x.position, y.position);
        assert_eq!(x.axis, y.axis);
        assert_eq!(x.angular_speed, y.angular_speed);
        assert_eq!(x.kind, y.kind);
    }
    for (x, y) in a.particles.iter().zip(&b.particles) {
        assert_eq!(x, y);
    }
}

#[test]
fn particles_fill_the_cube() {
    let scene = build_scene(3);
    let half = PARTICLE_CUBE_SIZE / 2.0;
    for p in &scene.particles {
        assert!(p.x.abs() <= half && p.y.abs() <= half && p.z.abs() <= half);
    }
}

#[test]
fn shape_spin_rates_are_in_range() {
    let scene = build_scene(11);
    for s in &scene.moving {
        assert!(s.angular_speed >= SHAPE_SPIN_MIN);
        assert!(s.angular_speed <= SHAPE_SPIN_MIN + SHAPE_SPIN_SPAN);
        assert!((s.axis.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn plane_texture_indices_cycle_through_the_set() {
    let scene = build_scene(5);
    for (i, p) in scene.planes.iter().enumerate() {
        assert_eq!(p.texture_index, i % NEON_TEXTURE_COUNT);
    }
}

#[test]
fn shape_rotation_accumulates_about_its_axis() {
    let mut scene = build_scene(9);
    scene.animate_moving();
    for s in &scene.moving {
        // the spin axis stays fixed under the accumulated rotation
        let rotated_axis = s.rotation * s.axis;
        assert!(rotated_axis.distance(s.axis) < 1e-4);
        assert!(s.rotation != Quat::IDENTITY);
    }
    // a second step doubles the angle rather than resetting it
    let first: Vec<Quat> = scene.moving.iter().map(|s| s.rotation).collect();
    scene.animate_moving();
    for (s, f) in scene.moving.iter().zip(&first) {
        assert!(s.rotation != *f);
    }
}

#[test]
fn billboards_face_the_camera() {
    let mut scene = build_scene(2);
    let cam = Vec3::new(3.0, 1.0, -2.0);
    scene.animate_billboards(cam);
    for p in &scene.planes {
        let expected = (cam - p.position).normalize();
        let facing_z = p.facing * Vec3::Z;
        assert!(
            facing_z.distance(expected) < 1e-3,
            "plane does not face camera: {facing_z:?} vs {expected:?}"
        );
    }
}

#[test]
fn audio_pulse_scales_planes() {
    let mut scene = build_scene(1);
    scene.apply_audio_pulse(0.5);
    for p in &scene.planes {
        assert!((p.scale - (1.0 + 0.5 * PLANE_PULSE_GAIN)).abs() < 1e-6);
    }
    scene.apply_audio_pulse(0.0);
    for p in &scene.planes {
        assert!((p.scale - 1.0).abs() < 1e-6);
    }
}

#[test]
fn update_colors_tracks_hue_and_lightness() {
    let mut scene = build_scene(1);
    scene.update_colors(0.0, 0.6);
    // hue 0 at full saturation is red-dominant
    assert!(scene.shape_color[0] > scene.shape_color[1]);
    assert!(scene.shape_color[0] > scene.shape_color[2]);
    scene.update_colors(1.0 / 3.0, 0.6);
    assert!(scene.shape_color[1] > scene.shape_color[0]);
}

#[test]
fn hsl_conversion_anchors() {
    let red = hsl_to_rgb(0.0, 1.0, 0.5);
    assert!((red[0] - 1.0).abs() < 1e-5 && red[1].abs() < 1e-5 && red[2].abs() < 1e-5);
    let green = hsl_to_rgb(1.0 / 3.0, 1.0, 0.5);
    assert!(green[0].abs() < 1e-5 && (green[1] - 1.0).abs() < 1e-5);
    let white = hsl_to_rgb(0.7, 1.0, 1.0);
    for c in white {
        assert!((c - 1.0).abs() < 1e-5);
    }
    let gray = hsl_to_rgb(0.2, 0.0, 0.4);
    for c in gray {
        assert!((c - 0.4).abs() < 1e-5);
    }
    // hue wraps past 1
    let wrapped = hsl_to_rgb(1.25, 1.0, 0.5);
    let same = hsl_to_rgb(0.25, 1.0, 0.5);
    for (a, b) in wrapped.iter().zip(&same) {
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn face_towards_handles_coincident_points() {
    let q = face_towards(Vec3::ONE, Vec3::ONE);
    assert_eq!(q, Quat::IDENTITY);
    // looking straight up exercises the reference-up fallback
    let q = face_towards(Vec3::ZERO, Vec3::Y * 5.0);
    let z = q * Vec3::Z;
    assert!(z.distance(Vec3::Y) < 1e-3);
}
