// Dynamic scene entities: moving shapes, neon billboard planes and the
// particle field, plus the per-frame animation that drives them.
//
// Construction is deterministic given the injected random source, so tests
// can seed a `StdRng` and assert exact placement. Texture assets are
// referenced by index only; the renderer decides what an index looks like.

use super::constants::{
    MOVING_SHAPE_COUNT, NEON_PLANE_COUNT, NEON_PLANE_RING_RADIUS, PARTICLE_COUNT,
    PARTICLE_CUBE_SIZE, PLANE_PULSE_GAIN, SHAPE_LIGHTNESS, SHAPE_RADIUS_JITTER, SHAPE_SPIN_MIN,
    SHAPE_SPIN_SPAN,
};
use super::curve::ClosedCurve;
use super::tunnel::surface_point;
use glam::{Mat3, Quat, Vec3};
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Box,
    Icosahedron,
}

/// A small wireframe solid drifting inside the tube, spinning about a fixed
/// per-entity axis.
pub struct MovingShape {
    pub position: Vec3,
    pub rotation: Quat,
    pub axis: Vec3,
    pub angular_speed: f32,
    pub kind: ShapeKind,
}

/// A glowing billboard pinned to the tube wall, always re-oriented to face
/// the camera.
pub struct NeonPlane {
    pub position: Vec3,
    pub facing: Quat,
    pub scale: f32,
    pub texture_index: usize,
}

pub struct SceneAnimationState {
    pub moving: Vec<MovingShape>,
    pub planes: Vec<NeonPlane>,
    pub particles: Vec<Vec3>,
    pub shape_color: [f32; 3],
    pub particle_color: [f32; 3],
}

impl SceneAnimationState {
    /// Build the full entity set once at startup. Shape placement draws
    /// (u, angle, radius-jitter) triples; planes are spaced evenly in u with
    /// a random cross-section angle; particles fill a cube independent of
    /// the curve.
    pub fn build(
        curve: &ClosedCurve,
        radius: f32,
        texture_count: usize,
        rng: &mut impl Rng,
    ) -> Self {
        let mut moving = Vec::with_capacity(MOVING_SHAPE_COUNT);
        for _ in 0..MOVING_SHAPE_COUNT {
            let u = rng.gen::<f32>();
            let v = rng.gen::<f32>() * TAU;
            let r = radius + (rng.gen::<f32>() - 0.5) * SHAPE_RADIUS_JITTER;
            let axis = random_unit_axis(rng);
            let angular_speed = SHAPE_SPIN_MIN + rng.gen::<f32>() * SHAPE_SPIN_SPAN;
            let kind = if rng.gen::<f32>() > 0.5 {
                ShapeKind::Box
            } else {
                ShapeKind::Icosahedron
            };
            moving.push(MovingShape {
                position: surface_point(curve, u, v, r),
                rotation: Quat::IDENTITY,
                axis,
                angular_speed,
                kind,
            });
        }

        let mut planes = Vec::with_capacity(NEON_PLANE_COUNT);
        for i in 0..NEON_PLANE_COUNT {
            let u = i as f32 / NEON_PLANE_COUNT as f32;
            let v = rng.gen::<f32>() * TAU;
            planes.push(NeonPlane {
                position: surface_point(curve, u, v, NEON_PLANE_RING_RADIUS),
                facing: Quat::IDENTITY,
                scale: 1.0,
                texture_index: i % texture_count.max(1),
            });
        }

        let mut particles = Vec::with_capacity(PARTICLE_COUNT);
        for _ in 0..PARTICLE_COUNT {
            particles.push(Vec3::new(
                (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
                (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
                (rng.gen::<f32>() - 0.5) * PARTICLE_CUBE_SIZE,
            ));
        }

        Self {
            moving,
            planes,
            particles,
            shape_color: [0.0, 1.0, 1.0],
            particle_color: [1.0, 1.0, 1.0],
        }
    }

    /// Accumulate each shape's rotation about its own axis (object space, so
    /// spin never resets or re-aligns).
    pub fn animate_moving(&mut self) {
        for shape in &mut self.moving {
            let step = Quat::from_axis_angle(shape.axis, shape.angular_speed);
            shape.rotation = (shape.rotation * step).normalize();
        }
    }

    /// Re-orient every plane to face the camera. Runs every frame; billboards
    /// must track the viewer no matter how the camera moves.
    pub fn animate_billboards(&mut self, camera_position: Vec3) {
        for plane in &mut self.planes {
            plane.facing = face_towards(plane.position, camera_position);
        }
    }

    /// Recolor shape and particle materials. Shapes keep a fixed lightness;
    /// particles brighten with camera speed.
    pub fn update_colors(&mut self, hue: f32, lightness: f32) {
        self.shape_color = hsl_to_rgb(hue, 1.0, SHAPE_LIGHTNESS);
        self.particle_color = hsl_to_rgb(hue, 1.0, lightness);
    }

    /// Pulse the billboard planes with mid-frequency energy.
    pub fn apply_audio_pulse(&mut self, mid_energy: f32) {
        let scale = 1.0 + mid_energy * PLANE_PULSE_GAIN;
        for plane in &mut self.planes {
            plane.scale = scale;
        }
    }
}

fn random_unit_axis(rng: &mut impl Rng) -> Vec3 {
    let v = Vec3::new(rng.gen::<f32>(), rng.gen::<f32>(), rng.gen::<f32>());
    if v.length_squared() == 0.0 {
        Vec3::Y
    } else {
        v.normalize()
    }
}

/// Orientation turning an entity's +Z axis toward `target` (mesh look-at
/// semantics). Identity when the two points coincide.
pub fn face_towards(position: Vec3, target: Vec3) -> Quat {
    let forward = target - position;
    if forward.length_squared() == 0.0 {
        return Quat::IDENTITY;
    }
    let z = forward.normalize();
    let reference_up = if z.dot(Vec3::Y).abs() > 0.999 {
        Vec3::X
    } else {
        Vec3::Y
    };
    let x = reference_up.cross(z).normalize();
    let y = z.cross(x);
    Quat::from_mat3(&Mat3::from_cols(x, y, z))
}

/// HSL to linear-ish RGB with components in [0, 1]; hue wraps, saturation and
/// lightness are used as-is.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [f32; 3] {
    let h = h - h.floor();
    let l = l.clamp(0.0, 1.0);
    if s <= 0.0 {
        return [l, l, l];
    }
    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;
    [
        hue_channel(p, q, h + 1.0 / 3.0),
        hue_channel(p, q, h),
        hue_channel(p, q, h - 1.0 / 3.0),
    ]
}

fn hue_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}
