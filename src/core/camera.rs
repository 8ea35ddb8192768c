// Scroll-driven progression along the tunnel curve.
//
// Wheel input accumulates into an unbounded target; the published position
// chases it with exponential smoothing and is wrapped into [0, 1) at the
// accessor so callers never see an out-of-range parameter. The last accepted
// delta doubles as a "speed" signal that decays every frame and drives the
// radial blur and color lightness.

use super::constants::{
    BLUR_STRENGTH_GAIN, CAMERA_LOOKAHEAD, POSITION_SMOOTHING, SCROLL_DELTA_MAX,
    SCROLL_MIN_INTERVAL_MS, SPEED_BOOST_GAIN, VELOCITY_DECAY,
};
use super::curve::{wrap_unit, ClosedCurve};
use glam::Vec3;

pub struct CameraProgression {
    scroll_accum: f32,
    smoothed: f32,
    last_velocity: f32,
    last_scroll_ms: f64,
}

impl Default for CameraProgression {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraProgression {
    pub fn new() -> Self {
        Self {
            scroll_accum: 0.0,
            smoothed: 0.0,
            last_velocity: 0.0,
            last_scroll_ms: f64::NEG_INFINITY,
        }
    }

    /// Feed one scroll event. Events arriving within the rate-limit window of
    /// the previously accepted one are dropped (the accumulator is left
    /// untouched). The delta is clamped to +/-`SCROLL_DELTA_MAX` before
    /// accumulating. Returns whether the event was accepted.
    pub fn on_scroll(&mut self, delta: f32, now_ms: f64) -> bool {
        if now_ms - self.last_scroll_ms < SCROLL_MIN_INTERVAL_MS {
            return false;
        }
        self.last_scroll_ms = now_ms;
        let clamped = delta.clamp(-SCROLL_DELTA_MAX, SCROLL_DELTA_MAX);
        self.scroll_accum += clamped;
        self.last_velocity = clamped;
        true
    }

    /// Once-per-frame update: chase the accumulator and decay the velocity.
    pub fn update(&mut self) {
        self.smoothed += (self.scroll_accum - self.smoothed) * POSITION_SMOOTHING;
        self.last_velocity *= VELOCITY_DECAY;
    }

    /// Current position along the curve, always in [0, 1).
    pub fn position(&self) -> f32 {
        wrap_unit(self.smoothed)
    }

    /// Camera placement: eye on the curve, looking a short way ahead.
    pub fn camera_pose(&self, curve: &ClosedCurve) -> (Vec3, Vec3) {
        let eye = curve.point_at(self.position());
        let look_at = curve.point_at(wrap_unit(self.position() + CAMERA_LOOKAHEAD));
        (eye, look_at)
    }

    /// Magnitude of the decaying velocity signal.
    pub fn speed(&self) -> f32 {
        self.last_velocity.abs()
    }

    pub fn blur_strength(&self) -> f32 {
        self.speed() * BLUR_STRENGTH_GAIN
    }

    /// Velocity normalized by the clamp bound, scaled into a lightness boost.
    pub fn speed_boost(&self) -> f32 {
        (self.speed() / SCROLL_DELTA_MAX) * SPEED_BOOST_GAIN
    }
}
