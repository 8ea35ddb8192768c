// Shared visual/audio tuning constants for the tunnel visualizer core.

// Scroll input and camera progression.
// SCROLL_DELTA_MAX is both the per-event clamp and the speed-boost
// normalizer; keeping them one constant stops the scaling drifting apart.
pub const SCROLL_DELTA_MAX: f32 = 0.1;
pub const SCROLL_MIN_INTERVAL_MS: f64 = 50.0;
pub const WHEEL_DELTA_SCALE: f32 = 0.0001;
pub const POSITION_SMOOTHING: f32 = 0.02; // fraction of remaining distance per frame
pub const VELOCITY_DECAY: f32 = 0.9; // per-frame multiplicative decay
pub const CAMERA_LOOKAHEAD: f32 = 0.01; // curve-u offset for the look-at point
pub const BLUR_STRENGTH_GAIN: f32 = 7.0;
pub const SPEED_BOOST_GAIN: f32 = 0.25;

// Finite-difference step for curve frames.
pub const FRAME_EPSILON: f32 = 1e-4;

// Tunnel path and tube grid.
pub const PATH_CONTROL_POINTS: usize = 6;
pub const PATH_RADIUS: f32 = 10.0;
pub const TUNNEL_RADIUS: f32 = 0.5;
pub const TUBULAR_SEGMENTS: usize = 80;
pub const RADIAL_SEGMENTS: usize = 8;

// Scene population (fixed for the session).
pub const MOVING_SHAPE_COUNT: usize = 30;
pub const SHAPE_RADIUS_JITTER: f32 = 0.5;
pub const SHAPE_SPIN_MIN: f32 = 0.01; // radians per frame
pub const SHAPE_SPIN_SPAN: f32 = 0.02;
pub const NEON_PLANE_COUNT: usize = 12;
pub const NEON_PLANE_RING_RADIUS: f32 = 1.5;
pub const NEON_TEXTURE_COUNT: usize = 5;
pub const PARTICLE_COUNT: usize = 500;
pub const PARTICLE_CUBE_SIZE: f32 = 20.0; // particles span +/- half this per axis

// Color cycling.
pub const HUE_CYCLE_RATE: f32 = 0.1; // hue revolutions per second
pub const LIGHTNESS_BASE: f32 = 0.6;
pub const SHAPE_LIGHTNESS: f32 = 0.6; // moving shapes keep a fixed lightness

// Frequency spectrum (fftSize 64 -> 32 unsigned byte bins).
pub const SPECTRUM_FFT_SIZE: u32 = 64;
pub const SPECTRUM_BINS: usize = 32;
pub const BASS_BIN_START: usize = 0;
pub const BASS_BIN_COUNT: usize = 8;
pub const MID_BIN_START: usize = 8;
pub const MID_BIN_COUNT: usize = 16;

// Audio-driven effect mapping.
pub const PLANE_PULSE_GAIN: f32 = 0.2;
pub const RGB_SHIFT_BASE: f32 = 0.001;
pub const RGB_SHIFT_BASS_GATE: f32 = 0.1;
pub const RGB_SHIFT_BASS_GAIN: f32 = 0.005;
pub const RGB_SHIFT_ANGLE_RATE: f32 = 8.0; // radians per second
