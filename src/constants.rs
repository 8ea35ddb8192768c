// Rendering and post-processing tuning for the web frontend.

// Camera projection
pub const CAMERA_FOV_RADIANS: f32 = 1.308_997; // 75 degrees
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

// Canvas backing store
pub const MAX_DEVICE_PIXEL_RATIO: f64 = 2.0;

// Exponential-squared fog, matching the black background
pub const FOG_DENSITY: f32 = 0.3;

// Bloom pass
pub const BLOOM_STRENGTH: f32 = 1.3;
pub const BLOOM_RADIUS: f32 = 0.4;
pub const BLOOM_THRESHOLD: f32 = 0.1;

// Radial blur centers on the vanishing point
pub const RADIAL_BLUR_CENTER: [f32; 2] = [0.5, 0.5];

// Material opacities
pub const TUNNEL_LINE_OPACITY: f32 = 0.9;
pub const SHAPE_OPACITY: f32 = 0.4;
pub const NEON_PLANE_OPACITY: f32 = 0.5;
pub const PARTICLE_SIZE: f32 = 0.02;

// Tints standing in for the five neon billboard textures
pub const NEON_TINTS: [[f32; 3]; 5] = [
    [1.0, 0.2, 0.8], // magenta
    [0.2, 0.9, 1.0], // cyan
    [1.0, 0.6, 0.1], // amber
    [0.4, 1.0, 0.3], // green
    [0.6, 0.3, 1.0], // violet
];
