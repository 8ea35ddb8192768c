// Band-energy extraction from the frequency spectrum and the pure mappings
// from audio/camera signals to visual parameters.

use super::constants::{
    BASS_BIN_COUNT, BASS_BIN_START, HUE_CYCLE_RATE, LIGHTNESS_BASE, MID_BIN_COUNT, MID_BIN_START,
    RGB_SHIFT_ANGLE_RATE, RGB_SHIFT_BASE, RGB_SHIFT_BASS_GAIN, RGB_SHIFT_BASS_GATE,
};

/// Mean of `count` byte bins starting at `start`, normalized by 255.
/// Always in [0, 1]; out-of-range bins read as zero.
pub fn band_energy(spectrum: &[u8], start: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    let end = (start + count).min(spectrum.len());
    if start >= end {
        return 0.0;
    }
    let sum: u32 = spectrum[start..end].iter().map(|&b| b as u32).sum();
    (sum as f32 / count as f32 / 255.0).clamp(0.0, 1.0)
}

pub fn bass_energy(spectrum: &[u8]) -> f32 {
    band_energy(spectrum, BASS_BIN_START, BASS_BIN_COUNT)
}

pub fn mid_energy(spectrum: &[u8]) -> f32 {
    band_energy(spectrum, MID_BIN_START, MID_BIN_COUNT)
}

/// Hue cycles with elapsed time, wrapping in [0, 1).
pub fn hue_at(elapsed_sec: f32) -> f32 {
    (elapsed_sec * HUE_CYCLE_RATE).fract()
}

/// Lightness rises from the base with camera speed.
pub fn lightness_at(speed_boost: f32) -> f32 {
    LIGHTNESS_BASE + speed_boost
}

/// Chromatic aberration parameters: a small constant shift, boosted by bass
/// once it clears the gate, with the shift angle spinning over time.
pub fn rgb_shift_params(bass_energy: f32, elapsed_sec: f32) -> (f32, f32) {
    let amount = RGB_SHIFT_BASE
        + if bass_energy > RGB_SHIFT_BASS_GATE {
            bass_energy * RGB_SHIFT_BASS_GAIN
        } else {
            0.0
        };
    (amount, elapsed_sec * RGB_SHIFT_ANGLE_RATE)
}
