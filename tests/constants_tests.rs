// Sanity checks for tuning-constant relationships the rest of the code
// relies on.

#![allow(dead_code)]
mod tunnel_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
}

use tunnel_core::constants::*;

#[test]
fn spectrum_bins_match_fft_size() {
    assert_eq!(SPECTRUM_BINS, (SPECTRUM_FFT_SIZE / 2) as usize);
}

#[test]
fn frequency_bands_fit_the_spectrum() {
    assert!(BASS_BIN_START + BASS_BIN_COUNT <= SPECTRUM_BINS);
    assert!(MID_BIN_START + MID_BIN_COUNT <= SPECTRUM_BINS);
    // mid picks up exactly where bass ends
    assert_eq!(MID_BIN_START, BASS_BIN_START + BASS_BIN_COUNT);
}

#[test]
fn smoothing_factors_converge() {
    assert!(POSITION_SMOOTHING > 0.0 && POSITION_SMOOTHING < 1.0);
    assert!(VELOCITY_DECAY > 0.0 && VELOCITY_DECAY < 1.0);
}

#[test]
fn scroll_limits_are_positive() {
    assert!(SCROLL_DELTA_MAX > 0.0);
    assert!(SCROLL_MIN_INTERVAL_MS > 0.0);
    assert!(WHEEL_DELTA_SCALE > 0.0);
    assert!(CAMERA_LOOKAHEAD > 0.0 && CAMERA_LOOKAHEAD < 1.0);
}

#[test]
fn tunnel_geometry_is_well_formed() {
    assert!(PATH_CONTROL_POINTS >= 3);
    assert!(TUNNEL_RADIUS > 0.0 && TUNNEL_RADIUS < PATH_RADIUS);
    assert!(TUBULAR_SEGMENTS > 0 && RADIAL_SEGMENTS > 2);
    // billboards sit outside the tube wall
    assert!(NEON_PLANE_RING_RADIUS > TUNNEL_RADIUS);
}

#[test]
fn lightness_stays_displayable_at_full_boost() {
    assert!(LIGHTNESS_BASE + SPEED_BOOST_GAIN <= 1.0);
}
