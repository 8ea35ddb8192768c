// Host-side tests for band energies, visual parameter mappings and the
// media-control icon state.

#![allow(dead_code)]
mod tunnel_core {
    pub mod constants {
        include!("../src/core/constants.rs");
    }
    pub mod media {
        include!("../src/core/media.rs");
    }
    pub mod spectrum {
        include!("../src/core/spectrum.rs");
    }
}

use tunnel_core::constants::*;
use tunnel_core::media::{media_icon, MediaIcon};
use tunnel_core::spectrum::*;

#[test]
fn band_energy_bounds() {
    let silent = [0u8; SPECTRUM_BINS];
    assert_eq!(band_energy(&silent, 0, 8), 0.0);
    let full = [255u8; SPECTRUM_BINS];
    assert!((band_energy(&full, 0, 8) - 1.0).abs() < 1e-6);
    // mid level: mean of the bins
    let mut mixed = [0u8; SPECTRUM_BINS];
    mixed[0] = 255;
    assert!((band_energy(&mixed, 0, 2) - 0.5).abs() < 1e-6);
}

#[test]
fn band_energy_handles_degenerate_ranges() {
    let data = [200u8; 4];
    assert_eq!(band_energy(&data, 0, 0), 0.0);
    assert_eq!(band_energy(&data, 10, 4), 0.0);
    assert_eq!(band_energy(&[], 0, 8), 0.0);
    // range partially past the end averages what exists over the requested
    // count, so it stays within [0, 1]
    let e = band_energy(&data, 2, 8);
    assert!((0.0..=1.0).contains(&e));
}

#[test]
fn bass_and_mid_read_disjoint_bins() {
    let mut spectrum = [0u8; SPECTRUM_BINS];
    for bin in spectrum.iter_mut().take(BASS_BIN_COUNT) {
        *bin = 255;
    }
    assert!((bass_energy(&spectrum) - 1.0).abs() < 1e-6);
    assert_eq!(mid_energy(&spectrum), 0.0);

    let mut spectrum = [0u8; SPECTRUM_BINS];
    for bin in spectrum
        .iter_mut()
        .skip(MID_BIN_START)
        .take(MID_BIN_COUNT)
    {
        *bin = 255;
    }
    assert_eq!(bass_energy(&spectrum), 0.0);
    assert!((mid_energy(&spectrum) - 1.0).abs() < 1e-6);
}

#[test]
fn hue_cycles_and_wraps() {
    assert!(hue_at(0.0).abs() < 1e-6);
    assert!((hue_at(2.5) - 0.25).abs() < 1e-6);
    // one full cycle later, same hue
    let period = 1.0 / HUE_CYCLE_RATE;
    assert!((hue_at(3.0) - hue_at(3.0 + period)).abs() < 1e-4);
    for t in [0.0_f32, 5.0, 9.99, 123.4] {
        let h = hue_at(t);
        assert!((0.0..1.0).contains(&h));
    }
}

#[test]
fn lightness_rises_with_speed() {
    assert!((lightness_at(0.0) - LIGHTNESS_BASE).abs() < 1e-6);
    assert!((lightness_at(0.25) - (LIGHTNESS_BASE + 0.25)).abs() < 1e-6);
}

#[test]
fn rgb_shift_gates_on_bass() {
    let (quiet, _) = rgb_shift_params(0.05, 1.0);
    assert!((quiet - RGB_SHIFT_BASE).abs() < 1e-7, "below the gate only the base shift applies");
    // exactly at the gate still counts as quiet
    let (at_gate, _) = rgb_shift_params(RGB_SHIFT_BASS_GATE, 1.0);
    assert!((at_gate - RGB_SHIFT_BASE).abs() < 1e-7);
    let (loud, _) = rgb_shift_params(0.8, 1.0);
    assert!((loud - (RGB_SHIFT_BASE + 0.8 * RGB_SHIFT_BASS_GAIN)).abs() < 1e-7);
}

#[test]
fn rgb_shift_angle_spins_with_time() {
    let (_, a0) = rgb_shift_params(0.0, 0.0);
    let (_, a1) = rgb_shift_params(0.0, 2.0);
    assert!(a0.abs() < 1e-6);
    assert!((a1 - 2.0 * RGB_SHIFT_ANGLE_RATE).abs() < 1e-4);
}

#[test]
fn media_icon_reflects_playback_state() {
    assert_eq!(media_icon(true, false), MediaIcon::Play);
    assert_eq!(media_icon(true, true), MediaIcon::Play);
    assert_eq!(media_icon(false, true), MediaIcon::Unmute);
    assert_eq!(media_icon(false, false), MediaIcon::Mute);
}
