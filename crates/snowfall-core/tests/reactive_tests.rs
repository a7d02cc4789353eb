// Host-side tests pinning the audio-reactive mappings shared with the WGSL.

use snowfall_core::math::{map_range, polar};
use snowfall_core::reactive::*;
use snowfall_core::SPECTRUM_BINS;

#[test]
fn map_range_extrapolates_and_inverts() {
    assert_eq!(map_range(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
    assert_eq!(map_range(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    assert_eq!(map_range(0.25, 0.0, 1.0, 1.0, 0.0), 0.75);
    let [x, y] = polar(std::f32::consts::FRAC_PI_2, 2.0);
    assert!(x.abs() < 1e-6 && (y - 2.0).abs() < 1e-6);
}

#[test]
fn spectrum_bins_cover_full_range() {
    assert_eq!(spectrum_bin_for(0.0), 0);
    assert_eq!(spectrum_bin_for(0.5), SPECTRUM_BINS / 2);
    assert_eq!(spectrum_bin_for(1.0), SPECTRUM_BINS - 1, "top of tree clamps to last bin");
}

#[test]
fn quiet_bins_keep_minimum_size() {
    assert_eq!(tree_base_size(0.0), 1.0);
    assert_eq!(tree_base_size(0.4), 1.0);
}

#[test]
fn loud_bins_saturate_at_max_size() {
    assert_eq!(tree_base_size(1.0), 20.0);
    let mid = tree_base_size(0.7);
    assert!((mid - 10.5).abs() < 1e-4, "mid={mid}");
}

#[test]
fn amplitude_reads_nearest_byte() {
    let mut spectrum = vec![0u8; SPECTRUM_BINS];
    spectrum[SPECTRUM_BINS - 1] = 255;
    assert_eq!(amplitude_at(&spectrum, 1.0), 1.0);
    assert_eq!(amplitude_at(&spectrum, 0.2), 0.0);
    assert_eq!(amplitude_at(&[], 0.5), 0.0);
}

#[test]
fn point_size_shrinks_with_distance() {
    let near = tree_point_size(1.0, -10.0);
    let far = tree_point_size(1.0, -100.0);
    assert_eq!(near, 200.0);
    assert_eq!(far, 20.0);
    assert_eq!(plane_point_size(1.0, -30.0), 10.0);
}

#[test]
fn tree_fades_into_distance() {
    assert_eq!(tree_opacity(15.0), 1.0);
    assert_eq!(tree_opacity(-200.0), 0.0);
    assert!(tree_opacity(-30.0) > tree_opacity(-100.0));
}

#[test]
fn snow_falls_from_top_and_wraps() {
    assert_eq!(snow_height(0.0, 0.0), 25.0);
    assert!((snow_height(0.0, 500.0) - 8.5).abs() < 1e-4);
    // One full period brings the flake back to the top
    assert!((snow_height(250.0, 1000.0) - snow_height(250.0, 0.0)).abs() < 1e-3);
    // Height decreases as steps advance within a period
    assert!(snow_height(100.0, 10.0) < snow_height(100.0, 0.0));
}

#[test]
fn snow_drift_is_bounded_and_opacity_tracks_depth() {
    for phase in [0.0, 1.0, 500.0, 999.0] {
        let d = snow_drift(123.4, phase);
        assert!((-1.0..=1.0).contains(&d));
    }
    assert_eq!(snow_opacity(15.0), 1.0);
    assert_eq!(snow_opacity(-150.0), 0.0);
}
