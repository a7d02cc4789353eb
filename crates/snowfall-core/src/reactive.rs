//! Host-side mirror of the per-point mappings in `shaders/*.wgsl`.
//!
//! Keep these in lockstep with the WGSL; the tests pin the shared numbers.
//! View-space depths are negative in front of the camera.

use crate::constants::{PHASE_MAX, SPECTRUM_BINS};
use crate::math::{glsl_mod, map_range};

pub const TREE_AMP_FLOOR: f32 = 0.4;
pub const TREE_AMP_SPAN: f32 = 0.6;
pub const TREE_SIZE_MIN: f32 = 1.0;
pub const TREE_SIZE_MAX: f32 = 20.0;
pub const POINT_SCALE: f32 = 100.0;
pub const PLANE_POINT_SCALE: f32 = 300.0;
pub const SNOW_TIME_SCALE: f32 = 0.0006;
pub const SNOW_TOP_Y: f32 = 25.0;
pub const SNOW_BOTTOM_Y: f32 = -8.0;

/// Nearest spectrum bin sampled at normalized coordinate `m_index`.
#[inline]
pub fn spectrum_bin_for(m_index: f32) -> usize {
    let bins = SPECTRUM_BINS as f32;
    (m_index * bins).floor().clamp(0.0, bins - 1.0) as usize
}

/// Normalized amplitude in \[0, 1\] for a byte spectrum, as the texture sampler sees it.
#[inline]
pub fn amplitude_at(spectrum: &[u8], m_index: f32) -> f32 {
    spectrum
        .get(spectrum_bin_for(m_index))
        .map(|&b| b as f32 / 255.0)
        .unwrap_or(0.0)
}

/// Pre-perspective tree point size from a normalized amplitude.
#[inline]
pub fn tree_base_size(amplitude: f32) -> f32 {
    let a = (amplitude - TREE_AMP_FLOOR).clamp(0.0, TREE_AMP_SPAN);
    map_range(a, 0.0, TREE_AMP_SPAN, TREE_SIZE_MIN, TREE_SIZE_MAX)
}

/// Perspective-attenuated point size in pixels.
#[inline]
pub fn attenuate(size: f32, scale: f32, view_z: f32) -> f32 {
    size * (scale / -view_z)
}

#[inline]
pub fn tree_point_size(amplitude: f32, view_z: f32) -> f32 {
    attenuate(tree_base_size(amplitude), POINT_SCALE, view_z)
}

#[inline]
pub fn tree_opacity(view_z: f32) -> f32 {
    map_range(view_z, -200.0, 15.0, 0.0, 1.0)
}

/// Fall height: the step counter sweeps each flake from the top to the ground.
#[inline]
pub fn snow_height(phase: f32, step: f32) -> f32 {
    map_range(
        glsl_mod(phase + step, PHASE_MAX),
        0.0,
        PHASE_MAX,
        SNOW_TOP_Y,
        SNOW_BOTTOM_Y,
    )
}

/// Sideways sway added to x (with `phase`) or z (with `phase_secondary`).
#[inline]
pub fn snow_drift(time: f32, phase: f32) -> f32 {
    (time * SNOW_TIME_SCALE + phase).sin()
}

/// Fades by the flake's model-space depth.
#[inline]
pub fn snow_opacity(z: f32) -> f32 {
    map_range(z, -150.0, 15.0, 0.0, 1.0)
}

#[inline]
pub fn plane_point_size(size: f32, view_z: f32) -> f32 {
    attenuate(size, PLANE_POINT_SCALE, view_z)
}
