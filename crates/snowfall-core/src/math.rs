//! Scalar helpers shared by the particle generators and the shader mirrors.

use rand::Rng;

pub const TAU: f32 = std::f32::consts::TAU;

#[inline]
pub fn norm(value: f32, min: f32, max: f32) -> f32 {
    (value - min) / (max - min)
}

#[inline]
pub fn lerp(norm: f32, min: f32, max: f32) -> f32 {
    (max - min) * norm + min
}

/// Linearly remap `value` from `[s_min, s_max]` to `[d_min, d_max]`.
///
/// Not clamped: values outside the source range extrapolate.
#[inline]
pub fn map_range(value: f32, s_min: f32, s_max: f32, d_min: f32, d_max: f32) -> f32 {
    lerp(norm(value, s_min, s_max), d_min, d_max)
}

#[inline]
pub fn polar(angle: f32, r: f32) -> [f32; 2] {
    [r * angle.cos(), r * angle.sin()]
}

/// Uniform sample between `a` and `b` in either order. Returns `a` for an empty range.
#[inline]
pub fn rand_range<R: Rng + ?Sized>(rng: &mut R, a: f32, b: f32) -> f32 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    if hi - lo <= f32::EPSILON {
        return a;
    }
    rng.gen_range(lo..hi)
}

#[inline]
pub fn rand_choice<'a, R: Rng + ?Sized, T>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

/// GLSL-style `mod`: result carries the sign of `y`.
#[inline]
pub fn glsl_mod(x: f32, y: f32) -> f32 {
    x - y * (x / y).floor()
}
