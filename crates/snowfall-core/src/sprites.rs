//! Procedurally drawn point sprites (RGBA8, white with coverage in alpha).
//!
//! The fragment shaders multiply the vertex color by the sampled texel, so
//! RGB and alpha both carry the coverage: `rgba = (c, c, c, c)`.

use crate::error::{CoreError, Result};
use crate::scene::Sprite;

pub const SNOWFLAKE_VARIANTS: usize = 5;

/// Square RGBA8 image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteImage {
    pub size: u32,
    pub rgba: Vec<u8>,
}

impl SpriteImage {
    fn from_coverage(size: u32, mut coverage: impl FnMut(f32, f32) -> f32) -> Self {
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for py in 0..size {
            for px in 0..size {
                // Pixel center in [-1, 1], y up
                let x = (px as f32 + 0.5) / size as f32 * 2.0 - 1.0;
                let y = 1.0 - (py as f32 + 0.5) / size as f32 * 2.0;
                let c = (coverage(x, y).clamp(0.0, 1.0) * 255.0).round() as u8;
                rgba.extend_from_slice(&[c, c, c, c]);
            }
        }
        Self { size, rgba }
    }

    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.rgba[((y * self.size + x) * 4 + 3) as usize]
    }
}

pub fn render(sprite: Sprite, size: u32) -> Result<SpriteImage> {
    match sprite {
        Sprite::Spark => Ok(spark(size)),
        Sprite::Snowflake(v) => snowflake(v as usize, size),
    }
}

/// Soft glow: bright core with a quadratic falloff to zero at the edge.
pub fn spark(size: u32) -> SpriteImage {
    SpriteImage::from_coverage(size, |x, y| {
        let r = (x * x + y * y).sqrt();
        let falloff = (1.0 - r).max(0.0);
        let core = (1.0 - r / 0.25).max(0.0);
        falloff * falloff + 0.5 * core
    })
}

/// Branch layout per variant: (position along arm, branch length, branch angle).
const BRANCHES: [&[(f32, f32, f32)]; SNOWFLAKE_VARIANTS] = [
    &[(0.45, 0.25, 0.8)],
    &[(0.35, 0.2, 0.7), (0.65, 0.15, 0.7)],
    &[(0.3, 0.3, 1.0), (0.6, 0.18, 0.6)],
    &[(0.25, 0.15, 0.5), (0.5, 0.25, 0.9), (0.75, 0.12, 0.5)],
    &[],
];

/// Six-armed flake; `variant` selects the branch pattern.
pub fn snowflake(variant: usize, size: u32) -> Result<SpriteImage> {
    let branches = *BRANCHES
        .get(variant)
        .ok_or(CoreError::SpriteVariant(variant))?;
    let reach = 0.9_f32;
    let width = 2.5 / size.max(1) as f32 + 0.03;
    let hub = if branches.is_empty() { 0.35 } else { 0.12 };
    Ok(SpriteImage::from_coverage(size, |x, y| {
        let r = (x * x + y * y).sqrt();
        if r > reach + width {
            return 0.0;
        }
        // Fold into one 60 degree sector, mirrored about the arm axis
        let sector = std::f32::consts::PI / 3.0;
        let ang = y.atan2(x).rem_euclid(sector);
        let ang = sector / 2.0 - (ang - sector / 2.0).abs();
        let (ax, ay) = (r * ang.cos(), r * ang.sin());

        let mut d = segment_distance(ax, ay, 0.0, 0.0, reach, 0.0);
        for &(at, len, tilt) in branches {
            let bx = at * reach;
            let ex = bx + len * tilt.cos();
            let ey = len * tilt.sin();
            d = d.min(segment_distance(ax, ay, bx, 0.0, ex, ey));
        }
        let line = 1.0 - smoothstep(width * 0.5, width, d);
        let center = 1.0 - smoothstep(hub * 0.6, hub, r);
        line.max(center)
    }))
}

fn segment_distance(px: f32, py: f32, ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    let (abx, aby) = (bx - ax, by - ay);
    let (apx, apy) = (px - ax, py - ay);
    let len2 = abx * abx + aby * aby;
    let t = if len2 > 0.0 {
        ((apx * abx + apy * aby) / len2).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (apx - abx * t, apy - aby * t);
    (dx * dx + dy * dy).sqrt()
}

fn smoothstep(e0: f32, e1: f32, x: f32) -> f32 {
    let t = ((x - e0) / (e1 - e0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}
