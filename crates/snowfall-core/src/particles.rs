//! Procedural placement of the three particle fields.
//!
//! Every generator takes the RNG by reference so a seeded scene is fully
//! reproducible; the web frontend seeds from entropy unless `?seed=` is set.

use crate::color::{parse_palette, Rgb};
use crate::constants::*;
use crate::error::Result;
use crate::math::{map_range, polar, rand_choice, rand_range, TAU};
use rand::Rng;

/// One point of a particle field, uploaded verbatim as per-instance vertex data.
///
/// Fields a given shader does not read stay at their defaults.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Particle {
    pub position: [f32; 3],
    pub size: f32,
    pub color: [f32; 3],
    /// Normalized spectrum lookup coordinate (tree only).
    pub m_index: f32,
    pub phase: f32,
    pub phase_secondary: f32,
}

/// Spiral cone of points; the spectrum drives their size in the tree shader.
pub fn generate_tree<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Particle> {
    let n = count as f32;
    (0..count)
        .map(|i| {
            let t: f32 = rng.gen();
            let y = map_range(t, 0.0, 1.0, TREE_Y_MIN, TREE_Y_MAX);
            // Odd points sit half a turn ahead, giving two interleaved spirals
            let ang = map_range(t, 0.0, 1.0, 0.0, TREE_TURNS * TAU) + (TAU / 2.0) * (i % 2) as f32;
            let [z, x] = polar(ang, map_range(t, 0.0, 1.0, TREE_BASE_RADIUS, 0.0));

            let modifier = map_range(t, 0.0, 1.0, 1.0, 0.0);
            let jitter = TREE_JITTER * modifier;
            let position = [
                x + rand_range(rng, -jitter, jitter),
                y + rand_range(rng, -jitter, jitter),
                z + rand_range(rng, -jitter, jitter),
            ];

            let color = Rgb::from_hsl(map_range(i as f32, 0.0, n, 1.0, 0.0), 1.0, 0.5);
            Particle {
                position,
                size: 1.0,
                color: color.to_array(),
                m_index: map_range(i as f32, 0.0, n, 1.0, 0.0),
                phase: rand_range(rng, 0.0, PHASE_MAX),
                phase_secondary: 0.0,
            }
        })
        .collect()
}

/// One set of snowflakes; the snow shader animates them from their phases.
pub fn generate_snow_set<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Particle>> {
    let palette = parse_palette(&SNOW_PALETTE)?;
    Ok((0..count)
        .map(|_| {
            let position = scatter(rng);
            let color = pick(rng, &palette);
            Particle {
                position,
                size: rand_range(rng, 2.0, 4.0),
                color: color.to_array(),
                m_index: 0.0,
                phase: rand_range(rng, 0.0, PHASE_MAX),
                phase_secondary: rand_range(rng, 0.0, PHASE_MAX),
            }
        })
        .collect())
}

/// Static sparkles on the ground.
pub fn generate_plane<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Result<Vec<Particle>> {
    let palette = parse_palette(&PLANE_PALETTE)?;
    Ok((0..count)
        .map(|_| {
            let position = scatter(rng);
            Particle {
                position,
                size: 1.0,
                color: pick(rng, &palette).to_array(),
                ..Particle::default()
            }
        })
        .collect())
}

fn scatter<R: Rng + ?Sized>(rng: &mut R) -> [f32; 3] {
    [
        rand_range(rng, SCATTER_X.0, SCATTER_X.1),
        0.0,
        rand_range(rng, SCATTER_Z.0, SCATTER_Z.1),
    ]
}

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[Rgb]) -> Rgb {
    rand_choice(rng, palette).copied().unwrap_or_default()
}
