use crate::config::SceneConfig;
use crate::constants::{PLANE_ORIGIN, SNOW_SET_COUNT, TREE_ORIGIN};
use crate::error::Result;
use crate::particles::{generate_plane, generate_snow_set, generate_tree, Particle};
use glam::{Mat4, Vec3};
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Tree,
    Snow,
    Plane,
}

/// Point sprite sampled by the fragment stage of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Spark,
    Snowflake(u8),
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub kind: FieldKind,
    pub sprite: Sprite,
    pub origin: Vec3,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.origin)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

/// All fields of the scene in draw order: plane, snow sets, tree.
///
/// Fields blend additively without depth testing, so the order only matters
/// for matching the reference look, not for correctness.
#[derive(Clone, Debug, Default)]
pub struct SceneLayout {
    pub fields: SmallVec<[ParticleField; 8]>,
}

impl SceneLayout {
    pub fn build<R: Rng + ?Sized>(config: &SceneConfig, rng: &mut R) -> Result<Self> {
        let mut fields = SmallVec::new();
        fields.push(ParticleField {
            kind: FieldKind::Plane,
            sprite: Sprite::Spark,
            origin: PLANE_ORIGIN,
            particles: generate_plane(rng, config.plane_points)?,
        });
        for variant in 0..SNOW_SET_COUNT {
            fields.push(ParticleField {
                kind: FieldKind::Snow,
                sprite: Sprite::Snowflake(variant as u8),
                origin: Vec3::ZERO,
                particles: generate_snow_set(rng, config.snow_points)?,
            });
        }
        fields.push(ParticleField {
            kind: FieldKind::Tree,
            sprite: Sprite::Spark,
            origin: TREE_ORIGIN,
            particles: generate_tree(rng, config.tree_points),
        });
        let layout = Self { fields };
        log::debug!(
            "[scene] fields={} points={}",
            layout.fields.len(),
            layout.total_points()
        );
        Ok(layout)
    }

    pub fn total_points(&self) -> usize {
        self.fields.iter().map(ParticleField::len).sum()
    }

    pub fn field(&self, kind: FieldKind) -> impl Iterator<Item = &ParticleField> {
        self.fields.iter().filter(move |f| f.kind == kind)
    }
}
