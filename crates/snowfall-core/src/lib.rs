pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod math;
pub mod particles;
pub mod playback;
pub mod reactive;
pub mod scene;
pub mod scroll;
pub mod sprites;

pub use camera::*;
pub use clock::*;
pub use color::Rgb;
pub use config::{SceneConfig, QUERY_KEYS};
pub use constants::*;
pub use error::{CoreError, Result};
pub use particles::Particle;
pub use playback::*;
pub use scene::*;
pub use scroll::*;

// Shaders bundled as string constants
pub static TREE_WGSL: &str = include_str!("../shaders/tree.wgsl");
pub static SNOW_WGSL: &str = include_str!("../shaders/snow.wgsl");
pub static PLANE_WGSL: &str = include_str!("../shaders/plane.wgsl");

/// WGSL source for a field's shader pair.
pub fn shader_source(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Tree => TREE_WGSL,
        FieldKind::Snow => SNOW_WGSL,
        FieldKind::Plane => PLANE_WGSL,
    }
}
