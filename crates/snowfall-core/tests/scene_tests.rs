// Host-side tests for scene layout and sprite synthesis.

use rand::rngs::StdRng;
use rand::SeedableRng;
use snowfall_core::sprites::{self, SNOWFLAKE_VARIANTS};
use snowfall_core::{
    CoreError, FieldKind, SceneConfig, SceneLayout, Sprite, PLANE_ORIGIN,
    SPRITE_SIZE, TREE_ORIGIN,
};

#[test]
fn default_layout_matches_reference_scene() {
    let layout = SceneLayout::build(&SceneConfig::default(), &mut StdRng::seed_from_u64(1)).unwrap();
    let kinds: Vec<FieldKind> = layout.fields.iter().map(|f| f.kind).collect();
    assert_eq!(kinds.first(), Some(&FieldKind::Plane));
    assert_eq!(kinds.last(), Some(&FieldKind::Tree));
    assert_eq!(layout.field(FieldKind::Snow).count(), 5);
    assert_eq!(layout.total_points(), 3000 + 5 * 300 + 4000);

    let tree = layout.field(FieldKind::Tree).next().unwrap();
    assert_eq!(tree.origin, TREE_ORIGIN);
    assert_eq!(tree.model_matrix().w_axis.z, -5.0);
    let plane = layout.field(FieldKind::Plane).next().unwrap();
    assert_eq!(plane.origin, PLANE_ORIGIN);
    assert_eq!(plane.sprite, Sprite::Spark);

    let flakes: Vec<Sprite> = layout.field(FieldKind::Snow).map(|f| f.sprite).collect();
    assert_eq!(
        flakes,
        (0..5u8).map(Sprite::Snowflake).collect::<Vec<_>>(),
        "each snow set gets its own flake sprite"
    );
}

#[test]
fn config_counts_flow_into_fields() {
    let cfg = SceneConfig::from_pairs([("tree", "10"), ("plane", "20"), ("snow", "3")]).unwrap();
    let layout = SceneLayout::build(&cfg, &mut StdRng::seed_from_u64(1)).unwrap();
    assert_eq!(layout.total_points(), 10 + 20 + 5 * 3);
}

#[test]
fn spark_is_bright_center_dark_corner() {
    let img = sprites::spark(SPRITE_SIZE);
    assert_eq!(img.rgba.len(), (SPRITE_SIZE * SPRITE_SIZE * 4) as usize);
    let mid = SPRITE_SIZE / 2;
    assert!(img.alpha_at(mid, mid) > 200);
    assert_eq!(img.alpha_at(0, 0), 0);
}

#[test]
fn snowflakes_differ_and_are_symmetric() {
    let imgs: Vec<_> = (0..SNOWFLAKE_VARIANTS)
        .map(|v| sprites::snowflake(v, SPRITE_SIZE).unwrap())
        .collect();
    for (i, a) in imgs.iter().enumerate() {
        for b in &imgs[i + 1..] {
            assert_ne!(a.rgba, b.rgba);
        }
        // Mirror symmetry about the vertical axis
        let n = SPRITE_SIZE;
        for y in (0..n).step_by(7) {
            for x in (0..n / 2).step_by(5) {
                let l = a.alpha_at(x, y) as i32;
                let r = a.alpha_at(n - 1 - x, y) as i32;
                assert!((l - r).abs() <= 2, "asymmetric at ({x},{y})");
            }
        }
        assert_eq!(a.alpha_at(0, 0), 0, "corners stay transparent");
    }
}

#[test]
fn unknown_snowflake_variant_is_an_error() {
    assert_eq!(
        sprites::render(Sprite::Snowflake(9), 16).unwrap_err(),
        CoreError::SpriteVariant(9)
    );
}
