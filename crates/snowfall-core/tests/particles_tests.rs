// Host-side tests for the particle field generators.

use rand::rngs::StdRng;
use rand::SeedableRng;
use snowfall_core::particles::{generate_plane, generate_snow_set, generate_tree};
use snowfall_core::color::parse_palette;
use snowfall_core::{Rgb, PLANE_PALETTE, SNOW_PALETTE, TREE_BASE_RADIUS};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

fn palette(literals: &[&str]) -> Vec<[f32; 3]> {
    parse_palette(literals)
        .unwrap()
        .into_iter()
        .map(Rgb::to_array)
        .collect()
}

#[test]
fn tree_points_stay_inside_jittered_cone() {
    let pts = generate_tree(&mut rng(), 4000);
    assert_eq!(pts.len(), 4000);
    for p in &pts {
        let [x, y, z] = p.position;
        assert!((-8.3..=10.3).contains(&y), "y out of range: {y}");
        // Radius shrinks linearly from 5 at y=-8 to 0 at y=10
        let t = ((y + 8.0) / 18.0).clamp(0.0, 1.0);
        let expected_r = TREE_BASE_RADIUS * (1.0 - t);
        let r = (x * x + z * z).sqrt();
        assert!(
            (r - expected_r).abs() < 1.0,
            "radius {r} too far from cone radius {expected_r}"
        );
        assert_eq!(p.size, 1.0);
        assert!((0.0..1000.0).contains(&p.phase));
    }
}

#[test]
fn tree_spectrum_index_decreases_from_one() {
    let pts = generate_tree(&mut rng(), 100);
    assert!((pts[0].m_index - 1.0).abs() < 1e-6);
    for w in pts.windows(2) {
        assert!(w[1].m_index < w[0].m_index);
        assert!(w[1].m_index > 0.0);
    }
}

#[test]
fn tree_hue_sweeps_from_red() {
    let pts = generate_tree(&mut rng(), 4000);
    // First point has hue 1.0 which wraps to pure red
    let c = pts[0].color;
    assert!((c[0] - 1.0).abs() < 1e-5 && c[1].abs() < 1e-5 && c[2].abs() < 1e-5);
    // A third of the way through the hue is 2/3: blue
    let c = pts[4000 / 3].color;
    assert!(c[2] > 0.95 && c[0] < 0.05, "expected blue, got {c:?}");
}

#[test]
fn tree_alternates_spiral_halves() {
    // Same t for neighbours would place them on opposite sides; check the
    // two parity classes are both populated around the trunk.
    let pts = generate_tree(&mut rng(), 2000);
    let even_left = pts.iter().step_by(2).filter(|p| p.position[0] < 0.0).count();
    let odd_left = pts.iter().skip(1).step_by(2).filter(|p| p.position[0] < 0.0).count();
    assert!(even_left > 200 && odd_left > 200);
}

#[test]
fn snow_set_attributes_in_range() {
    let colors = palette(&SNOW_PALETTE);
    let pts = generate_snow_set(&mut rng(), 300).unwrap();
    assert_eq!(pts.len(), 300);
    for p in &pts {
        let [x, y, z] = p.position;
        assert!((-25.0..25.0).contains(&x));
        assert_eq!(y, 0.0);
        assert!((-150.0..15.0).contains(&z));
        assert!((2.0..4.0).contains(&p.size));
        assert!((0.0..1000.0).contains(&p.phase));
        assert!((0.0..1000.0).contains(&p.phase_secondary));
        assert!(colors.contains(&p.color), "unexpected snow color {:?}", p.color);
    }
}

#[test]
fn plane_uses_palette_and_unit_size() {
    let colors = palette(&PLANE_PALETTE);
    let pts = generate_plane(&mut rng(), 3000).unwrap();
    assert_eq!(pts.len(), 3000);
    let mut seen = [false; 3];
    for p in &pts {
        assert_eq!(p.size, 1.0);
        assert_eq!(p.position[1], 0.0);
        let idx = colors.iter().position(|c| *c == p.color).expect("palette color");
        seen[idx] = true;
    }
    assert!(seen.iter().all(|s| *s), "every palette entry should appear");
}

#[test]
fn same_seed_same_field() {
    let a = generate_tree(&mut StdRng::seed_from_u64(7), 64);
    let b = generate_tree(&mut StdRng::seed_from_u64(7), 64);
    let c = generate_tree(&mut StdRng::seed_from_u64(8), 64);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn particle_is_tightly_packed() {
    assert_eq!(std::mem::size_of::<snowfall_core::Particle>(), 40);
}

#[test]
fn empty_fields_are_allowed() {
    assert!(generate_tree(&mut rng(), 0).is_empty());
    assert!(generate_plane(&mut rng(), 0).unwrap().is_empty());
}
