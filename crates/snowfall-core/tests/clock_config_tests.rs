// Host-side tests for the frame clock and URL configuration.

use snowfall_core::{
    CoreError, FrameClock, SceneConfig, DEFAULT_MUSIC_PATH, QUERY_KEYS, TREE_POINTS,
};

#[test]
fn clock_advances_time_and_wraps_step() {
    let mut c = FrameClock::default();
    c.advance();
    assert!((c.time - 0.1).abs() < 1e-6);
    assert_eq!(c.step, 1.0);
    for _ in 0..999 {
        c.advance();
    }
    assert_eq!(c.step, 0.0, "step wraps every 1000 frames");
    assert!((c.time - 100.0).abs() < 1e-2);
}

#[test]
fn no_pairs_gives_defaults() {
    let cfg = SceneConfig::from_pairs(Vec::<(&str, &str)>::new()).unwrap();
    assert_eq!(cfg, SceneConfig::default());
    assert_eq!(cfg.music_path, DEFAULT_MUSIC_PATH);
    assert_eq!(cfg.tree_points, TREE_POINTS);
    assert_eq!(cfg.seed, None);
}

#[test]
fn pairs_override_known_keys() {
    let cfg = SceneConfig::from_pairs([
        ("seed", "7"),
        ("tree", "2000"),
        ("music", "music/other.mp3"),
        ("foo", "bar"),
    ])
    .unwrap();
    assert_eq!(cfg.seed, Some(7));
    assert_eq!(cfg.tree_points, 2000);
    assert_eq!(cfg.music_path, "music/other.mp3");
}

#[test]
fn decoded_values_are_taken_verbatim() {
    // `?music=music%2Fnew%20year.mp3&seed=%37` after URL decoding
    let cfg = SceneConfig::from_pairs([("music", "music/new year.mp3"), ("seed", "7")]).unwrap();
    assert_eq!(cfg.music_path, "music/new year.mp3");
    assert_eq!(cfg.seed, Some(7));
    // `+` decodes to a space; owned strings work too
    let cfg = SceneConfig::from_pairs(vec![("music".to_string(), "a b.mp3".to_string())]).unwrap();
    assert_eq!(cfg.music_path, "a b.mp3");
}

#[test]
fn empty_music_keeps_default_track() {
    let cfg = SceneConfig::from_pairs([("music", "")]).unwrap();
    assert_eq!(cfg.music_path, DEFAULT_MUSIC_PATH);
}

#[test]
fn query_keys_cover_every_override() {
    for key in QUERY_KEYS {
        let value = if key == "music" { "x.mp3" } else { "5" };
        let cfg = SceneConfig::from_pairs([(key, value)]).unwrap();
        assert_ne!(cfg, SceneConfig::default(), "{key} had no effect");
    }
}

#[test]
fn counts_are_clamped() {
    let cfg = SceneConfig::from_pairs([("snow", "0"), ("plane", "99999999")]).unwrap();
    assert_eq!(cfg.snow_points, 1);
    assert_eq!(cfg.plane_points, 100_000);
}

#[test]
fn malformed_number_is_an_error() {
    let err = SceneConfig::from_pairs([("seed", "abc")]).unwrap_err();
    assert_eq!(
        err,
        CoreError::InvalidParam {
            key: "seed".into(),
            value: "abc".into()
        }
    );
    assert!(SceneConfig::from_pairs([("tree", "-5")]).is_err());
}
