//! Runtime scene configuration.
//!
//! Defaults come from `constants.rs`; the page URL may override a few of them,
//! e.g. `?seed=7&tree=2000&music=music/other.mp3`. The web front-end decodes
//! the query and hands the pairs over.

use crate::constants::*;
use crate::error::{CoreError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Fixed RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
    pub music_path: String,
    pub tree_points: usize,
    pub plane_points: usize,
    pub snow_points: usize,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: None,
            music_path: DEFAULT_MUSIC_PATH.to_string(),
            tree_points: TREE_POINTS,
            plane_points: PLANE_POINTS,
            snow_points: SNOW_POINTS_PER_SET,
        }
    }
}

/// URL query keys that override the defaults.
pub const QUERY_KEYS: [&str; 5] = ["seed", "music", "tree", "plane", "snow"];

impl SceneConfig {
    /// Apply already-decoded `(key, value)` query pairs, in order.
    ///
    /// Unknown keys are ignored. The first malformed value aborts with an error.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut cfg = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref().trim());
            match key {
                "seed" => cfg.seed = Some(parse_num(key, value)?),
                "music" if !value.is_empty() => cfg.music_path = value.to_string(),
                "tree" => cfg.tree_points = parse_count(key, value)?,
                "plane" => cfg.plane_points = parse_count(key, value)?,
                "snow" => cfg.snow_points = parse_count(key, value)?,
                _ => log::debug!("[config] ignoring query key `{}`", key),
            }
        }
        Ok(cfg)
    }
}

fn parse_num<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value.parse().map_err(|_| CoreError::InvalidParam {
        key: key.to_string(),
        value: value.to_string(),
    })
}

fn parse_count(key: &str, value: &str) -> Result<usize> {
    Ok(parse_num::<usize>(key, value)?.clamp(1, MAX_FIELD_POINTS))
}
