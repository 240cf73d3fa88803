// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scene configuration and strategy selection.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use understory_overlap::{
    BruteForceDetector, CollisionDetector, IndexedDetector, Rect, SubdivisionPolicy,
};

use crate::error::ConfigError;

/// Which collision detector a scene builds.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// [`BruteForceDetector`]: compare against every other rectangle.
    BruteForce,
    /// [`IndexedDetector`] with the capacity-gated quadtree.
    #[default]
    Indexed,
    /// [`IndexedDetector`] with [`SubdivisionPolicy::Eager`].
    IndexedEager,
}

impl Strategy {
    /// Every strategy, in declaration order.
    pub const ALL: [Self; 3] = [Self::BruteForce, Self::Indexed, Self::IndexedEager];

    /// Build this strategy's detector over `rects`.
    pub fn build(self, rects: &[Rect]) -> Box<dyn CollisionDetector + Send + Sync> {
        match self {
            Self::BruteForce => Box::new(BruteForceDetector::from_rects(rects)),
            Self::Indexed => Box::new(IndexedDetector::from_rects(rects)),
            Self::IndexedEager => Box::new(IndexedDetector::with_policy(
                rects,
                SubdivisionPolicy::Eager,
            )),
        }
    }

    /// Short label for logs.
    pub fn name(self) -> &'static str {
        match self {
            Self::BruteForce => "brute_force",
            Self::Indexed => "indexed",
            Self::IndexedEager => "indexed_eager",
        }
    }
}

/// Tunables for scene generation.
///
/// Missing fields take their defaults, so a partial JSON object is a valid config:
///
/// ```rust
/// use understory_overlap_scene::{SceneConfig, Strategy};
///
/// let config = SceneConfig::from_json_str(r#"{ "initial_count": 5, "strategy": "brute_force" }"#)
///     .unwrap();
/// assert_eq!(config.initial_count, 5);
/// assert_eq!(config.strategy, Strategy::BruteForce);
/// assert_eq!(config.max_count, 20);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Number of rectangles in a fresh scene.
    pub initial_count: usize,
    /// Lower bound for the rectangle count.
    pub min_count: usize,
    /// Upper bound for the rectangle count.
    pub max_count: usize,
    /// Margin kept free on every side of the canvas.
    pub inset: f64,
    /// Smallest rectangle side.
    pub min_size: u32,
    /// Largest rectangle side.
    pub max_size: u32,
    /// Detector used to classify rectangles.
    pub strategy: Strategy,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_count: 10,
            min_count: 2,
            max_count: 20,
            inset: 50.0,
            min_size: 30,
            max_size: 200,
            strategy: Strategy::default(),
        }
    }
}

impl SceneConfig {
    /// Parse and validate a config from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Like [`load`][Self::load], but a missing file yields the defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match Self::load(path) {
            Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "scene config not found, using defaults");
                Ok(Self::default())
            }
            other => other,
        }
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that ranges are ordered and the inset is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_count > self.max_count {
            return Err(ConfigError::Invalid(format!(
                "min_count {} exceeds max_count {}",
                self.min_count, self.max_count
            )));
        }
        if !(self.min_count..=self.max_count).contains(&self.initial_count) {
            return Err(ConfigError::Invalid(format!(
                "initial_count {} outside {}..={}",
                self.initial_count, self.min_count, self.max_count
            )));
        }
        if self.min_size == 0 || self.min_size > self.max_size {
            return Err(ConfigError::Invalid(format!(
                "size range {}..={} is empty or starts at zero",
                self.min_size, self.max_size
            )));
        }
        if !self.inset.is_finite() || self.inset < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "inset {} must be finite and non-negative",
                self.inset
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SceneConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.strategy, Strategy::Indexed);
    }

    #[test]
    fn json_round_trip_keeps_values() {
        let config = SceneConfig {
            initial_count: 4,
            strategy: Strategy::IndexedEager,
            ..SceneConfig::default()
        };
        let text = config.to_json_string().unwrap();
        assert!(text.contains("\"indexed_eager\""));
        assert_eq!(SceneConfig::from_json_str(&text).unwrap(), config);
    }

    #[test]
    fn rejects_inverted_ranges() {
        let err = SceneConfig::from_json_str(r#"{ "min_count": 9, "max_count": 3 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SceneConfig::from_json_str(r#"{ "min_size": 300 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SceneConfig::from_json_str(r#"{ "initial_count": 50 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = SceneConfig::from_json_str(r#"{ "inset": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_bad_json() {
        let err = SceneConfig::from_json_str(r#"{ "strategy": "quantum" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("understory_overlap_scene_missing_config.json");
        let _ = fs::remove_file(&path);
        assert!(matches!(
            SceneConfig::load(&path),
            Err(ConfigError::Io { .. })
        ));
        assert_eq!(
            SceneConfig::load_or_default(&path).unwrap(),
            SceneConfig::default()
        );
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "understory_overlap_scene_config_{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{ "max_count": 12 }"#).unwrap();
        let config = SceneConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.max_count, 12);
    }

    #[test]
    fn every_strategy_builds() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ];
        for strategy in Strategy::ALL {
            let d = strategy.build(&rects);
            assert!(d.detect(&rects[0]), "{} missed the overlap", strategy.name());
        }
    }
}
