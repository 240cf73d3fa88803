// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for configuration and scene generation.

use std::path::PathBuf;

use thiserror::Error;
use understory_overlap::Rect;

/// Error type for loading and validating a [`SceneConfig`][crate::SceneConfig].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    Io {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },
    /// The config text is not valid JSON for a scene config.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// The values parsed but are inconsistent.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Error type for scene construction and regeneration.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene config was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// The placement bounds cannot hold even one minimum-size rectangle.
    #[error("placement bounds {bounds:?} cannot fit a {min_size}x{min_size} rectangle")]
    BoundsTooSmall {
        /// Region rectangles must be placed in.
        bounds: Rect,
        /// Smallest side length requested.
        min_size: u32,
    },
    /// The placement bounds are not finite, or too far out for whole-number placement.
    #[error("placement bounds {bounds:?} are not finite")]
    UnplaceableBounds {
        /// Region rectangles must be placed in.
        bounds: Rect,
    },
}
