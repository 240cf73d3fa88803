// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlap Scene: random rectangle scenes classified by a swappable
//! collision detector.
//!
//! This crate sits between [`understory_overlap`] and a view. The view owns the
//! canvas and the drawing; it hands the scene a canvas rectangle, forwards user
//! gestures as [`SceneCommand`]s, and draws each rectangle with the [`Paint`] the
//! scene assigns.
//!
//! - [`Scene`]: owns the rectangles, regenerates them on every edit, and rebuilds
//!   the detector each time.
//! - [`SceneConfig`]: counts, sizes, inset and [`Strategy`], loadable from JSON.
//! - [`generate_rects`]: bounds-respecting random rectangles from any `rand::Rng`.
//! - [`compare_strategies`]: per-rectangle [`HitFlags`] across every strategy.
//! - [`Stopwatch`]: timing for the classification pass, reported through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use understory_overlap_scene::{Scene, SceneConfig, Strategy, disagreements};
//!
//! let config = SceneConfig {
//!     strategy: Strategy::BruteForce,
//!     ..SceneConfig::default()
//! };
//! let scene = Scene::with_seed(kurbo::Rect::new(0.0, 0.0, 800.0, 600.0), config, 42).unwrap();
//! let (paints, _elapsed) = scene.timed_paints();
//! assert_eq!(paints.len(), scene.count());
//!
//! // The capacity-gated index never disagrees with brute force on generated scenes.
//! let report = scene.compare();
//! assert!(report.iter().all(|c| !c.diverges(Strategy::Indexed)));
//! let _eager_mismatches = disagreements(&report);
//! ```
//!
//! ## Logging
//!
//! Scene creation, regeneration and detector rebuilds emit `debug` events; timed
//! classification emits a `trace` event. Install any `tracing` subscriber to see
//! them.

mod compare;
mod config;
mod error;
mod generate;
mod paint;
mod scene;
mod stopwatch;

pub use compare::{Comparison, HitFlags, compare_strategies, disagreements};
pub use config::{SceneConfig, Strategy};
pub use error::{ConfigError, SceneError};
pub use generate::generate_rects;
pub use paint::{Paint, SceneCommand};
pub use scene::Scene;
pub use stopwatch::Stopwatch;
