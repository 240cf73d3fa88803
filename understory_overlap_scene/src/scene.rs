// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The scene: the current rectangles, the detector built over them, and the
//! commands that change them.

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};
use understory_overlap::{CollisionDetector, Rect};

use crate::compare::{Comparison, compare_strategies};
use crate::config::{SceneConfig, Strategy};
use crate::error::SceneError;
use crate::generate::generate_rects;
use crate::paint::{Paint, SceneCommand};
use crate::stopwatch::Stopwatch;

/// A canvas full of random rectangles and a detector classifying them.
///
/// Every change to the rectangle list (a command, a canvas resize) regenerates the
/// list and rebuilds the detector from scratch.
///
/// ```rust
/// use understory_overlap_scene::{Paint, Scene, SceneCommand, SceneConfig};
///
/// let canvas = kurbo::Rect::new(0.0, 0.0, 390.0, 844.0);
/// let mut scene = Scene::with_seed(canvas, SceneConfig::default(), 1).unwrap();
/// assert_eq!(scene.count(), 10);
///
/// scene.apply(SceneCommand::AddRect).unwrap();
/// assert_eq!(scene.rects().len(), 11);
///
/// for (rect, paint) in scene.paints() {
///     let red = paint == Paint::Collision;
///     assert_eq!(red, scene.detect(&rect));
/// }
/// ```
pub struct Scene {
    canvas: kurbo::Rect,
    config: SceneConfig,
    count: usize,
    strategy: Strategy,
    rng: StdRng,
    rects: Vec<Rect>,
    detector: Box<dyn CollisionDetector + Send + Sync>,
}

impl Scene {
    /// Create a scene on `canvas` seeded from the operating system.
    pub fn new(canvas: kurbo::Rect, config: SceneConfig) -> Result<Self, SceneError> {
        Self::with_rng(canvas, config, StdRng::from_os_rng())
    }

    /// Create a reproducible scene on `canvas`.
    pub fn with_seed(
        canvas: kurbo::Rect,
        config: SceneConfig,
        seed: u64,
    ) -> Result<Self, SceneError> {
        Self::with_rng(canvas, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        canvas: kurbo::Rect,
        config: SceneConfig,
        mut rng: StdRng,
    ) -> Result<Self, SceneError> {
        config.validate()?;
        let canvas = canvas.abs();
        let count = config.initial_count;
        let strategy = config.strategy;
        let rects = generate_rects(
            &mut rng,
            count,
            placement_bounds(canvas, &config),
            config.min_size,
            config.max_size,
        )?;
        let detector = strategy.build(&rects);
        debug!(count, strategy = strategy.name(), "scene created");
        Ok(Self {
            canvas,
            config,
            count,
            strategy,
            rng,
            rects,
            detector,
        })
    }

    /// The canvas the scene is laid out on.
    pub fn canvas(&self) -> kurbo::Rect {
        self.canvas
    }

    /// The config the scene was created with.
    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    /// Target number of rectangles.
    pub fn count(&self) -> usize {
        self.count
    }

    /// The strategy currently classifying rectangles.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// The current rectangles, in generation order.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    /// The region rectangles are placed in: the canvas shrunk by the configured inset.
    pub fn placement_bounds(&self) -> Rect {
        placement_bounds(self.canvas, &self.config)
    }

    /// Apply an edit and regenerate.
    ///
    /// Count changes clamp to the configured range; the scene is regenerated even
    /// when the count is already at its limit.
    pub fn apply(&mut self, command: SceneCommand) -> Result<(), SceneError> {
        let count = match command {
            SceneCommand::AddRect => (self.count + 1).min(self.config.max_count),
            SceneCommand::RemoveRect => self.count.saturating_sub(1).max(self.config.min_count),
            SceneCommand::Reset => self.count,
        };
        self.regenerate(self.canvas, count)
    }

    /// Move to a new canvas (for example after a view resize) and regenerate.
    ///
    /// On error the scene keeps its previous canvas and rectangles.
    pub fn set_canvas(&mut self, canvas: kurbo::Rect) -> Result<(), SceneError> {
        self.regenerate(canvas.abs(), self.count)
    }

    /// Switch strategy, rebuilding the detector over the current rectangles.
    pub fn set_strategy(&mut self, strategy: Strategy) {
        self.strategy = strategy;
        self.detector = strategy.build(&self.rects);
        debug!(strategy = strategy.name(), "detector rebuilt");
    }

    fn regenerate(&mut self, canvas: kurbo::Rect, count: usize) -> Result<(), SceneError> {
        let rects = generate_rects(
            &mut self.rng,
            count,
            placement_bounds(canvas, &self.config),
            self.config.min_size,
            self.config.max_size,
        )?;
        self.detector = self.strategy.build(&rects);
        self.rects = rects;
        self.canvas = canvas;
        self.count = count;
        debug!(count, strategy = self.strategy.name(), "scene regenerated");
        Ok(())
    }

    /// Whether `rect` collides with the scene, per the current strategy.
    pub fn detect(&self, rect: &Rect) -> bool {
        self.detector.detect(rect)
    }

    /// Classify every rectangle.
    pub fn paints(&self) -> Vec<(Rect, Paint)> {
        self.rects
            .iter()
            .map(|r| (*r, Paint::from_collision(self.detector.detect(r))))
            .collect()
    }

    /// [`paints`][Self::paints], timed.
    pub fn timed_paints(&self) -> (Vec<(Rect, Paint)>, Duration) {
        let stopwatch = Stopwatch::start();
        let paints = self.paints();
        let elapsed = stopwatch.stop();
        trace!(
            count = self.rects.len(),
            strategy = self.strategy.name(),
            elapsed_us = elapsed.as_secs_f64() * 1e6,
            "classified scene"
        );
        (paints, elapsed)
    }

    /// Verdicts of every strategy for the current rectangles.
    pub fn compare(&self) -> Vec<Comparison> {
        compare_strategies(&self.rects)
    }
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("canvas", &self.canvas)
            .field("count", &self.count)
            .field("strategy", &self.strategy)
            .field("rects", &self.rects)
            .finish_non_exhaustive()
    }
}

fn placement_bounds(canvas: kurbo::Rect, config: &SceneConfig) -> Rect {
    // Negative insets shrink a kurbo rect.
    Rect::from(canvas.inset(-config.inset))
}
