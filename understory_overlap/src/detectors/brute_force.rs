// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear-scan detector. Small and simple; the reference for every other strategy.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::detector::CollisionDetector;
use crate::types::Rect;

/// Compares the candidate against every other rectangle in the scene.
///
/// "Other" means "not equal": a rectangle never collides with itself, nor with an
/// identical copy of itself.
///
/// ```rust
/// use understory_overlap::{BruteForceDetector, CollisionDetector, Rect};
///
/// let a = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let b = Rect::new(5.0, 5.0, 10.0, 10.0);
/// let c = Rect::new(100.0, 100.0, 10.0, 10.0);
/// let detector = BruteForceDetector::new([a, b, c]);
/// assert!(detector.detect(&a));
/// assert!(!detector.detect(&c));
/// ```
#[derive(Clone, Default)]
pub struct BruteForceDetector {
    rects: Vec<Rect>,
}

impl BruteForceDetector {
    /// Build a detector that owns `rects`.
    pub fn new(rects: impl Into<Vec<Rect>>) -> Self {
        Self {
            rects: rects.into(),
        }
    }

    /// The scene this detector answers for.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }
}

impl CollisionDetector for BruteForceDetector {
    fn from_rects(rects: &[Rect]) -> Self {
        Self::new(rects)
    }

    fn detect(&self, candidate: &Rect) -> bool {
        candidate.intersects_any(self.rects.iter().filter(|r| *r != candidate))
    }
}

impl Debug for BruteForceDetector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BruteForceDetector")
            .field("rects", &self.rects.len())
            .finish()
    }
}
