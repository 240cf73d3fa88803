// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collision detector abstraction shared by every strategy.

use alloc::vec::Vec;

use crate::types::Rect;

/// Answers "does this rectangle overlap another one in the scene?".
///
/// A detector is built once from the scene's rectangles and then queried any
/// number of times; queries never change its state. When the scene changes, build
/// a new detector.
///
/// The trait is object safe, so callers can hold a `Box<dyn CollisionDetector>`
/// and swap strategies at runtime.
pub trait CollisionDetector {
    /// Build a detector over `rects`.
    fn from_rects(rects: &[Rect]) -> Self
    where
        Self: Sized;

    /// Whether `candidate` collides with the scene.
    fn detect(&self, candidate: &Rect) -> bool;

    /// Run [`detect`][CollisionDetector::detect] for each of `rects`.
    fn detect_all(&self, rects: &[Rect]) -> Vec<bool> {
        rects.iter().map(|r| self.detect(r)).collect()
    }
}
