// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree-backed detector.

use core::fmt::Debug;

use crate::detector::CollisionDetector;
use crate::quadtree::{QuadTree, SubdivisionPolicy};
use crate::types::Rect;

/// Answers collision queries from a [`QuadTree`] built once over the scene.
///
/// The tree is rooted at the bounding union of the scene, so every rectangle in it
/// is accepted. [`detect`][CollisionDetector::detect] reports a collision when a
/// region query for the candidate yields more than one entry: the candidate itself
/// accounts for the first.
///
/// With the default [`SubdivisionPolicy::Capacity`] each rectangle is stored once
/// and the verdict matches [`BruteForceDetector`][crate::BruteForceDetector] for
/// every rectangle of the scene, except when the scene holds identical copies of
/// one rectangle (those count here, and not there).
///
/// With [`SubdivisionPolicy::Eager`] a small rectangle is also counted once per
/// ancestor that recorded it, so it can be reported as colliding with nothing but
/// itself. That mode reproduces the original red/mint rendering, including this
/// artifact.
#[derive(Clone)]
pub struct IndexedDetector {
    tree: QuadTree,
}

impl IndexedDetector {
    /// Build a detector over `rects` with the given subdivision policy.
    ///
    /// An empty scene yields an empty tree rooted at [`Rect::ZERO`]; every query on
    /// it reports no collision.
    ///
    /// Rectangles the root does not contain are skipped. Only a NaN coordinate can
    /// cause that, and such a rectangle intersects nothing anyway.
    pub fn with_policy(rects: &[Rect], policy: SubdivisionPolicy) -> Self {
        let bounds = Rect::bounding(rects).unwrap_or(Rect::ZERO);
        let mut tree = QuadTree::with_policy(bounds, policy);
        for r in rects {
            tree.insert(*r);
        }
        Self { tree }
    }

    /// The underlying tree.
    pub fn tree(&self) -> &QuadTree {
        &self.tree
    }
}

impl CollisionDetector for IndexedDetector {
    fn from_rects(rects: &[Rect]) -> Self {
        Self::with_policy(rects, SubdivisionPolicy::default())
    }

    fn detect(&self, candidate: &Rect) -> bool {
        let mut hits = 0_usize;
        self.tree.visit(*candidate, |_| hits += 1);
        hits > 1
    }
}

impl Debug for IndexedDetector {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("IndexedDetector")
            .field("tree", &self.tree)
            .finish()
    }
}
