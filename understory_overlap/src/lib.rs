// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Overlap: overlap detection among axis-aligned rectangles.
//!
//! - [`Rect`]: an origin/size rectangle with containment, intersection and union.
//! - [`QuadTree`]: a bounding-box quadtree answering region queries.
//! - [`CollisionDetector`]: the contract shared by every strategy, with two
//!   implementations: [`BruteForceDetector`] (the reference) and
//!   [`IndexedDetector`] (quadtree-backed).
//!
//! Detectors are built once per scene and never updated; rebuild when the
//! rectangles change.
//!
//! # Example
//!
//! ```rust
//! use understory_overlap::{BruteForceDetector, CollisionDetector, IndexedDetector, Rect};
//!
//! let scene = [
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//!     Rect::new(5.0, 5.0, 10.0, 10.0),
//!     Rect::new(100.0, 100.0, 10.0, 10.0),
//! ];
//!
//! let brute = BruteForceDetector::from_rects(&scene);
//! let indexed = IndexedDetector::from_rects(&scene);
//! assert_eq!(brute.detect_all(&scene), vec![true, true, false]);
//! assert_eq!(indexed.detect_all(&scene), brute.detect_all(&scene));
//! ```
//!
//! ## Boundary convention
//!
//! Two rectangles collide only when they overlap with positive area. Rectangles
//! that share an edge or a corner do not collide, and a zero-area rectangle collides
//! with nothing. Containment, used to place rectangles in the tree, is closed.
//! Both strategies use the same predicates, so they agree on touching cases.
//!
//! ## Subdivision policies
//!
//! [`IndexedDetector::from_rects`] uses the classical capacity-gated quadtree
//! ([`SubdivisionPolicy::Capacity`]). [`SubdivisionPolicy::Eager`] records each
//! rectangle at every level down to its deepest containing quadrant. It is kept
//! for fidelity: it reproduces a rendering where small, isolated rectangles are
//! reported as colliding.
//!
//! ```rust
//! use understory_overlap::{CollisionDetector, IndexedDetector, Rect, SubdivisionPolicy};
//!
//! let scene = [
//!     Rect::new(0.0, 0.0, 10.0, 10.0),
//!     Rect::new(90.0, 90.0, 10.0, 10.0),
//! ];
//! let eager = IndexedDetector::with_policy(&scene, SubdivisionPolicy::Eager);
//! // Disjoint, yet reported: the candidate is found at several levels.
//! assert!(eager.detect(&scene[0]));
//! assert!(!IndexedDetector::from_rects(&scene).detect(&scene[0]));
//! ```
//!
//! ## Features
//!
//! - `kurbo`: `From` conversions between [`Rect`] and `kurbo::Rect`.
//!
//! ### Float semantics
//!
//! Comparisons treat NaN as failing every predicate: a rectangle with a NaN
//! coordinate is neither contained nor intersecting, whichever side of the call
//! it is on. Such rectangles are accepted by both detectors and never collide;
//! the quadtree-backed one simply leaves them out of its tree.

#![no_std]

extern crate alloc;

mod detector;
pub mod detectors;
pub mod quadtree;
mod types;

pub use detector::CollisionDetector;
pub use detectors::{BruteForceDetector, IndexedDetector};
pub use quadtree::{MAX_DEPTH, QuadTree, Quadrant, SubdivisionPolicy};
pub use types::Rect;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn build_detect_and_rebuild() {
        let mut scene = alloc::vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(100.0, 100.0, 10.0, 10.0),
        ];
        let d = IndexedDetector::from_rects(&scene);
        assert_eq!(d.detect_all(&scene), [false, false]);

        // Scene changed: detectors are rebuilt, not updated.
        scene.push(Rect::new(105.0, 105.0, 10.0, 10.0));
        let d = IndexedDetector::from_rects(&scene);
        assert_eq!(d.detect_all(&scene), [false, true, true]);
        let b = BruteForceDetector::from_rects(&scene);
        assert_eq!(b.detect_all(&scene), d.detect_all(&scene));
    }

    #[test]
    fn quadtree_query_returns_candidate_and_neighbours() {
        let scene = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ];
        let d = IndexedDetector::from_rects(&scene);
        let mut hits: Vec<Rect> = d.tree().query(scene[0]);
        hits.sort_by(|a, b| a.x.total_cmp(&b.x));
        assert_eq!(hits, scene);
    }
}
