// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounding-box quadtree over [`Rect`] values.
//!
//! Every node owns a fixed bounding box, the rectangles stored directly at it, and
//! optionally four children that exactly quadrisect its box. Children are owned by
//! their parent and never point back, so the structure is a plain recursive value.
//!
//! A rectangle is only ever stored at a node whose bounding box fully contains it.
//! Where it ends up beyond that depends on the [`SubdivisionPolicy`]:
//!
//! - [`SubdivisionPolicy::Capacity`] is the classical quadtree. A node holds up to
//!   `n` rectangles before it splits, and each rectangle lives at exactly one node:
//!   the deepest one reached that fully contains it.
//! - [`SubdivisionPolicy::Eager`] splits on the first arrival and records the
//!   rectangle at every level from the root down to the deepest quadrant that still
//!   contains it. Region queries therefore report a small rectangle once per level.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::mem;

use crate::types::Rect;

/// Maximum number of levels below the root.
///
/// Nodes at this depth never subdivide. A zero-area rectangle is contained by every
/// quadrant around it, so recursion needs a floor.
pub const MAX_DEPTH: usize = 16;

/// How a node decides to subdivide and where rectangles are recorded.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SubdivisionPolicy {
    /// Record at this node, subdivide on first arrival, and keep descending into the
    /// first quadrant that fully contains the rectangle.
    ///
    /// A rectangle is duplicated at every level it passes through.
    Eager,
    /// Store up to `n` rectangles per leaf; split when a leaf is full.
    ///
    /// Each rectangle is stored once, at the deepest node that fully contains it.
    Capacity(usize),
}

impl SubdivisionPolicy {
    /// Node capacity used by [`SubdivisionPolicy::default`].
    pub const DEFAULT_CAPACITY: usize = 4;
}

impl Default for SubdivisionPolicy {
    fn default() -> Self {
        Self::Capacity(Self::DEFAULT_CAPACITY)
    }
}

/// One of the four children of a subdivided node.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Anchored at the parent's `(min_x, min_y)`.
    NorthWest = 0,
    /// Anchored at the parent's `(mid_x, min_y)`.
    NorthEast = 1,
    /// Anchored at the parent's `(min_x, mid_y)`.
    SouthWest = 2,
    /// Anchored at the parent's `(mid_x, mid_y)`.
    SouthEast = 3,
}

impl Quadrant {
    /// All quadrants in insertion order.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];
}

/// A quadtree node; the root node is the tree.
///
/// # Example
///
/// ```rust
/// use understory_overlap::{QuadTree, Rect};
///
/// let mut tree = QuadTree::new(Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert!(tree.insert(Rect::new(10.0, 10.0, 5.0, 5.0)));
/// assert!(tree.insert(Rect::new(60.0, 60.0, 20.0, 20.0)));
///
/// // Outside the root bounds: rejected.
/// assert!(!tree.insert(Rect::new(90.0, 90.0, 20.0, 20.0)));
///
/// let hits = tree.query(Rect::new(0.0, 0.0, 50.0, 50.0));
/// assert_eq!(hits, vec![Rect::new(10.0, 10.0, 5.0, 5.0)]);
/// ```
#[derive(Clone)]
pub struct QuadTree {
    bounding_box: Rect,
    policy: SubdivisionPolicy,
    depth: usize,
    objects: Vec<Rect>,
    children: Option<Box<[Self; 4]>>,
}

impl QuadTree {
    /// Create an empty tree with the default [`SubdivisionPolicy`].
    pub fn new(bounding_box: Rect) -> Self {
        Self::with_policy(bounding_box, SubdivisionPolicy::default())
    }

    /// Create an empty tree with the given policy.
    pub fn with_policy(bounding_box: Rect, policy: SubdivisionPolicy) -> Self {
        Self::node(bounding_box, policy, 0)
    }

    fn node(bounding_box: Rect, policy: SubdivisionPolicy, depth: usize) -> Self {
        Self {
            bounding_box,
            policy,
            depth,
            objects: Vec::new(),
            children: None,
        }
    }

    /// The fixed region covered by this node.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box
    }

    /// The subdivision policy shared by every node of the tree.
    pub fn policy(&self) -> SubdivisionPolicy {
        self.policy
    }

    /// Rectangles stored directly at this node, in arrival order.
    pub fn objects(&self) -> &[Rect] {
        &self.objects
    }

    /// The four children in [`Quadrant::ALL`] order, if this node has been subdivided.
    pub fn children(&self) -> Option<&[Self; 4]> {
        self.children.as_deref()
    }

    /// A single child, if this node has been subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<&Self> {
        self.children().map(|c| &c[quadrant as usize])
    }

    /// Insert `rect` into this subtree.
    ///
    /// Returns `false`, leaving the tree untouched, when this node's bounding box does
    /// not fully contain `rect`. Otherwise the rectangle is recorded and `true` is
    /// returned: a node that accepts a rectangle keeps it even if no child does.
    pub fn insert(&mut self, rect: Rect) -> bool {
        if !self.bounding_box.contains(&rect) {
            return false;
        }
        match self.policy {
            SubdivisionPolicy::Eager => self.insert_eager(rect),
            SubdivisionPolicy::Capacity(capacity) => self.insert_capacity(rect, capacity),
        }
        true
    }

    fn insert_eager(&mut self, rect: Rect) {
        self.objects.push(rect);
        if self.depth >= MAX_DEPTH {
            return;
        }
        let children = self.subdivide();
        // First quadrant that accepts wins; the result does not change ours.
        for child in children.iter_mut() {
            if child.insert(rect) {
                break;
            }
        }
    }

    fn insert_capacity(&mut self, rect: Rect, capacity: usize) {
        if self.children.is_none() {
            if self.objects.len() < capacity || self.depth >= MAX_DEPTH {
                self.objects.push(rect);
                return;
            }
            // Full leaf: split and push down whatever fits a quadrant.
            let stored = mem::take(&mut self.objects);
            let children = self.subdivide();
            let mut straddling = Vec::new();
            for r in stored {
                if !children.iter_mut().any(|c| c.insert(r)) {
                    straddling.push(r);
                }
            }
            self.objects = straddling;
        }
        let placed = match self.children.as_deref_mut() {
            Some(children) => children.iter_mut().any(|c| c.insert(rect)),
            None => false,
        };
        if !placed {
            self.objects.push(rect);
        }
    }

    /// Split into four children if not already split, returning them.
    fn subdivide(&mut self) -> &mut [Self; 4] {
        let (bb, policy, depth) = (self.bounding_box, self.policy, self.depth + 1);
        self.children.get_or_insert_with(|| {
            let [nw, ne, sw, se] = bb.quadrants();
            Box::new([
                Self::node(nw, policy, depth),
                Self::node(ne, policy, depth),
                Self::node(sw, policy, depth),
                Self::node(se, policy, depth),
            ])
        })
    }

    /// Visit every stored rectangle intersecting `region`.
    ///
    /// Subtrees whose bounding box does not intersect `region` are skipped. A
    /// rectangle recorded at several nodes is visited once per node.
    pub fn visit<F: FnMut(&Rect)>(&self, region: Rect, mut f: F) {
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if !node.bounding_box.intersects(&region) {
                continue;
            }
            for r in &node.objects {
                if region.intersects(r) {
                    f(r);
                }
            }
            if let Some(children) = node.children() {
                // Reversed so children pop in quadrant order.
                stack.extend(children.iter().rev());
            }
        }
    }

    /// Every stored rectangle intersecting `region`.
    ///
    /// Duplicates are not removed: under [`SubdivisionPolicy::Eager`] a rectangle
    /// appears once for every node that recorded it.
    pub fn query(&self, region: Rect) -> Vec<Rect> {
        let mut out = Vec::new();
        self.visit(region, |r| out.push(*r));
        out
    }

    /// Number of stored entries in this subtree, counting duplicates.
    pub fn len(&self) -> usize {
        self.nodes().map(|n| n.objects.len()).sum()
    }

    /// Whether no rectangle is stored anywhere in this subtree.
    pub fn is_empty(&self) -> bool {
        self.nodes().all(|n| n.objects.is_empty())
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    /// Number of levels below this node that have been created.
    pub fn depth(&self) -> usize {
        self.nodes().map(|n| n.depth - self.depth).max().unwrap_or(0)
    }

    fn nodes(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        core::iter::from_fn(move || {
            let node = stack.pop()?;
            if let Some(children) = node.children() {
                stack.extend(children.iter());
            }
            Some(node)
        })
    }
}

impl Debug for QuadTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounding_box", &self.bounding_box)
            .field("policy", &self.policy)
            .field("nodes", &self.node_count())
            .field("entries", &self.len())
            .finish_non_exhaustive()
    }
}
