// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle primitive and its predicates.

/// Axis-aligned rectangle described by an origin and a size.
///
/// Two rectangles are equal iff all four fields are equal; there is no identity
/// beyond the value.
///
/// Sizes are expected to be non-negative. Zero-area rectangles are allowed and
/// never intersect anything; negative sizes are not rejected and behave as plain
/// IEEE arithmetic dictates.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    /// Origin x (left).
    pub x: f64,
    /// Origin y (top).
    pub y: f64,
    /// Extent along x.
    pub width: f64,
    /// Extent along y.
    pub height: f64,
}

impl Rect {
    /// The zero rectangle at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Create a rectangle from origin and size.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from min/max corners.
    ///
    /// The size is rounded up where needed so that the result's `max_x()`/`max_y()`
    /// are never below the requested corner.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::new(min_x, min_y, span(min_x, max_x), span(min_y, max_y))
    }

    /// Minimum x (left).
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.x
    }

    /// Minimum y (top).
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Maximum x (right).
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Maximum y (bottom).
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Horizontal center.
    #[inline]
    pub fn mid_x(&self) -> f64 {
        self.x + 0.5 * self.width
    }

    /// Vertical center.
    #[inline]
    pub fn mid_y(&self) -> f64 {
        self.y + 0.5 * self.height
    }

    /// Area of the rectangle; zero for empty or inverted rectangles.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// Return true if the rectangle has no area (zero or negative extent on either axis).
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether `other` lies entirely within this rectangle.
    ///
    /// Containment is closed: shared edges count, and every rectangle contains itself.
    pub fn contains(&self, other: &Self) -> bool {
        self.min_x() <= other.min_x()
            && other.max_x() <= self.max_x()
            && self.min_y() <= other.min_y()
            && other.max_y() <= self.max_y()
    }

    /// Whether the point lies within the closed extent of this rectangle.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        self.min_x() <= x && x <= self.max_x() && self.min_y() <= y && y <= self.max_y()
    }

    /// Whether the two rectangles overlap with positive area.
    ///
    /// Rectangles that only touch along an edge or at a corner do not intersect,
    /// and a zero-area rectangle intersects nothing. Symmetric in its arguments.
    pub fn intersects(&self, other: &Self) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && overlaps(self.min_x(), self.max_x(), other.min_x(), other.max_x())
            && overlaps(self.min_y(), self.max_y(), other.min_y(), other.max_y())
    }

    /// Whether this rectangle intersects at least one of `others`.
    ///
    /// Stops at the first hit.
    pub fn intersects_any<'a>(&self, others: impl IntoIterator<Item = &'a Self>) -> bool {
        others.into_iter().any(|o| self.intersects(o))
    }

    /// Smallest rectangle containing both.
    ///
    /// A NaN coordinate on one side is ignored in favor of the other side's value,
    /// so the result does not depend on argument order.
    pub fn union(&self, other: &Self) -> Self {
        Self::from_min_max(
            self.min_x().min(other.min_x()),
            self.min_y().min(other.min_y()),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Smallest rectangle containing every rectangle in `rects`, or `None` if empty.
    ///
    /// The fold is seeded with the first rectangle, so the result is never biased
    /// toward the origin.
    pub fn bounding<'a>(rects: impl IntoIterator<Item = &'a Self>) -> Option<Self> {
        let mut it = rects.into_iter();
        let first = *it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }

    /// The four equal quadrants of this rectangle, in the order
    /// northwest, northeast, southwest, southeast.
    pub fn quadrants(&self) -> [Self; 4] {
        let w = 0.5 * self.width;
        let h = 0.5 * self.height;
        let (mid_x, mid_y) = (self.mid_x(), self.mid_y());
        [
            Self::new(self.x, self.y, w, h),
            Self::new(mid_x, self.y, w, h),
            Self::new(self.x, mid_y, w, h),
            Self::new(mid_x, mid_y, w, h),
        ]
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Rect> for Rect {
    fn from(r: kurbo::Rect) -> Self {
        Self::from_min_max(r.x0, r.y0, r.x1, r.y1)
    }
}

#[cfg(feature = "kurbo")]
impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        Self::new(r.min_x(), r.min_y(), r.max_x(), r.max_y())
    }
}

/// Extent from `min` to `max` such that `min + extent >= max` holds in floating point.
fn span(min: f64, max: f64) -> f64 {
    let mut extent = max - min;
    while min + extent < max {
        extent = extent.next_up();
    }
    extent
}

/// Open-interval overlap of `[a0, a1]` and `[b0, b1]`; false if any bound is NaN.
fn overlaps(a0: f64, a1: f64, b0: f64, b1: f64) -> bool {
    a0 < b1 && b0 < a1
}
