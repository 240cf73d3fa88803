// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Random scene generation.

use rand::Rng;
use understory_overlap::Rect;

use crate::error::SceneError;

/// Largest coordinate magnitude at which every whole number is exact in `f64`.
const MAX_COORD: f64 = 9_007_199_254_740_992.0;

/// Generate `count` rectangles lying entirely inside `bounds`.
///
/// Sides are whole numbers drawn uniformly from `min_size..=max_size`, clamped to
/// what fits in `bounds`; origins are whole numbers drawn uniformly over every
/// position that keeps the rectangle inside, edges included. Rectangles may
/// overlap each other; that is the point.
///
/// Fails with [`SceneError::UnplaceableBounds`] for NaN or infinite bounds and
/// with [`SceneError::BoundsTooSmall`] when not even one minimum-size square fits.
///
/// ```rust
/// use rand::SeedableRng;
/// use understory_overlap::Rect;
/// use understory_overlap_scene::generate_rects;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let bounds = Rect::new(50.0, 50.0, 300.0, 500.0);
/// let rects = generate_rects(&mut rng, 8, bounds, 30, 200).unwrap();
/// assert_eq!(rects.len(), 8);
/// assert!(rects.iter().all(|r| bounds.contains(r)));
/// ```
pub fn generate_rects<R: Rng>(
    rng: &mut R,
    count: usize,
    bounds: Rect,
    min_size: u32,
    max_size: u32,
) -> Result<Vec<Rect>, SceneError> {
    let extremes = [bounds.min_x(), bounds.min_y(), bounds.max_x(), bounds.max_y()];
    // NaN fails the comparison as well.
    if !extremes.iter().all(|v| v.abs() <= MAX_COORD) {
        return Err(SceneError::UnplaceableBounds { bounds });
    }
    let (lo_x, lo_y) = (bounds.min_x().ceil(), bounds.min_y().ceil());
    let span_x = whole_span(bounds.max_x().floor() - lo_x);
    let span_y = whole_span(bounds.max_y().floor() - lo_y);
    if span_x < min_size || span_y < min_size {
        return Err(SceneError::BoundsTooSmall { bounds, min_size });
    }
    let max_size = max_size.max(min_size);
    let max_w = max_size.min(span_x);
    let max_h = max_size.min(span_y);

    let rects = (0..count)
        .map(|_| {
            let w = rng.random_range(min_size..=max_w);
            let h = rng.random_range(min_size..=max_h);
            let x = lo_x + f64::from(rng.random_range(0..=span_x - w));
            let y = lo_y + f64::from(rng.random_range(0..=span_y - h));
            Rect::new(x, y, f64::from(w), f64::from(h))
        })
        .collect();
    Ok(rects)
}

/// A whole, finite span as a side length, saturating at `u32::MAX`.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the cast only sees whole numbers strictly inside the u32 range"
)]
fn whole_span(span: f64) -> u32 {
    if span <= 0.0 {
        0
    } else if span >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        span as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rects_respect_bounds_and_sizes() {
        let bounds = Rect::new(50.0, 50.0, 290.0, 744.0);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rects = generate_rects(&mut rng, 20, bounds, 30, 200).unwrap();
            assert_eq!(rects.len(), 20);
            for r in &rects {
                assert!(bounds.contains(r), "{r:?} escapes {bounds:?}");
                assert!((30.0..=200.0).contains(&r.width));
                assert!((30.0..=200.0).contains(&r.height));
                assert_eq!(r.x.fract(), 0.0);
                assert_eq!(r.width.fract(), 0.0);
            }
        }
    }

    #[test]
    fn size_and_position_endpoints_are_reached() {
        let bounds = Rect::new(0.0, 0.0, 40.0, 40.0);
        let mut rng = StdRng::seed_from_u64(3);
        let rects = generate_rects(&mut rng, 2_000, bounds, 30, 32).unwrap();
        for side in [30.0, 31.0, 32.0] {
            assert!(rects.iter().any(|r| r.width == side), "no width {side}");
            assert!(rects.iter().any(|r| r.height == side), "no height {side}");
        }
        assert!(rects.iter().any(|r| r.min_x() == 0.0), "left edge never touched");
        assert!(rects.iter().any(|r| r.max_x() == 40.0), "right edge never touched");
        assert!(rects.iter().any(|r| r.min_y() == 0.0), "top edge never touched");
        assert!(rects.iter().any(|r| r.max_y() == 40.0), "bottom edge never touched");
        assert!(rects.iter().all(|r| bounds.contains(r)));
    }

    #[test]
    fn non_finite_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        for bounds in [
            Rect::new(0.0, 0.0, f64::INFINITY, 500.0),
            Rect::new(f64::NEG_INFINITY, 0.0, 100.0, 100.0),
            Rect::new(0.0, 0.0, 100.0, f64::NAN),
        ] {
            let err = generate_rects(&mut rng, 3, bounds, 30, 200);
            assert!(
                matches!(err, Err(SceneError::UnplaceableBounds { .. })),
                "{bounds:?} should be unplaceable"
            );
        }
    }

    #[test]
    fn sizes_clamp_to_narrow_bounds() {
        let bounds = Rect::new(0.5, 0.0, 40.0, 1000.0);
        let mut rng = StdRng::seed_from_u64(1);
        let rects = generate_rects(&mut rng, 50, bounds, 30, 200).unwrap();
        assert!(rects.iter().all(|r| r.width <= 39.0 && bounds.contains(r)));
    }

    #[test]
    fn same_seed_same_scene() {
        let bounds = Rect::new(0.0, 0.0, 500.0, 500.0);
        let a = generate_rects(&mut StdRng::seed_from_u64(9), 10, bounds, 30, 200).unwrap();
        let b = generate_rects(&mut StdRng::seed_from_u64(9), 10, bounds, 30, 200).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_small_bounds_are_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate_rects(&mut rng, 3, Rect::new(0.0, 0.0, 20.0, 500.0), 30, 200);
        assert!(matches!(err, Err(SceneError::BoundsTooSmall { min_size: 30, .. })));
        let err = generate_rects(&mut rng, 3, Rect::new(f64::NAN, 0.0, 100.0, 100.0), 30, 200);
        assert!(err.is_err());
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let rects = generate_rects(&mut rng, 0, Rect::new(0.0, 0.0, 100.0, 100.0), 30, 200);
        assert!(rects.unwrap().is_empty());
    }
}
