// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Side-by-side verdicts from every strategy.

use understory_overlap::Rect;

use crate::config::Strategy;

bitflags::bitflags! {
    /// Strategies that reported a collision for one rectangle.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct HitFlags: u8 {
        /// Reported by the brute-force detector.
        const BRUTE_FORCE   = 0b0000_0001;
        /// Reported by the capacity-gated indexed detector.
        const INDEXED       = 0b0000_0010;
        /// Reported by the eager indexed detector.
        const INDEXED_EAGER = 0b0000_0100;
    }
}

impl HitFlags {
    /// The flag for a single strategy.
    pub fn of(strategy: Strategy) -> Self {
        match strategy {
            Strategy::BruteForce => Self::BRUTE_FORCE,
            Strategy::Indexed => Self::INDEXED,
            Strategy::IndexedEager => Self::INDEXED_EAGER,
        }
    }
}

/// Verdicts for one rectangle.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Comparison {
    /// The rectangle that was classified.
    pub rect: Rect,
    /// Strategies that reported a collision.
    pub hits: HitFlags,
}

impl Comparison {
    /// Whether every strategy returned the same verdict.
    pub fn agrees(&self) -> bool {
        self.hits.is_empty() || self.hits.is_all()
    }

    /// Whether `strategy` disagrees with the brute-force ground truth.
    pub fn diverges(&self, strategy: Strategy) -> bool {
        self.hits.contains(HitFlags::of(strategy)) != self.hits.contains(HitFlags::BRUTE_FORCE)
    }
}

/// Classify every rectangle with every strategy.
pub fn compare_strategies(rects: &[Rect]) -> Vec<Comparison> {
    let detectors: Vec<_> = Strategy::ALL
        .into_iter()
        .map(|s| (HitFlags::of(s), s.build(rects)))
        .collect();
    rects
        .iter()
        .map(|rect| {
            let hits = detectors
                .iter()
                .filter(|(_, d)| d.detect(rect))
                .fold(HitFlags::empty(), |acc, (flag, _)| acc | *flag);
            Comparison { rect: *rect, hits }
        })
        .collect()
}

/// Number of rectangles on which the strategies did not all agree.
pub fn disagreements(comparisons: &[Comparison]) -> usize {
    comparisons.iter().filter(|c| !c.agrees()).count()
}
