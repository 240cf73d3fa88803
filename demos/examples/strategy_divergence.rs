// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Strategy divergence.
//!
//! Classify many random scenes with every strategy and count where the indexed
//! detectors disagree with brute force. The capacity-gated index should never
//! disagree; the eager index flags small rectangles that sit deep in the tree.
//!
//! Run:
//! - `cargo run -p understory_overlap_demos --example strategy_divergence`

use kurbo::Rect;
use tracing_subscriber::EnvFilter;
use understory_overlap::{CollisionDetector, IndexedDetector, SubdivisionPolicy};
use understory_overlap_scene::{HitFlags, Scene, SceneConfig, Strategy, compare_strategies};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let canvas = Rect::new(0.0, 0.0, 1024.0, 768.0);
    let mut totals = [0_usize; 3];
    let mut rects_seen = 0_usize;
    for seed in 0..200 {
        let scene = Scene::with_seed(canvas, SceneConfig::default(), seed).unwrap();
        rects_seen += scene.rects().len();
        for c in scene.compare() {
            for (i, s) in Strategy::ALL.into_iter().enumerate() {
                if c.diverges(s) {
                    totals[i] += 1;
                }
            }
        }
    }
    println!("{rects_seen} rectangles over 200 scenes");
    for (i, s) in Strategy::ALL.into_iter().enumerate() {
        println!("  {:>13}: {} disagreements with brute force", s.name(), totals[i]);
    }

    // A hand-built scene where every rectangle is isolated.
    let isolated = [
        understory_overlap::Rect::new(0.0, 0.0, 10.0, 10.0),
        understory_overlap::Rect::new(90.0, 0.0, 10.0, 10.0),
        understory_overlap::Rect::new(0.0, 90.0, 10.0, 10.0),
        understory_overlap::Rect::new(90.0, 90.0, 10.0, 10.0),
        understory_overlap::Rect::new(40.0, 40.0, 10.0, 10.0),
    ];
    println!("isolated scene:");
    for c in compare_strategies(&isolated) {
        println!("  {:?} -> {:?}", c.rect, c.hits);
        assert_eq!(c.hits, HitFlags::INDEXED_EAGER);
    }
    let eager = IndexedDetector::with_policy(&isolated, SubdivisionPolicy::Eager);
    let copies = eager.tree().query(isolated[0]).len();
    println!(
        "eager tree records the first rectangle {copies} times; detect = {}",
        eager.detect(&isolated[0])
    );
}
