// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_overlap::{
    BruteForceDetector, CollisionDetector, IndexedDetector, QuadTree, Rect, SubdivisionPolicy,
};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Random rectangles with whole-number sides in `30..=200`, like the scene generator.
fn gen_scene(count: usize, width: f64, height: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(count);
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    for _ in 0..count {
        let w = (30.0 + rng.next_f64() * 170.0).floor();
        let h = (30.0 + rng.next_f64() * 170.0).floor();
        let x = (rng.next_f64() * (width - w)).floor();
        let y = (rng.next_f64() * (height - h)).floor();
        out.push(Rect::new(x, y, w, h));
    }
    out
}

/// Small rectangles on a loose grid; nothing overlaps.
fn gen_sparse_grid(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            out.push(Rect::new(x as f64 * cell, y as f64 * cell, cell * 0.5, cell * 0.5));
        }
    }
    out
}

fn bench_detect_all<D: CollisionDetector>(c: &mut Criterion, group_name: &str) {
    let mut group = c.benchmark_group(group_name);
    for &n in &[10usize, 100, 1000] {
        // Scale the canvas with n so density stays comparable.
        let side = 400.0 * (n as f64).sqrt();
        let rects = gen_scene(n, side, side);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("build_detect_all_n{}", n), |b| {
            b.iter(|| {
                let d = D::from_rects(&rects);
                let hits = d.detect_all(&rects).into_iter().filter(|h| *h).count();
                black_box(hits);
            })
        });
        let d = D::from_rects(&rects);
        group.bench_function(format!("detect_all_prebuilt_n{}", n), |b| {
            b.iter(|| {
                let hits = d.detect_all(&rects).into_iter().filter(|h| *h).count();
                black_box(hits);
            })
        });
    }
    group.finish();
}

fn bench_brute_force(c: &mut Criterion) {
    bench_detect_all::<BruteForceDetector>(c, "brute_force");
}

fn bench_indexed(c: &mut Criterion) {
    bench_detect_all::<IndexedDetector>(c, "indexed");
}

fn bench_quadtree_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_policies");
    let rects = gen_sparse_grid(64, 16.0);
    let bounds = Rect::bounding(&rects).unwrap_or(Rect::ZERO);
    let query = Rect::new(100.0, 100.0, 300.0, 300.0);
    group.throughput(Throughput::Elements(rects.len() as u64));
    for (name, policy) in [
        ("eager", SubdivisionPolicy::Eager),
        ("capacity4", SubdivisionPolicy::Capacity(4)),
        ("capacity16", SubdivisionPolicy::Capacity(16)),
    ] {
        group.bench_function(format!("insert_query_{}", name), |b| {
            b.iter_batched(
                || QuadTree::with_policy(bounds, policy),
                |mut tree| {
                    for r in &rects {
                        let _ = tree.insert(*r);
                    }
                    black_box(tree.query(query).len());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_brute_force,
    bench_indexed,
    bench_quadtree_policies,
);
criterion_main!(benches);
