// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_overlap::{QuadTree, Rect};

use rstar::primitives::Rectangle;
use rstar::{AABB, RTree};

fn gen_grid_rects(n: usize, cell: f64) -> Vec<Rect> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            out.push(Rect::new(x0 + 1.0, y0 + 1.0, cell - 2.0, cell - 2.0));
        }
    }
    out
}

fn to_rstar_rects(v: &[Rect]) -> Vec<Rectangle<[f64; 2]>> {
    v.iter()
        .map(|r| Rectangle::from_corners([r.min_x(), r.min_y()], [r.max_x(), r.max_y()]))
        .collect()
}

fn bench_quadtree_vs_rstar(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_rstar");
    for &n in &[64usize, 128] {
        let rects = gen_grid_rects(n, 10.0);
        let bounds = Rect::bounding(&rects).unwrap_or(Rect::ZERO);
        let query = Rect::new(100.0, 100.0, 400.0, 400.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_query_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(bounds),
                |mut tree| {
                    for r in &rects {
                        let _ = tree.insert(*r);
                    }
                    black_box(tree.query(query).len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_query_bulk_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_rects(&rects),
                |rectangles| {
                    let tree = RTree::bulk_load(rectangles);
                    let aabb = AABB::from_corners(
                        [query.min_x(), query.min_y()],
                        [query.max_x(), query.max_y()],
                    );
                    let hits: usize = tree.locate_in_envelope_intersecting(&aabb).count();
                    black_box(hits);
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_quadtree_vs_rstar);
criterion_main!(benches);
