// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_quadtree::{CellRect, QuadTree};

use rstar::{AABB, RTree};

fn gen_grid_points(n: usize, cell: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Offset by half a cell so no point lies on an integer query edge.
            out.push(Point::new((x as f64 + 0.5) * cell, (y as f64 + 0.5) * cell));
        }
    }
    out
}

fn to_rstar_points(v: &[Point]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x, p.y]).collect()
}

fn bench_points_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_vs_rstar_points");
    for &n in &[64usize, 128, 256] {
        let pts = gen_grid_points(n, 8.0);
        let side = (n * 8) as i64;
        let rs_pts = to_rstar_points(&pts);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("quadtree_build_n{}", n), |b| {
            b.iter_batched(
                || QuadTree::new(CellRect::new(0, 0, side, side), 16),
                |mut tree| {
                    black_box(tree.extend_from(pts.iter().copied()));
                    tree
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("rstar_bulk_load_n{}", n), |b| {
            b.iter_batched(
                || rs_pts.clone(),
                |v| black_box(RTree::bulk_load(v)),
                BatchSize::SmallInput,
            )
        });

        let mut tree = QuadTree::new(CellRect::new(0, 0, side, side), 16);
        let _ = tree.extend_from(pts.iter().copied());
        let rtree = RTree::bulk_load(rs_pts.clone());
        let q = CellRect::new(100, 100, 300, 300);
        let env = AABB::from_corners([100.0, 100.0], [400.0, 400.0]);

        group.bench_function(format!("quadtree_query_rect_n{}", n), |b| {
            b.iter(|| black_box(tree.query_rect(q).len()))
        });
        group.bench_function(format!("rstar_locate_in_envelope_n{}", n), |b| {
            b.iter(|| black_box(rtree.locate_in_envelope(&env).count()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_points_compare);
criterion_main!(benches);
