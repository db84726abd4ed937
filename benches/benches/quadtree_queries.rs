// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Circle, Point};
use understory_quadtree::{CellRect, QuadTree};

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

const WORLD: i64 = 2048;

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_f64() * WORLD as f64, rng.next_f64() * WORLD as f64))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    for _ in 0..n_clusters {
        let cx = spread + rng.next_f64() * (WORLD as f64 - 2.0 * spread);
        let cy = spread + rng.next_f64() * (WORLD as f64 - 2.0 * spread);
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn build(points: &[Point], capacity: usize) -> QuadTree<Point> {
    let mut tree = QuadTree::new(CellRect::new(0, 0, WORLD, WORLD), capacity);
    let _ = tree.extend_from(points.iter().copied());
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_insert");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[1usize, 8, 32] {
            group.bench_function(format!("uniform_n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || QuadTree::new(CellRect::new(0, 0, WORLD, WORLD), capacity),
                    |mut tree| {
                        black_box(tree.extend_from(points.iter().copied()));
                        tree
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("quadtree_query");
    let uniform = build(&gen_uniform_points(50_000), 8);
    let clustered = build(&gen_clustered_points(32, 1_500, 64.0), 8);

    for (name, tree) in [("uniform", &uniform), ("clustered", &clustered)] {
        group.bench_function(format!("{}_rect_small", name), |b| {
            b.iter(|| black_box(tree.query_rect(CellRect::new(900, 900, 64, 64)).len()))
        });
        group.bench_function(format!("{}_rect_quarter", name), |b| {
            b.iter(|| black_box(tree.query_rect(CellRect::new(0, 0, 1024, 1024)).len()))
        });
        group.bench_function(format!("{}_circle_r48", name), |b| {
            b.iter(|| {
                black_box(
                    tree.query_circle(Circle::new((1000.0, 1000.0), 48.0))
                        .len(),
                )
            })
        });
        // Visits every node regardless of the rectangle.
        group.bench_function(format!("{}_inverse_rect", name), |b| {
            b.iter(|| {
                black_box(
                    tree.query_inverse_rect(CellRect::new(64, 64, 1920, 1920))
                        .len(),
                )
            })
        });
        group.bench_function(format!("{}_len", name), |b| b.iter(|| black_box(tree.len())));
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_queries);
criterion_main!(benches);
