// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory Quadtree: insert, query, inspect cells, clear.

use kurbo::{Circle, Point};
use understory_quadtree::{CellRect, QuadTree};

fn main() {
    let mut tree = QuadTree::new(CellRect::new(0, 0, 100, 100), 1);
    for p in [(10.0, 10.0), (20.0, 20.0), (80.0, 80.0)] {
        let ok = tree.insert(Point::from(p));
        println!("insert {:?}: {}", p, ok);
    }
    println!("insert (150, 10): {}", tree.insert(Point::new(150.0, 10.0)));
    println!("size: {}", tree.len());

    // Query a rectangle (edges excluded)
    let hits = tree.query_rect(CellRect::new(0, 0, 50, 50));
    println!("inside (0,0,50,50): {:?}", hits);

    // Query the complement
    let rest = tree.query_inverse_rect(CellRect::new(0, 0, 50, 50));
    println!("outside (0,0,50,50): {:?}", rest);

    // Query a circle
    let near = tree.query_circle(Circle::new((75.0, 75.0), 10.0));
    println!("within 10 of (75,75): {:?}", near);

    println!("cells: {:?}", tree.cell_bounds());
    tree.clear();
    println!("after clear: size={} cells={:?}", tree.len(), tree.cell_bounds());
}
