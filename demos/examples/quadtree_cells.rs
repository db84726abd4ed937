// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree cells.
//!
//! Fill a tree with a diagonal run of points, then print the subdivision as an
//! indented outline and as Kurbo rectangles ready for drawing.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_cells`

use kurbo::{Point, Rect};
use understory_quadtree::{CellFlags, CellRect, QuadTree};

fn main() {
    let mut tree = QuadTree::new(CellRect::new(0, 0, 256, 256), 2);
    for i in 0..24 {
        let t = f64::from(i) * 10.0;
        let accepted = tree.insert(Point::new(t + 3.0, t * 0.5 + 40.0));
        assert!(accepted, "diagonal stays inside the root");
    }
    println!("{tree:?}");

    for cell in tree.cells() {
        let indent = "  ".repeat(cell.depth);
        let kind = if cell.flags.contains(CellFlags::LEAF) {
            "leaf"
        } else {
            "split"
        };
        let full = if cell.flags.contains(CellFlags::FULL) {
            " full"
        } else {
            ""
        };
        println!("{indent}{kind}{full} {:?} items={}", cell.bounds, cell.items);
    }

    // Drawing layers usually want Kurbo geometry.
    let outlines: Vec<Rect> = tree.cell_bounds().into_iter().map(Rect::from).collect();
    println!("{} outlines, root = {:?}", outlines.len(), outlines[0]);

    tree.clear();
    assert_eq!(tree.cell_bounds(), vec![tree.bounds()]);
    println!("after clear: {tree:?}");
}
