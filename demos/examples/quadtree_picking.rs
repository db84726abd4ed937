// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree picking.
//!
//! Store game units with their own position type, then answer the three query kinds:
//! a selection box, everything off-screen, and units within an attack radius.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_picking`

use kurbo::Circle;
use understory_quadtree::{CellRect, Located, QuadTree};

#[derive(Debug)]
struct Unit {
    name: &'static str,
    x: f64,
    y: f64,
}

impl Located for Unit {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

fn names(units: &[&Unit]) -> Vec<&'static str> {
    units.iter().map(|u| u.name).collect()
}

fn main() {
    let mut world = QuadTree::new(CellRect::new(0, 0, 1000, 1000), 2);
    let roster = [
        ("archer", 120.0, 80.0),
        ("knight", 150.0, 95.0),
        ("scout", 400.0, 400.0),
        ("mage", 410.0, 380.0),
        ("healer", 640.0, 700.0),
        ("golem", 990.0, 990.0),
        ("edge", 300.0, 300.0),
    ];
    for (name, x, y) in roster {
        assert!(world.insert(Unit { name, x, y }));
    }
    // Outside the world: rejected.
    assert!(!world.insert(Unit {
        name: "ghost",
        x: -20.0,
        y: 10.0,
    }));
    println!("stored {} units", world.len());

    let selection = CellRect::new(100, 50, 200, 250);
    println!("selected: {:?}", names(&world.query_rect(selection)));

    // Units exactly on the viewport edge count as off-screen.
    let viewport = CellRect::new(0, 0, 800, 800);
    println!("off-screen: {:?}", names(&world.query_inverse_rect(viewport)));

    let blast = Circle::new((405.0, 390.0), 30.0);
    println!("in blast radius: {:?}", names(&world.query_circle(blast)));
}
