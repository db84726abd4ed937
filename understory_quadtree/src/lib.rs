// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a bucketed region quadtree for point-like items.
//!
//! Understory Quadtree is a small building block for proximity and range lookups
//! over points in a fixed integer coordinate space (screen or world cells).
//!
//! - Insert any item implementing [`Located`]; items outside the root bounds are rejected.
//! - Query items strictly inside a rectangle, outside-or-on a rectangle, or within a circle.
//! - Inspect the current subdivision with [`QuadTree::cell_bounds`] and [`QuadTree::cells`].
//!
//! Nodes hold up to `capacity` items. When a full node receives another item it splits
//! once into four quadrants (north-west, north-east, south-west, south-east) and hands the
//! item down; items it already holds stay put. The tree is insertion-only until
//! [`QuadTree::clear`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Circle, Point};
//! use understory_quadtree::{CellRect, QuadTree};
//!
//! let mut tree = QuadTree::new(CellRect::new(0, 0, 100, 100), 1);
//! assert!(tree.insert(Point::new(10.0, 10.0)));
//! assert!(tree.insert(Point::new(20.0, 20.0)));
//! assert!(tree.insert(Point::new(80.0, 80.0)));
//! assert!(!tree.insert(Point::new(120.0, 5.0)));
//! assert_eq!(tree.len(), 3);
//!
//! // Strictly inside the north-west quarter.
//! let hits = tree.query_rect(CellRect::new(0, 0, 50, 50));
//! assert_eq!(hits.len(), 2);
//!
//! // Everything on or outside that rectangle.
//! let rest = tree.query_inverse_rect(CellRect::new(0, 0, 50, 50));
//! assert_eq!(rest, vec![&Point::new(80.0, 80.0)]);
//!
//! // Boundary of the circle counts.
//! let near = tree.query_circle(Circle::new((80.0, 70.0), 10.0));
//! assert_eq!(near.len(), 1);
//!
//! // Root plus one split.
//! assert_eq!(tree.cell_bounds().len(), 5);
//! ```
//!
//! ## Query semantics
//!
//! - [`QuadTree::query_rect`]: open rectangle, `x < px < x + w` and `y < py < y + h`.
//!   Subtrees whose bounds do not touch the rectangle are skipped.
//! - [`QuadTree::query_inverse_rect`]: the complement of `query_rect`; every node is visited.
//! - [`QuadTree::query_circle`]: Euclidean distance `<= radius`, pruned by the enclosing square.
//!
//! Results borrow from the tree and come back in traversal order (a node's own items, then
//! its children NW, NE, SW, SE), not sorted.
//!
//! ### Float semantics
//!
//! Item coordinates are `f64`. Items with NaN coordinates are rejected by `insert`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod cells;
pub mod error;
mod node;
pub mod tree;
pub mod types;

pub use cells::{Cell, CellFlags};
pub use error::QuadTreeError;
pub use tree::QuadTree;
pub use types::{CellRect, Located};
