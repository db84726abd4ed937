// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The public quadtree container: construction, insertion, queries, introspection.

use alloc::vec::Vec;
use kurbo::Circle;

use crate::cells::Cell;
use crate::error::QuadTreeError;
use crate::node::Node;
use crate::types::{CellRect, Located, Window};

/// Region quadtree over point-like items.
///
/// The root covers a fixed integer rectangle. Each node stores up to `capacity` items;
/// once full, the next item routed to it causes a one-time split into four quadrants
/// and is handed down. Items already stored stay where they are.
///
/// The tree is insertion-only until [`clear`](Self::clear).
pub struct QuadTree<T> {
    capacity: usize,
    root: Node<T>,
}

impl<T> core::fmt::Debug for QuadTree<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds)
            .field("capacity", &self.capacity)
            .field("len", &self.len())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl<T> Drop for QuadTree<T> {
    fn drop(&mut self) {
        self.root.clear();
    }
}

impl<T> QuadTree<T> {
    /// Create an empty tree covering `bounds` with the given bucket capacity.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero or `bounds` has a negative width or height.
    /// Use [`try_new`](Self::try_new) to handle these cases.
    pub fn new(bounds: CellRect, capacity: usize) -> Self {
        match Self::try_new(bounds, capacity) {
            Ok(tree) => tree,
            Err(e) => panic!("invalid quadtree parameters: {e}"),
        }
    }

    /// Create an empty tree, validating the parameters.
    ///
    /// Zero-width or zero-height bounds are accepted; such a tree only accepts
    /// items on that line (or point).
    pub fn try_new(bounds: CellRect, capacity: usize) -> Result<Self, QuadTreeError> {
        if capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        if bounds.width < 0 || bounds.height < 0 {
            return Err(QuadTreeError::NegativeExtent {
                width: bounds.width,
                height: bounds.height,
            });
        }
        Ok(Self {
            capacity,
            root: Node::new(bounds),
        })
    }

    /// Bucket capacity per node.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Rectangle covered by the root.
    pub fn bounds(&self) -> CellRect {
        self.root.bounds
    }

    /// Number of stored items. Counted by a full traversal on every call.
    pub fn len(&self) -> usize {
        let mut total = 0;
        self.root.walk(|node, _| {
            total += node.bucket.len();
            true
        });
        total
    }

    /// Whether the tree stores no items.
    pub fn is_empty(&self) -> bool {
        // Items are always placed in the shallowest node with room, so the root
        // bucket is empty only when the whole tree is.
        self.root.bucket.is_empty()
    }

    /// Number of levels; 1 until the root subdivides.
    pub fn depth(&self) -> usize {
        let mut levels = 0;
        self.root.walk(|_, depth| {
            levels = levels.max(depth + 1);
            true
        });
        levels
    }

    /// Remove every item and release all subdivisions. Bounds and capacity are kept.
    pub fn clear(&mut self) {
        self.root.clear();
    }

    /// Rectangle of every node, in pre-order (root, then NW, NE, SW, SE of each node).
    pub fn cell_bounds(&self) -> Vec<CellRect> {
        let mut out = Vec::new();
        self.root.walk(|node, _| {
            out.push(node.bounds);
            true
        });
        out
    }

    /// Debug record of every node, in the same order as [`cell_bounds`](Self::cell_bounds).
    pub fn cells(&self) -> Vec<Cell> {
        let mut out = Vec::new();
        self.root.walk(|node, depth| {
            out.push(Cell::describe(
                node.bounds,
                depth,
                node.bucket.len(),
                node.is_leaf(),
                self.capacity,
            ));
            true
        });
        out
    }

    /// Collect bucket items matching `keep` from nodes accepted by `enter`.
    fn gather<'a>(
        &'a self,
        enter: impl Fn(&Node<T>) -> bool,
        keep: impl Fn(&T) -> bool,
    ) -> Vec<&'a T> {
        let mut out = Vec::new();
        self.root.walk(|node, _| {
            if !enter(node) {
                return false;
            }
            out.extend(node.bucket.iter().filter(|item| keep(item)));
            true
        });
        out
    }
}

impl<T: Located> QuadTree<T> {
    /// Insert an item.
    ///
    /// Returns `false` if its coordinate lies outside [`bounds`](Self::bounds)
    /// (edges are inside). There is no other failure; full nodes subdivide.
    pub fn insert(&mut self, item: T) -> bool {
        self.root.insert(item, self.capacity)
    }

    /// Insert every item, returning how many were accepted.
    pub fn extend_from<I: IntoIterator<Item = T>>(&mut self, items: I) -> usize {
        let mut accepted = 0;
        for item in items {
            if self.insert(item) {
                accepted += 1;
            }
        }
        accepted
    }

    /// Items strictly inside `rect`; items on its edges are excluded.
    ///
    /// Results are in traversal order: each node's items in insertion order, then its
    /// children NW, NE, SW, SE.
    pub fn query_rect(&self, rect: CellRect) -> Vec<&T> {
        let w = Window::from_cell(&rect);
        self.gather(
            |node| node.intersects(&w),
            |item| w.strictly_contains(item.x(), item.y()),
        )
    }

    /// Items outside `rect` or on its edges: exactly the items
    /// [`query_rect`](Self::query_rect) does not return.
    ///
    /// Every node is visited.
    pub fn query_inverse_rect(&self, rect: CellRect) -> Vec<&T> {
        let w = Window::from_cell(&rect);
        self.gather(|_| true, |item| !w.strictly_contains(item.x(), item.y()))
    }

    /// Items within `circle`, boundary included.
    ///
    /// Nodes are pruned against the circle's enclosing square; candidates inside the
    /// square are then checked by exact distance. A negative or NaN radius matches
    /// nothing.
    pub fn query_circle(&self, circle: Circle) -> Vec<&T> {
        if circle.radius.is_nan() || circle.radius < 0.0 {
            return Vec::new();
        }
        let square = Window::around(&circle);
        let r2 = circle.radius * circle.radius;
        let (cx, cy) = (circle.center.x, circle.center.y);
        self.gather(
            |node| node.intersects(&square),
            |item| {
                let (x, y) = (item.x(), item.y());
                if !square.contains_inclusive(x, y) {
                    return false;
                }
                let (dx, dy) = (x - cx, y - cy);
                dx * dx + dy * dy <= r2
            },
        )
    }
}
