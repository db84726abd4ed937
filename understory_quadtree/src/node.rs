// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree nodes: bucket storage, one-time subdivision, and traversal.

use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

use crate::types::{CellRect, Located, Window};

/// Child order used everywhere: north-west, north-east, south-west, south-east.
pub(crate) type Quadrants<T> = Box<[Node<T>; 4]>;

pub(crate) struct Node<T> {
    pub(crate) bounds: CellRect,
    pub(crate) bucket: Vec<T>,
    pub(crate) children: Option<Quadrants<T>>,
}

impl<T> Node<T> {
    pub(crate) const fn new(bounds: CellRect) -> Self {
        Self {
            bounds,
            bucket: Vec::new(),
            children: None,
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    pub(crate) fn contains(&self, x: f64, y: f64) -> bool {
        self.bounds.contains(x, y)
    }

    /// Overlap test used for pruning.
    ///
    /// Each axis is confirmed on its own by four edge-inclusive checks: either span's
    /// min or max edge falling inside the other span. Touching edges overlap.
    pub(crate) fn intersects(&self, w: &Window) -> bool {
        let x0 = self.bounds.min_x() as f64;
        let x1 = self.bounds.max_x() as f64;
        let y0 = self.bounds.min_y() as f64;
        let y1 = self.bounds.max_y() as f64;

        let horizontal = (w.min_x >= x0 && w.min_x <= x1)
            || (x0 >= w.min_x && x0 <= w.max_x)
            || (w.max_x >= x0 && w.max_x <= x1)
            || (x1 >= w.min_x && x1 <= w.max_x);
        let vertical = (w.min_y >= y0 && w.min_y <= y1)
            || (y0 >= w.min_y && y0 <= w.max_y)
            || (w.max_y >= y0 && w.max_y <= y1)
            || (y1 >= w.min_y && y1 <= w.max_y);
        horizontal && vertical
    }

    /// Split into four children. Existing bucket items stay here.
    pub(crate) fn subdivide(&mut self) {
        debug_assert!(self.children.is_none(), "node subdivided twice");
        self.children = Some(Box::new(self.bounds.quadrants().map(Self::new)));
    }

    /// Pre-order walk (self, then NW, NE, SW, SE). `enter` returns whether to descend
    /// into the node's children.
    pub(crate) fn walk<'a>(&'a self, mut enter: impl FnMut(&'a Self, usize) -> bool) {
        let mut stack = vec![(self, 0_usize)];
        while let Some((node, depth)) = stack.pop() {
            if !enter(node, depth) {
                continue;
            }
            if let Some(children) = node.children.as_deref() {
                stack.extend(children.iter().rev().map(|c| (c, depth + 1)));
            }
        }
    }

    /// Empty the bucket and release every descendant.
    ///
    /// Subtrees are unlinked level by level so dropping a very deep tree does not
    /// recurse through `Box` drops.
    pub(crate) fn clear(&mut self) {
        self.bucket.clear();
        let mut pending: Vec<Quadrants<T>> = self.children.take().into_iter().collect();
        while let Some(mut quads) = pending.pop() {
            pending.extend(quads.iter_mut().filter_map(|q| q.children.take()));
        }
    }
}

impl<T: Located> Node<T> {
    /// Store `item` in this subtree.
    ///
    /// Returns `false` if the coordinate is outside this node. Otherwise the item goes
    /// into the first node on the way down with bucket room; full leaves subdivide and
    /// the item moves to the first child (NW, NE, SW, SE) that contains it.
    pub(crate) fn insert(&mut self, item: T, capacity: usize) -> bool {
        let (x, y) = (item.x(), item.y());
        if !self.contains(x, y) {
            return false;
        }
        let mut node = self;
        loop {
            if node.bucket.len() < capacity {
                node.bucket.push(item);
                return true;
            }
            if node.is_leaf() {
                node.subdivide();
            }
            let Some(children) = node.children.as_deref_mut() else {
                return false;
            };
            match children.iter_mut().find(|c| c.contains(x, y)) {
                Some(child) => node = child,
                None => return false,
            }
        }
    }
}
