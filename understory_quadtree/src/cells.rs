// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Debug records describing the tree's current shape.

use crate::types::CellRect;

bitflags::bitflags! {
    /// State of a single node, as reported by [`QuadTree::cells`](crate::QuadTree::cells).
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct CellFlags: u8 {
        /// The node has not subdivided.
        const LEAF     = 0b0000_0001;
        /// The node stores at least one item directly.
        const OCCUPIED = 0b0000_0010;
        /// The node's bucket is at capacity; the next item routed here goes to a child.
        const FULL     = 0b0000_0100;
    }
}

/// One node of the tree, flattened for inspection or drawing.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// Rectangle owned by the node.
    pub bounds: CellRect,
    /// Distance from the root (root is 0).
    pub depth: usize,
    /// Items stored directly in this node, excluding descendants.
    pub items: usize,
    /// Leaf/occupancy flags.
    pub flags: CellFlags,
}

impl Cell {
    pub(crate) fn describe(
        bounds: CellRect,
        depth: usize,
        items: usize,
        leaf: bool,
        capacity: usize,
    ) -> Self {
        let mut flags = CellFlags::empty();
        flags.set(CellFlags::LEAF, leaf);
        flags.set(CellFlags::OCCUPIED, items > 0);
        flags.set(CellFlags::FULL, items >= capacity);
        Self {
            bounds,
            depth,
            items,
            flags,
        }
    }

    /// True if the node has not subdivided.
    pub fn is_leaf(&self) -> bool {
        self.flags.contains(CellFlags::LEAF)
    }
}
