// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction errors.

/// Reasons a [`QuadTree`](crate::QuadTree) cannot be built.
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum QuadTreeError {
    /// Bucket capacity must hold at least one item, otherwise every insert would
    /// subdivide forever.
    #[error("bucket capacity must be at least 1")]
    ZeroCapacity,
    /// The root rectangle has a negative width or height.
    #[error("root bounds have negative extent ({width} x {height})")]
    NegativeExtent {
        /// Requested width.
        width: i64,
        /// Requested height.
        height: i64,
    },
}
