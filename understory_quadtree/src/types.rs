// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types: integer cell rectangles, the item coordinate contract,
//! and the real-valued query window used during traversal.

use kurbo::{Circle, Point, Rect};

/// Integer axis-aligned rectangle, stored as origin and size.
///
/// Node bounds and query rectangles use this type. Edges are derived with saturating
/// arithmetic, so rectangles near `i64::MAX` clamp rather than wrap.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CellRect {
    /// Minimum x (left).
    pub x: i64,
    /// Minimum y (top).
    pub y: i64,
    /// Extent along x.
    pub width: i64,
    /// Extent along y.
    pub height: i64,
}

impl CellRect {
    /// Create a rectangle from origin and size.
    pub const fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Left edge.
    pub const fn min_x(&self) -> i64 {
        self.x
    }

    /// Top edge.
    pub const fn min_y(&self) -> i64 {
        self.y
    }

    /// Right edge, `x + width`.
    pub const fn max_x(&self) -> i64 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge, `y + height`.
    pub const fn max_y(&self) -> i64 {
        self.y.saturating_add(self.height)
    }

    /// Whether the point lies inside this rectangle, inclusive on all four edges.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.min_x() as f64
            && x <= self.max_x() as f64
            && y >= self.min_y() as f64
            && y <= self.max_y() as f64
    }

    /// Split into the four quadrants `[NW, NE, SW, SE]`.
    ///
    /// The split column and row are `floor(width / 2)` and `floor(height / 2)`; the
    /// east and south quadrants take the remainder, so the four parts tile `self`
    /// with no gaps and no overlapping area.
    pub const fn quadrants(&self) -> [Self; 4] {
        let half_w = self.width.div_euclid(2);
        let half_h = self.height.div_euclid(2);
        let rest_w = self.width - half_w;
        let rest_h = self.height - half_h;
        let mid_x = self.x.saturating_add(half_w);
        let mid_y = self.y.saturating_add(half_h);
        [
            Self::new(self.x, self.y, half_w, half_h),
            Self::new(mid_x, self.y, rest_w, half_h),
            Self::new(self.x, mid_y, half_w, rest_h),
            Self::new(mid_x, mid_y, rest_w, rest_h),
        ]
    }

    /// Convert to a Kurbo rectangle (`x0, y0, x1, y1`).
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            self.min_x() as f64,
            self.min_y() as f64,
            self.max_x() as f64,
            self.max_y() as f64,
        )
    }
}

impl From<CellRect> for Rect {
    fn from(r: CellRect) -> Self {
        r.to_rect()
    }
}

/// Anything with a readable 2D coordinate can be stored in a
/// [`QuadTree`](crate::QuadTree).
///
/// Coordinates are read at insert and query time and must not change while the item
/// is stored. Items with NaN coordinates are never accepted by `insert`.
pub trait Located {
    /// Horizontal coordinate.
    fn x(&self) -> f64;
    /// Vertical coordinate.
    fn y(&self) -> f64;
}

impl Located for Point {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }
}

impl Located for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }

    fn y(&self) -> f64 {
        self.1
    }
}

impl Located for [f64; 2] {
    fn x(&self) -> f64 {
        self[0]
    }

    fn y(&self) -> f64 {
        self[1]
    }
}

impl<L: Located + ?Sized> Located for &L {
    fn x(&self) -> f64 {
        (**self).x()
    }

    fn y(&self) -> f64 {
        (**self).y()
    }
}

/// Real-valued query window (min/max corners) used to prune traversal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Window {
    pub(crate) min_x: f64,
    pub(crate) min_y: f64,
    pub(crate) max_x: f64,
    pub(crate) max_y: f64,
}

impl Window {
    pub(crate) fn from_cell(r: &CellRect) -> Self {
        Self {
            min_x: r.min_x() as f64,
            min_y: r.min_y() as f64,
            max_x: r.max_x() as f64,
            max_y: r.max_y() as f64,
        }
    }

    /// The square enclosing `circle`.
    pub(crate) fn around(circle: &Circle) -> Self {
        Self {
            min_x: circle.center.x - circle.radius,
            min_y: circle.center.y - circle.radius,
            max_x: circle.center.x + circle.radius,
            max_y: circle.center.y + circle.radius,
        }
    }

    /// Open-interior test: points on any edge are outside.
    pub(crate) fn strictly_contains(&self, x: f64, y: f64) -> bool {
        x > self.min_x && x < self.max_x && y > self.min_y && y < self.max_y
    }

    /// Closed test: points on any edge are inside.
    pub(crate) fn contains_inclusive(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}
