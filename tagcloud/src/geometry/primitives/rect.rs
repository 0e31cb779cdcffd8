use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{CollidesWith, Shape};
use crate::geometry::primitives::{Point, Size};

/// Axis-aligned rectangle on the integer grid.
///
/// Covers the half-open region `[x_min, x_max) x [y_min, y_max)`:
/// two rectangles which only share an edge touch, but do not collide.
///
/// Rectangles built with [`Rect::try_new`] or [`Rect::centered_on`] have their far edges on the `i32` grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Rect { origin, size }
    }

    /// Returns `None` if `x_max` or `y_max` would fall off the `i32` grid.
    pub fn try_new(origin: Point, size: Size) -> Option<Self> {
        origin.0.checked_add(size.width)?;
        origin.1.checked_add(size.height)?;
        Some(Rect::new(origin, size))
    }

    /// Rectangle of `size` whose center (truncated to the grid) lies on `center`.
    /// Returns `None` if any of its edges falls off the `i32` grid.
    pub fn centered_on(center: Point, size: Size) -> Option<Self> {
        let half = size / 2;
        let origin = Point(
            center.0.checked_sub(half.width)?,
            center.1.checked_sub(half.height)?,
        );
        Rect::try_new(origin, size)
    }

    pub fn x_min(&self) -> i32 {
        self.origin.0
    }

    pub fn y_min(&self) -> i32 {
        self.origin.1
    }

    pub fn x_max(&self) -> i32 {
        self.origin.0 + self.size.width
    }

    pub fn y_max(&self) -> i32 {
        self.origin.1 + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Returns the four corners of `self`, counter-clockwise starting from the top right.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point(self.x_max(), self.y_max()),
            Point(self.x_min(), self.y_max()),
            Point(self.x_min(), self.y_min()),
            Point(self.x_max(), self.y_min()),
        ]
    }

    /// Returns the smallest rectangle that contains both `a` and `b`.
    /// Its width and height saturate at `i32::MAX`.
    pub fn bounding_rect(a: Rect, b: Rect) -> Rect {
        let x_min = i32::min(a.x_min(), b.x_min());
        let y_min = i32::min(a.y_min(), b.y_min());
        let x_max = i32::max(a.x_max(), b.x_max());
        let y_max = i32::max(a.y_max(), b.y_max());
        Rect::new(
            Point(x_min, y_min),
            Size::new(x_max.saturating_sub(x_min), y_max.saturating_sub(y_min)),
        )
    }
}

impl CollidesWith<Rect> for Rect {
    #[inline(always)]
    fn collides_with(&self, other: &Rect) -> bool {
        other.x_min() < self.x_max()
            && self.x_min() < other.x_max()
            && other.y_min() < self.y_max()
            && self.y_min() < other.y_max()
    }
}

impl Shape for Rect {
    fn centroid(&self) -> Point {
        self.origin + Point(self.size.width / 2, self.size.height / 2)
    }

    fn area(&self) -> i64 {
        self.size.area()
    }

    fn bbox(&self) -> Rect {
        *self
    }
}

impl Display for Rect {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[x_min: {}, y_min: {}, x_max: {}, y_max: {}]",
            self.x_min(),
            self.y_min(),
            self.x_max(),
            self.y_max()
        )
    }
}
