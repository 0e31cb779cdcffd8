use std::fmt::{Display, Formatter};
use std::ops::Div;

use serde::{Deserialize, Serialize};

/// Width and height of an axis-aligned rectangle.
///
/// Any integer pair can be represented, only sizes with strictly positive dimensions can be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Size { width, height }
    }

    /// Both dimensions are strictly positive
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn area(&self) -> i64 {
        self.width as i64 * self.height as i64
    }

    /// Radius of the circle through the four corners of a rectangle of this size, centered on its own center.
    /// The half-dimensions are truncated to integers first, the same way [`Size`] is halved when centering a rectangle.
    pub fn circumscribing_radius(&self) -> f64 {
        let Size { width, height } = *self / 2;
        (width as f64).hypot(height as f64)
    }
}

/// Divides both dimensions, truncating towards zero.
impl Div<i32> for Size {
    type Output = Size;

    fn div(self, rhs: i32) -> Size {
        Size::new(self.width / rhs, self.height / rhs)
    }
}

impl Display for Size {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
