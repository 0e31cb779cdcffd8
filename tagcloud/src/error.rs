use thiserror::Error;

use crate::geometry::primitives::{Point, Size};

/// Reasons why a [`Layouter`](crate::Layouter) refuses a request.
///
/// None of these leave the layouter in a modified state: no rectangle is placed when an error is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// The requested size has a non-positive width or height.
    #[error("invalid rectangle size {size}: width and height must be positive")]
    InvalidArgument { size: Size },

    /// The first rectangle, centered on `center`, would have an edge off the `i32` grid.
    #[error("a rectangle of size {size} centered on {center} does not fit on the i32 grid")]
    OutOfRange { center: Point, size: Size },

    /// The spiral search evaluated `steps` candidates without finding a free position.
    #[error("no free position found after {steps} search steps")]
    LayoutUnreachable { steps: usize },

    #[error("invalid layouter configuration: {0}")]
    InvalidConfig(String),
}
