use crate::geometry::primitives::{Point, Rect};

/// Trait for types that can detect collisions between `Self` and `T`.
pub trait CollidesWith<T> {
    fn collides_with(&self, other: &T) -> bool;
}

/// Trait for types that can compute the euclidean distance between `Self` and `T`.
pub trait DistanceTo<T> {
    fn distance_to(&self, other: &T) -> f64 {
        self.sq_distance_to(other).sqrt()
    }

    /// Squared version of [DistanceTo::distance_to]
    fn sq_distance_to(&self, other: &T) -> f64;
}

/// Trait for shared properties of geometric primitives.
pub trait Shape {
    /// Geometric center of the shape, truncated to the integer grid
    fn centroid(&self) -> Point;

    /// Area of the interior of the shape
    fn area(&self) -> i64;

    /// Bounding box of the shape
    fn bbox(&self) -> Rect;
}
