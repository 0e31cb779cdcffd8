//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

use itertools::Itertools;
use log::error;

use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::Rect;

/// `rect` does not collide with any of `placed`
pub fn rect_is_placeable(rect: &Rect, placed: &[Rect]) -> bool {
    match placed.iter().find(|p| p.collides_with(rect)) {
        Some(p) => {
            error!("{rect} collides with placed rect {p}");
            false
        }
        None => true,
    }
}

/// No pair of rectangles in `rects` collides
pub fn no_overlap(rects: &[Rect]) -> bool {
    match rects
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.collides_with(*b))
    {
        Some((a, b)) => {
            error!("{a} collides with {b}");
            false
        }
        None => true,
    }
}
