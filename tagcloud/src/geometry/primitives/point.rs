use std::fmt::{Display, Formatter};
use std::ops::Add;

use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::DistanceTo;

/// Point on the integer grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point(pub i32, pub i32);

impl Point {
    /// Point at `distance` from `self` in the direction of `angle` (radians, counter-clockwise from the positive x-axis).
    /// Each coordinate offset is rounded to the nearest integer, ties to even.
    ///
    /// Returns `None` if the resulting point does not fit on the `i32` grid.
    pub fn polar_offset(&self, angle: f64, distance: f64) -> Option<Point> {
        let shift = |coord: i32, offset: f64| {
            //`as` saturates, the checked add catches anything beyond the i32 range
            let moved = i64::from(coord).checked_add(offset.round_ties_even() as i64)?;
            i32::try_from(moved).ok()
        };
        Some(Point(
            shift(self.0, distance * angle.cos())?,
            shift(self.1, distance * angle.sin())?,
        ))
    }
}

impl DistanceTo<Point> for Point {
    fn sq_distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.0) - f64::from(other.0);
        let dy = f64::from(self.1) - f64::from(other.1);
        dx * dx + dy * dy
    }
}

impl Add<Point> for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn polar_offset_rounds_ties_to_even() {
        let center = Point(10, -3);
        assert_eq!(center.polar_offset(0.0, 2.5), Some(Point(12, -3)));
        assert_eq!(center.polar_offset(0.0, 3.5), Some(Point(14, -3)));
        assert_eq!(center.polar_offset(PI, 2.5), Some(Point(8, -3)));
    }

    #[test]
    fn polar_offset_quarter_turn() {
        assert_eq!(Point(0, 0).polar_offset(PI / 2.0, 7.0), Some(Point(0, 7)));
    }

    #[test]
    fn polar_offset_off_the_grid() {
        assert_eq!(Point(i32::MAX - 10, 0).polar_offset(0.0, 11.0), None);
        assert_eq!(Point(0, i32::MIN).polar_offset(-PI / 2.0, 1.0), None);
        assert_eq!(Point(0, 0).polar_offset(0.0, f64::MAX), None);
        assert_eq!(
            Point(i32::MAX - 10, 0).polar_offset(0.0, 10.0),
            Some(Point(i32::MAX, 0))
        );
    }

    #[test]
    fn distance_between_far_points_does_not_overflow() {
        let d = Point(i32::MIN, 0).distance_to(&Point(i32::MAX, 0));
        assert!(approx_eq!(f64, d, u32::MAX as f64, epsilon = 1e-3));
    }
}
