use std::f64::consts::PI;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::geometry::geo_traits::{DistanceTo, Shape};
use crate::geometry::primitives::{Point, Rect, Size};

/// Immutable copy of a cloud: the center it was laid out around and all rectangles in order of placement.
/// Consumed read-only by renderers, exporters and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudSnapshot {
    pub center: Point,
    pub rects: Vec<Rect>,
}

impl CloudSnapshot {
    /// Smallest rectangle containing every placed rectangle, `None` for an empty cloud
    pub fn bbox(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(Rect::bounding_rect)
    }

    /// Summed area of all rectangles
    pub fn area(&self) -> i64 {
        self.rects.iter().map(|r| r.area()).sum()
    }

    /// Area of the rectangles relative to the circle whose diameter is the mean side of the bounding box.
    pub fn density(&self) -> f64 {
        match self.bbox() {
            None => 0.0,
            Some(bbox) => {
                let radius = (f64::from(bbox.width()) + f64::from(bbox.height())) / 4.0;
                self.area() as f64 / (PI * radius * radius)
            }
        }
    }

    /// Distance from the center to the farthest corner of any rectangle
    pub fn max_corner_distance(&self) -> f64 {
        self.rects
            .iter()
            .flat_map(|r| r.corners())
            .map(|c| OrderedFloat(c.distance_to(&self.center)))
            .max()
            .map_or(0.0, |d| d.into_inner())
    }

    /// Area of the rectangles relative to the circle around the center which encloses every rectangle.
    pub fn enclosing_circle_density(&self) -> f64 {
        let radius = self.max_corner_distance();
        match radius > 0.0 {
            true => self.area() as f64 / (PI * radius * radius),
            false => 0.0,
        }
    }

    /// Distance between the center of the bounding box and the center the cloud was laid out around
    pub fn center_offset(&self) -> f64 {
        self.bbox()
            .map_or(0.0, |bbox| bbox.centroid().distance_to(&self.center))
    }

    /// Rectangle sizes in order of placement
    pub fn sizes(&self) -> Vec<Size> {
        self.rects.iter().map(|r| r.size).collect_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    fn snapshot(rects: &[(i32, i32, i32, i32)]) -> CloudSnapshot {
        CloudSnapshot {
            center: Point(0, 0),
            rects: rects
                .iter()
                .map(|&(x, y, w, h)| Rect::new(Point(x, y), Size::new(w, h)))
                .collect(),
        }
    }

    #[test]
    fn empty_cloud() {
        let s = snapshot(&[]);
        assert_eq!(s.bbox(), None);
        assert_eq!(s.area(), 0);
        assert!(approx_eq!(f64, s.density(), 0.0));
        assert!(approx_eq!(f64, s.enclosing_circle_density(), 0.0));
        assert!(approx_eq!(f64, s.center_offset(), 0.0));
    }

    #[test]
    fn statistics_of_two_squares() {
        let s = snapshot(&[(-2, -2, 4, 4), (2, -2, 4, 4)]);
        assert_eq!(s.bbox(), Some(Rect::new(Point(-2, -2), Size::new(8, 4))));
        assert_eq!(s.area(), 32);
        // radius = (8 + 4) / 4 = 3
        assert!(approx_eq!(f64, s.density(), 32.0 / (PI * 9.0), epsilon = 1e-12));
        // farthest corner is (6, +-2)
        assert!(approx_eq!(f64, s.max_corner_distance(), 40f64.sqrt(), epsilon = 1e-12));
        // bbox centroid is (2, 0)
        assert!(approx_eq!(f64, s.center_offset(), 2.0, epsilon = 1e-12));
    }

    #[test]
    fn statistics_of_a_grid_wide_cloud() {
        let s = snapshot(&[(-1_073_741_823, 0, i32::MAX, 1), (0, 5, i32::MAX, 1)]);
        let bbox = s.bbox().unwrap();
        assert_eq!(bbox.width(), i32::MAX);
        assert_eq!(bbox.height(), 6);
        assert!(s.density().is_finite());
        assert!(s.max_corner_distance() > 2.0e9);
        assert!(s.center_offset().is_finite());
    }
}
