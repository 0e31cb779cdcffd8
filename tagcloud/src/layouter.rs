use std::f64::consts::TAU;

use log::{debug, trace, warn};

use crate::entities::CloudSnapshot;
use crate::error::LayoutError;
use crate::geometry::geo_traits::CollidesWith;
use crate::geometry::primitives::{Point, Rect, Size};
use crate::util::LayouterConfig;
use crate::util::assertions;

/// Places rectangles one by one around a fixed center, approximating a circular cloud.
///
/// Every new rectangle is found by walking an Archimedean spiral (angle first, then radius)
/// until a candidate position no longer collides with any placed rectangle.
/// The candidate is then pulled towards the center along the same angle for as long as it stays free.
///
/// The spiral position is *not* reset between placements: the next search resumes where the previous one
/// stopped. The radius never decreases over the lifetime of a layouter.
///
/// Every collision check is a linear scan over the placed rectangles.
/// Placing `n` rectangles is therefore `O(n^3)` in the worst case, fine for a few hundred tags.
#[derive(Debug, Clone)]
pub struct Layouter {
    center: Point,
    config: LayouterConfig,
    radius: f64,
    angle: f64,
    placed_rects: Vec<Rect>,
}

impl Layouter {
    pub fn new(center: Point) -> Self {
        Self {
            center,
            config: LayouterConfig::default(),
            radius: 0.0,
            angle: 0.0,
            placed_rects: vec![],
        }
    }

    pub fn with_config(center: Point, config: LayouterConfig) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(center)
        })
    }

    /// Places a new rectangle of `size` and returns it.
    /// The first rectangle is centered on the center of the layouter, all others are found by the spiral search.
    ///
    /// Fails with [`LayoutError::InvalidArgument`] for non-positive dimensions,
    /// with [`LayoutError::OutOfRange`] when the first rectangle does not fit on the `i32` grid and
    /// with [`LayoutError::LayoutUnreachable`] when the search budget is exhausted.
    /// On failure nothing is placed.
    pub fn place_next(&mut self, size: Size) -> Result<Rect, LayoutError> {
        if !size.is_positive() {
            return Err(LayoutError::InvalidArgument { size });
        }

        let mut budget = SearchBudget::new(self.config.max_search_steps);

        let rect = match self.placed_rects.is_empty() {
            true => {
                //radius is still 0, the first rectangle goes dead-center
                let Some(rect) = Rect::centered_on(self.center, size) else {
                    let err = LayoutError::OutOfRange {
                        center: self.center,
                        size,
                    };
                    warn!("[LAYOUTER] failed to place {size}: {err}");
                    return Err(err);
                };
                self.radius += self.config.radius_step;
                rect
            }
            false => {
                let free_rect = match self.spiral_search(size, &mut budget) {
                    Ok(free_rect) => free_rect,
                    Err(err) => {
                        warn!(
                            "[LAYOUTER] failed to place {size}: {err} (radius: {:.3}, angle: {:.3})",
                            self.radius, self.angle
                        );
                        return Err(err);
                    }
                };
                self.pull_to_center(size, free_rect, &mut budget)
            }
        };

        debug_assert!(assertions::rect_is_placeable(&rect, &self.placed_rects));
        debug_assert!(rect.size == size);

        self.placed_rects.push(rect);
        debug!(
            "[LAYOUTER] placed rect #{} of size {size} at {rect} ({} search steps)",
            self.placed_rects.len(),
            budget.used
        );

        Ok(rect)
    }

    /// Advances the spiral until the candidate at the current angle and radius is free, and returns it.
    /// Candidates which do not fit on the `i32` grid are never free.
    fn spiral_search(
        &mut self,
        size: Size,
        budget: &mut SearchBudget,
    ) -> Result<Rect, LayoutError> {
        budget.spend()?;
        loop {
            if let Some(free_rect) = self.free_candidate(size) {
                return Ok(free_rect);
            }
            while self.angle <= TAU {
                self.angle += self.config.angle_step;
                budget.spend()?;
                if let Some(free_rect) = self.free_candidate(size) {
                    return Ok(free_rect);
                }
            }
            self.angle = 0.0;
            self.radius += self.config.radius_step;
            trace!("[LAYOUTER] spiral expanded to radius {:.3}", self.radius);
            budget.spend()?;
        }
    }

    /// Walks inward from `free_rect`, the free candidate at the current spiral position, along the same angle.
    /// Keeps the last free candidate before a collision, before the rectangle's circumscribing circle
    /// has fully crossed the center or before the remaining search budget runs out.
    ///
    /// Works on a local radius, the spiral state is left untouched.
    fn pull_to_center(&self, size: Size, free_rect: Rect, budget: &mut SearchBudget) -> Rect {
        let lower_bound = -circumscribing_radius(size);
        let mut free_radius = self.radius;
        let mut free_rect = free_rect;

        loop {
            let next_radius = free_radius - self.config.radius_step;
            if next_radius <= lower_bound {
                break;
            }
            if budget.spend().is_err() {
                debug!("[LAYOUTER] search budget ran out while pulling {size} towards the center");
                break;
            }
            let next_rect = away_from_center(self.center, self.angle, next_radius, size)
                .filter(|rect| self.can_place(rect));
            let Some(next_rect) = next_rect else {
                break;
            };
            free_radius = next_radius;
            free_rect = next_rect;
        }

        trace!(
            "[LAYOUTER] pulled {size} from radius {:.3} to {:.3}",
            self.radius, free_radius
        );
        free_rect
    }

    fn free_candidate(&self, size: Size) -> Option<Rect> {
        away_from_center(self.center, self.angle, self.radius, size)
            .filter(|rect| self.can_place(rect))
    }

    /// A rectangle can be placed if it does not collide with any of the placed rectangles.
    pub fn can_place(&self, rect: &Rect) -> bool {
        !self.placed_rects.iter().any(|placed| placed.collides_with(rect))
    }

    /// Creates a read-only snapshot of the current cloud, to hand to renderers and exporters.
    pub fn save(&self) -> CloudSnapshot {
        CloudSnapshot {
            center: self.center,
            rects: self.placed_rects.clone(),
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn config(&self) -> &LayouterConfig {
        &self.config
    }

    /// Placed rectangles, in order of placement
    pub fn placed_rects(&self) -> &[Rect] {
        &self.placed_rects
    }

    pub fn n_placed(&self) -> usize {
        self.placed_rects.len()
    }

    /// Current radius of the spiral search
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current angle of the spiral search, in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// Rectangle of `size` whose circumscribing circle lies `distance` away from `center`, in the direction of `angle`.
///
/// The rectangle is centered on the point at `distance + circumscribing_radius(size)` from `center`,
/// so that its whole bounding circle clears the requested distance and not only its center.
/// Returns `None` if the rectangle does not fit on the `i32` grid.
pub fn away_from_center(center: Point, angle: f64, distance: f64, size: Size) -> Option<Rect> {
    let rect_center = center.polar_offset(angle, distance + circumscribing_radius(size))?;
    Rect::centered_on(rect_center, size)
}

/// Radius of the smallest circle centered on a rectangle of `size` which contains all four of its corners.
pub fn circumscribing_radius(size: Size) -> f64 {
    size.circumscribing_radius()
}

/// Caps the number of candidate positions evaluated for a single placement.
struct SearchBudget {
    used: usize,
    limit: usize,
}

impl SearchBudget {
    fn new(limit: usize) -> Self {
        Self { used: 0, limit }
    }

    fn spend(&mut self) -> Result<(), LayoutError> {
        if self.used >= self.limit {
            return Err(LayoutError::LayoutUnreachable { steps: self.limit });
        }
        self.used += 1;
        Ok(())
    }
}
