use serde::{Deserialize, Serialize};

use crate::error::LayoutError;

///Configuration of the spiral search performed by a [`Layouter`](crate::Layouter)
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct LayouterConfig {
    ///Distance between two consecutive rings of the spiral, also the step size of the compaction towards the center
    pub radius_step: f64,
    ///Angular increment (in radians) between two consecutive candidates on the same ring
    pub angle_step: f64,
    ///Maximum number of candidate positions evaluated for a single rectangle before giving up
    pub max_search_steps: usize,
}

impl LayouterConfig {
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !(self.radius_step.is_finite() && self.radius_step > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "radius_step must be a finite positive number, got {}",
                self.radius_step
            )));
        }
        if !(self.angle_step.is_finite() && self.angle_step > 0.0) {
            return Err(LayoutError::InvalidConfig(format!(
                "angle_step must be a finite positive number, got {}",
                self.angle_step
            )));
        }
        if self.max_search_steps == 0 {
            return Err(LayoutError::InvalidConfig(
                "max_search_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for LayouterConfig {
    fn default() -> Self {
        Self {
            radius_step: 1.0,
            angle_step: 0.01,
            max_search_steps: 50_000_000,
        }
    }
}
