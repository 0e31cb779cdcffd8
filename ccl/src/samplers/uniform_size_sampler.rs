use std::ops::Range;

use anyhow::{Result, ensure};
use rand::Rng;

use tagcloud::geometry::primitives::Size;

/// Samples tag sizes with a width and height drawn uniformly from two ranges.
#[derive(Debug, Clone)]
pub struct UniformSizeSampler {
    pub width: Range<i32>,
    pub height: Range<i32>,
}

impl UniformSizeSampler {
    pub fn new(width: Range<i32>, height: Range<i32>) -> Result<Self> {
        ensure!(
            width.start > 0 && width.start < width.end,
            "invalid width range: {width:?}"
        );
        ensure!(
            height.start > 0 && height.start < height.end,
            "invalid height range: {height:?}"
        );
        Ok(Self { width, height })
    }

    pub fn sample(&self, rng: &mut impl Rng) -> Size {
        let width = rng.random_range(self.width.clone());
        let height = rng.random_range(self.height.clone());
        Size::new(width, height)
    }

    pub fn sample_n(&self, n: usize, rng: &mut impl Rng) -> Vec<Size> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

impl Default for UniformSizeSampler {
    fn default() -> Self {
        Self {
            width: 10..100,
            height: 1..41,
        }
    }
}
