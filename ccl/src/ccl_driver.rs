use std::time::Instant;

use anyhow::{Context, Result};
use log::{debug, info};
use rand::Rng;
use thousands::Separable;

use tagcloud::Layouter;
use tagcloud::entities::CloudSnapshot;
use tagcloud::geometry::primitives::Size;

use crate::FIXTURE_SIZES_JSON;
use crate::config::{CCLConfig, SizeSource};
use crate::io::output::CloudStats;
use crate::samplers::uniform_size_sampler::UniformSizeSampler;

/// Feeds a stream of sizes to a [`Layouter`] and reports on the resulting cloud.
pub struct CCLDriver {
    pub config: CCLConfig,
    pub layouter: Layouter,
}

impl CCLDriver {
    pub fn new(config: CCLConfig) -> Result<Self> {
        let layouter = Layouter::with_config(config.center, config.layouter_config)?;
        Ok(Self { config, layouter })
    }

    /// Places every size in order and returns a snapshot of the cloud together with its statistics.
    /// Stops at the first size that cannot be placed.
    pub fn run(&mut self, sizes: &[Size]) -> Result<(CloudSnapshot, CloudStats)> {
        let start = Instant::now();

        for (i, &size) in sizes.iter().enumerate() {
            let rect = self
                .layouter
                .place_next(size)
                .with_context(|| format!("failed to place tag #{i}"))?;
            debug!(
                "[CCL] placed tag {}/{} at {rect}",
                self.layouter.n_placed(),
                sizes.len()
            );
        }

        let cloud = self.layouter.save();
        let stats = CloudStats::new(&cloud, start.elapsed().as_millis());

        info!(
            "[CCL] placed {} tags (total area: {}) in {}ms",
            stats.n_rects,
            stats.area.separate_with_commas(),
            stats.run_time_ms.separate_with_commas()
        );
        info!(
            "[CCL] density: {:.3}%, enclosing circle density: {:.3}%, center offset: {:.3}",
            stats.density * 100.0,
            stats.enclosing_circle_density * 100.0,
            stats.center_offset
        );

        Ok((cloud, stats))
    }
}

/// Generates the sizes described by `source`.
pub fn generate_sizes(source: &SizeSource, rng: &mut impl Rng) -> Result<Vec<Size>> {
    match *source {
        SizeSource::Fixture => serde_json::from_str(FIXTURE_SIZES_JSON)
            .context("could not parse the fixture sizes"),
        SizeSource::Random {
            n_sizes,
            min_width,
            max_width,
            min_height,
            max_height,
        } => {
            let sampler =
                UniformSizeSampler::new(min_width..max_width, min_height..max_height)?;
            Ok(sampler.sample_n(n_sizes, rng))
        }
    }
}
