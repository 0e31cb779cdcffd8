use serde::{Deserialize, Serialize};

use tagcloud::LayouterConfig;
use tagcloud::geometry::primitives::Point;

use crate::io::svg_util::SvgDrawOptions;

/// Configuration for the Circular Cloud Layouter driver
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct CCLConfig {
    /// Configuration of the spiral search
    #[serde(default)]
    pub layouter_config: LayouterConfig,
    /// Point the cloud is laid out around
    #[serde(default)]
    pub center: Point,
    /// Where the sizes of the tags come from, unless a sizes file is provided on the command line
    #[serde(default)]
    pub size_source: SizeSource,
    /// Seed for the PRNG (random sizes and stroke colors). If undefined, the driver will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SizeSource {
    /// The 50 sizes of the reference tag cloud
    #[default]
    Fixture,
    /// `n_sizes` sizes sampled uniformly, bounds are inclusive-exclusive
    Random {
        n_sizes: usize,
        min_width: i32,
        max_width: i32,
        min_height: i32,
        max_height: i32,
    },
}

impl SizeSource {
    pub fn random(n_sizes: usize) -> Self {
        SizeSource::Random {
            n_sizes,
            min_width: 10,
            max_width: 100,
            min_height: 1,
            max_height: 41,
        }
    }
}

impl Default for CCLConfig {
    fn default() -> Self {
        Self {
            layouter_config: LayouterConfig::default(),
            center: Point(0, 0),
            size_source: SizeSource::Fixture,
            prng_seed: Some(0),
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
