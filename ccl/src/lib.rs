use std::sync::LazyLock;
use std::time::Instant;

pub mod ccl_driver;
pub mod config;
pub mod io;
pub mod samplers;

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Sizes of the reference tag cloud, in order of placement
pub const FIXTURE_SIZES_JSON: &str = include_str!("../../assets/fixture_sizes.json");
