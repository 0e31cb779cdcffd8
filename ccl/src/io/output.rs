use serde::{Deserialize, Serialize};

use tagcloud::entities::CloudSnapshot;
use tagcloud::geometry::primitives::Rect;

use crate::config::CCLConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct CCLOutput {
    pub config: CCLConfig,
    pub cloud: CloudSnapshot,
    pub stats: CloudStats,
}

/// Summary of a finished cloud
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CloudStats {
    pub n_rects: usize,
    pub bbox: Option<Rect>,
    pub area: i64,
    pub density: f64,
    pub enclosing_circle_density: f64,
    pub center_offset: f64,
    pub run_time_ms: u128,
}

impl CloudStats {
    pub fn new(cloud: &CloudSnapshot, run_time_ms: u128) -> Self {
        Self {
            n_rects: cloud.rects.len(),
            bbox: cloud.bbox(),
            area: cloud.area(),
            density: cloud.density(),
            enclosing_circle_density: cloud.enclosing_circle_density(),
            center_offset: cloud.center_offset(),
            run_time_ms,
        }
    }
}
