//! Circle placement: radius distribution, collision index and the two-phase packing engine.

pub mod size_distribution;
pub use size_distribution::{SizeDistribution, SizeBucket, sample_radius};

pub mod collision;
pub use collision::CollisionIndex;

pub mod engine;
pub use engine::{PackingEngine, Phase};

pub mod stats;
pub use stats::{RunStatistics, SizeStats};


use crate::{config::Config, geometry::Bounds};

impl CollisionIndex {
  /// Empty index for a run, with a grid of `2 * max_radius` cells if enabled.
  pub fn for_config(bounds: Bounds, config: &Config) -> Self {
    let index = CollisionIndex::new(bounds, config.buffer);
    if config.spatial_index {
      index.with_grid(2.0 * config.max_radius as f32)
    } else {
      index
    }
  }
}
