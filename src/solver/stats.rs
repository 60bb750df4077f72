use crate::geometry::Circle;

/// Radius summary of a placed-set. All zero for an empty set.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct SizeStats {
  pub total_circles: usize,
  pub min_radius: f32,
  pub max_radius: f32,
  pub avg_radius: f32
}

impl SizeStats {
  pub fn from_circles(circles: &[Circle]) -> Self {
    if circles.is_empty() {
      return Self::default();
    }
    let (min, max, sum) = circles.iter()
      .map(|c| c.radius)
      .fold((f32::MAX, f32::MIN, 0f64), |(min, max, sum), r| (min.min(r), max.max(r), sum + r as f64));
    SizeStats {
      total_circles: circles.len(),
      min_radius: min,
      max_radius: max,
      avg_radius: (sum / circles.len() as f64) as f32
    }
  }
}

/// Read-only summary of a finished run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RunStatistics {
  pub sizes: SizeStats,
  pub target_circles: u64,
  /// Circles placed by the density-targeted phase. They come first in the placed-set.
  pub density_placed: usize,
  pub density_attempts: u64,
  pub gap_fill_placed: usize,
  pub gap_fill_draws: u64
}

impl RunStatistics {
  pub fn total_circles(&self) -> usize {
    self.sizes.total_circles
  }
}
