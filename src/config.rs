use crate::error::ConfigError;

/// Flat run configuration. Every field has a default, see [`Config::default`].
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
  /// Smallest radius, both phases.
  pub min_radius: u32,
  /// Largest radius of the density-targeted phase.
  pub max_radius: u32,
  /// Multiplier on the naive area-based circle count.
  pub density_factor: f64,
  /// The density-targeted phase gives up after `target_circles * max_attempts_per_circle`
  /// candidate draws.
  pub max_attempts_per_circle: u32,
  /// Minimum clearance between two circle boundaries.
  pub buffer: f32,
  /// Prune overlap queries with a uniform grid instead of scanning every placed circle.
  pub spatial_index: bool,
  /// Seed of the random source. Drawn from OS entropy when absent.
  pub seed: Option<u64>,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      min_radius: 3,
      max_radius: 25,
      density_factor: 1.5,
      max_attempts_per_circle: 50,
      buffer: 2.0,
      spatial_index: true,
      seed: None
    }}}

impl Config {
  pub fn with_radii(mut self, min_radius: u32, max_radius: u32) -> Self {
    self.min_radius = min_radius;
    self.max_radius = max_radius;
    self
  }
  pub fn with_density_factor(mut self, density_factor: f64) -> Self {
    self.density_factor = density_factor;
    self
  }
  pub fn with_max_attempts_per_circle(mut self, attempts: u32) -> Self {
    self.max_attempts_per_circle = attempts;
    self
  }
  pub fn with_buffer(mut self, buffer: f32) -> Self {
    self.buffer = buffer;
    self
  }
  pub fn with_spatial_index(mut self, enabled: bool) -> Self {
    self.spatial_index = enabled;
    self
  }
  pub fn with_seed(mut self, seed: u64) -> Self {
    self.seed = Some(seed);
    self
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.min_radius == 0 || self.max_radius == 0 {
      return Err(ConfigError::NonPositiveRadius);
    }
    if self.min_radius >= self.max_radius {
      return Err(ConfigError::InvertedRadii { min: self.min_radius, max: self.max_radius });
    }
    if !(self.density_factor.is_finite() && self.density_factor > 0.0) {
      return Err(ConfigError::InvalidDensity(self.density_factor));
    }
    if self.max_attempts_per_circle == 0 {
      return Err(ConfigError::ZeroAttempts);
    }
    if !(self.buffer.is_finite() && self.buffer >= 0.0) {
      return Err(ConfigError::InvalidBuffer(self.buffer));
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn defaults_are_valid() {
    let config = Config::default();
    assert_eq!(config.validate(), Ok(()));
    assert_eq!((config.min_radius, config.max_radius), (3, 25));
    assert_eq!(config.density_factor, 1.5);
    assert_eq!(config.max_attempts_per_circle, 50);
    assert_eq!(config.buffer, 2.0);
  }

  #[test] fn rejects_bad_values() {
    let base = Config::default();
    assert_eq!(base.clone().with_radii(0, 5).validate(), Err(ConfigError::NonPositiveRadius));
    assert_eq!(
      base.clone().with_radii(8, 4).validate(),
      Err(ConfigError::InvertedRadii { min: 8, max: 4 })
    );
    assert!(matches!(
      base.clone().with_density_factor(f64::NAN).validate(),
      Err(ConfigError::InvalidDensity(_))
    ));
    assert_eq!(
      base.clone().with_density_factor(0.0).validate(),
      Err(ConfigError::InvalidDensity(0.0))
    );
    assert_eq!(base.clone().with_max_attempts_per_circle(0).validate(), Err(ConfigError::ZeroAttempts));
    assert_eq!(base.with_buffer(-1.0).validate(), Err(ConfigError::InvalidBuffer(-1.0)));
  }
}
