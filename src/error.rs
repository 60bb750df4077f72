//! Error types.
//!
//! Everything fallible in this crate returns [`anyhow::Result`]. Invalid configurations are
//! reported as a [`ConfigError`] inside it, so callers that care can downcast:
//! ```
//! # use circle_mosaic::{config::Config, error::ConfigError};
//! let err = Config::default().with_radii(10, 10).validate().unwrap_err();
//! assert!(matches!(err, ConfigError::InvertedRadii { min: 10, max: 10 }));
//! ```

pub use anyhow::{Result, Context};

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
  #[error("radii must be positive")]
  NonPositiveRadius,
  #[error("min_radius ({min}) must be smaller than max_radius ({max})")]
  InvertedRadii { min: u32, max: u32 },
  #[error("density factor must be a positive finite number, got {0}")]
  InvalidDensity(f64),
  #[error("max_attempts_per_circle must be at least 1")]
  ZeroAttempts,
  #[error("buffer margin must be a non-negative finite number, got {0}")]
  InvalidBuffer(f32),
  #[error("canvas must not be empty, got {width}x{height}")]
  EmptyCanvas { width: u32, height: u32 },
}

/// Print the error with its chain of causes to stderr, and return the message.
pub fn display(error: &anyhow::Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  eprint!("{}", msg);
  msg
}
