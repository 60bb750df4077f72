//! .
//!
//! The origin of coordinate system is in top-left corner, one unit per pixel.

use {
  euclid::{Box2D, Point2D, Size2D, Vector2D as V2},
  crate::{
    error::ConfigError,
    sdf::{self, SDF}
  }
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f32, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// A placed (or candidate) disk. Never mutated once placed.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Circle {
  pub center: P2,
  pub radius: f32
}

impl Circle {
  pub fn new(x: f32, y: f32, radius: f32) -> Self {
    Circle { center: P2::new(x, y), radius }
  }

  /// True when the boundaries are closer than `buffer`.
  pub fn overlaps(&self, other: &Circle, buffer: f32) -> bool {
    other.sdf(self.center) < self.radius + buffer
  }
}

impl BoundingBox<f32, PixelSpace> for Circle {
  fn bounding_box(&self) -> Box2D<f32, PixelSpace> {
    let r = V2::splat(self.radius);
    Box2D::new(self.center - r, self.center + r)
  }
}

/// Canvas bounds, fixed for the lifetime of a run.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
  pub size: Size2D<u32, PixelSpace>
}

impl Bounds {
  pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
    if width == 0 || height == 0 {
      return Err(ConfigError::EmptyCanvas { width, height });
    }
    Ok(Bounds { size: Size2D::new(width, height) })
  }

  pub fn width(&self) -> u32 { self.size.width }
  pub fn height(&self) -> u32 { self.size.height }
  pub fn area(&self) -> f64 { self.size.to_f64().area() }

  /// Whether any center exists for a disk of this radius.
  pub fn fits_radius(&self, radius: u32) -> bool {
    radius.saturating_mul(2) <= self.width() && radius.saturating_mul(2) <= self.height()
  }

  /// `center ± radius` lies within `[0, width] × [0, height]`.
  pub fn contains(&self, circle: &Circle) -> bool {
    sdf::boundary_rect(self.size.to_f32(), circle.center) >= circle.radius
  }
}
