use {
  euclid::{Point2D, Size2D},
  crate::geometry::{Circle, PixelSpace},
  num_traits::Float
};

/// Signed distance function
pub trait SDF<T> {
  fn sdf(&self, pixel: Point2D<T, PixelSpace>) -> T;
}

impl SDF<f32> for Circle {
  fn sdf(&self, pixel: Point2D<f32, PixelSpace>) -> f32 {
    pixel.distance_to(self.center) - self.radius
  }
}

/// Distance to the edges of image. Positive inside, negative outside.
pub fn boundary_rect<T: Float>(size: Size2D<T, PixelSpace>, pixel: Point2D<T, PixelSpace>) -> T {
  pixel.x
    .min(size.width - pixel.x)
    .min(pixel.y)
    .min(size.height - pixel.y)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn circle_distance() {
    let c = Circle::new(10.0, 10.0, 4.0);
    assert_eq!(c.sdf(Point2D::new(10.0, 10.0)), -4.0);
    assert_eq!(c.sdf(Point2D::new(14.0, 10.0)), 0.0);
    assert_eq!(c.sdf(Point2D::new(10.0, 20.0)), 6.0);
  }

  #[test] fn boundary() {
    let size = Size2D::new(100.0f32, 50.0);
    assert_eq!(boundary_rect(size, Point2D::new(50.0, 25.0)), 25.0);
    assert_eq!(boundary_rect(size, Point2D::new(3.0, 25.0)), 3.0);
    assert_eq!(boundary_rect(size, Point2D::new(50.0, 49.0)), 1.0);
    assert!(boundary_rect(size, Point2D::new(-1.0, 25.0)) < 0.0);
  }
}
