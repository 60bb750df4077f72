//! Color sampling and circle rendering.
//!
//! Both are implemented on [`image::RgbImage`]: the source picture is a [`ColorSampler`], the
//! output canvas is a [`Render`] target.

use {
  crate::geometry::Circle,
  image::{Rgb, RgbImage}
};

mod impl_rgbimage;
#[cfg(test)] mod tests;

/// Returned by [`ColorSampler::average_color`] for a region outside the picture.
pub const NEUTRAL_GRAY: Rgb<u8> = Rgb([128, 128, 128]);
pub const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);

pub trait ColorSampler {
  /// Average color of the circle's bounding box, clipped to the picture.
  fn average_color(&self, circle: &Circle) -> Rgb<u8>;
}

pub trait Render {
  fn render(&mut self, circle: &Circle, style: &Style);
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Style {
  pub fill: Rgb<u8>,
  pub outline: Rgb<u8>,
  /// Width of the outline band, measured inwards from the circle edge.
  pub outline_width: u32
}

impl Style {
  /// Fill with `fill`, outline with `fill` darkened by `darken_factor`.
  pub fn outlined(fill: Rgb<u8>, darken_factor: f64, outline_width: u32) -> Self {
    Style {
      fill,
      outline: darken(fill, darken_factor),
      outline_width
    }
  }
}

/// `max(0, channel * (1 - factor))` per channel, truncated.
pub fn darken(color: Rgb<u8>, factor: f64) -> Rgb<u8> {
  let scale = 1.0 - factor;
  Rgb(color.0.map(|c| (c as f64 * scale).clamp(0.0, 255.0) as u8))
}

/// `max(1, radius / divisor)`
pub fn outline_width(radius: u32, divisor: u32) -> u32 {
  (radius / divisor.max(1)).max(1)
}

pub fn blank_canvas(width: u32, height: u32) -> RgbImage {
  RgbImage::from_pixel(width, height, BACKGROUND)
}
