#![allow(non_snake_case)]
use {
  euclid::{Box2D, Point2D, Size2D},
  image::{Pixel, Rgb, RgbImage},
  crate::{
    drawing::{ColorSampler, Render, Style, NEUTRAL_GRAY},
    geometry::{BoundingBox, Circle, PixelSpace},
    sdf::SDF
  }
};

// pixels of `image` covered by the bounding box, `None` if there are none
fn clip_to_image(circle: &Circle, image: &RgbImage) -> Option<Box2D<u32, PixelSpace>> {
  let resolution: Size2D<u32, PixelSpace> = image.dimensions().into();
  circle.bounding_box()
    .round_out()
    .intersection(&Box2D::from_size(resolution.to_f32()))
    .map(|x| x.to_u32())
}

impl ColorSampler for RgbImage {
  fn average_color(&self, circle: &Circle) -> Rgb<u8> {
    let region = match clip_to_image(circle, self) {
      Some(x) => x,
      None => return NEUTRAL_GRAY
    };
    let (sum, count) = itertools::iproduct!(region.y_range(), region.x_range())
      .fold(([0u64; 3], 0u64), |(mut sum, count), (y, x)| {
        let px = self.get_pixel(x, y);
        sum.iter_mut()
          .zip(px.0)
          .for_each(|(s, c)| *s += c as u64);
        (sum, count + 1)
      });
    if count == 0 {
      return NEUTRAL_GRAY;
    }
    Rgb(sum.map(|s| (s / count) as u8))
  }
}

impl Render for RgbImage {
  fn render(&mut self, circle: &Circle, style: &Style) {
    let region = match clip_to_image(circle, self) {
      Some(x) => x,
      None => return // bounding box has no intersection with canvas at all
    };
    let Δp = 1.0;
    let band = style.outline_width as f32;

    itertools::iproduct!(region.y_range(), region.x_range())
      .for_each(|(y, x)| {
        // sample at the pixel center
        let sdf = circle.sdf(Point2D::new(x as f32 + 0.5, y as f32 + 0.5));
        let color = if sdf > -band { style.outline } else { style.fill };
        let pixel = self.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, Δp, *pixel, color);
      });
  }
}

fn sdf_overlay_aa(sdf: f32, Δp: f32, col1: Rgb<u8>, col2: Rgb<u8>) -> Rgb<u8> {
  let Δf = (0.5 * Δp - sdf) // antialias
    .clamp(0.0, Δp);
  let alpha = Δf / Δp;
  col1.map2(&col2, |a, b| (a as f32 + (b as f32 - a as f32) * alpha).round() as u8)
}
