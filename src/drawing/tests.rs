use {
  super::*,
  crate::geometry::Circle,
  image::{Rgb, RgbImage}
};

fn split_image() -> RgbImage {
  // left half red, right half blue
  RgbImage::from_fn(20, 10, |x, _| if x < 10 { Rgb([255, 0, 0]) } else { Rgb([0, 0, 255]) })
}

#[test] fn average_uniform() {
  let image = RgbImage::from_pixel(16, 16, Rgb([10, 20, 30]));
  assert_eq!(image.average_color(&Circle::new(8.0, 8.0, 3.0)), Rgb([10, 20, 30]));
}

#[test] fn average_is_truncated_mean() {
  let image = split_image();
  // bounding box x in [5, 15), 5 red and 5 blue columns
  assert_eq!(image.average_color(&Circle::new(10.0, 5.0, 5.0)), Rgb([127, 0, 127]));
  // x in [0, 10) only, clipped on the left
  assert_eq!(image.average_color(&Circle::new(2.0, 5.0, 8.0)), Rgb([255, 0, 0]));
}

#[test] fn average_clips_to_canvas() {
  let image = split_image();
  // covers the whole picture
  assert_eq!(image.average_color(&Circle::new(10.0, 5.0, 100.0)), Rgb([127, 0, 127]));
}

#[test] fn average_of_empty_region_is_gray() {
  let image = split_image();
  assert_eq!(image.average_color(&Circle::new(-50.0, -50.0, 10.0)), NEUTRAL_GRAY);
  assert_eq!(image.average_color(&Circle::new(40.0, 5.0, 10.0)), NEUTRAL_GRAY);
  assert_eq!(RgbImage::new(0, 0).average_color(&Circle::new(0.0, 0.0, 5.0)), NEUTRAL_GRAY);
}

#[test] fn darken_factor() {
  assert_eq!(darken(Rgb([200, 100, 40]), 0.25), Rgb([150, 75, 30]));
  assert_eq!(darken(Rgb([200, 100, 41]), 0.5), Rgb([100, 50, 20]));
  assert_eq!(darken(Rgb([200, 100, 40]), 2.0), Rgb([0, 0, 0]));
  assert_eq!(darken(Rgb([200, 100, 40]), 0.0), Rgb([200, 100, 40]));
}

#[test] fn stroke_width() {
  assert_eq!(outline_width(3, 5), 1);
  assert_eq!(outline_width(12, 5), 2);
  assert_eq!(outline_width(25, 5), 5);
  assert_eq!(outline_width(30, 6), 5);
  assert_eq!(outline_width(5, 6), 1);
}

#[test] fn outlined_style() {
  let style = Style::outlined(Rgb([200, 100, 40]), 0.5, 3);
  assert_eq!(style.outline, Rgb([100, 50, 20]));
  assert_eq!(style.outline_width, 3);
}

#[test] fn render_fill_and_outline() {
  let mut canvas = blank_canvas(20, 20);
  let style = Style {
    fill: Rgb([0, 200, 0]),
    outline: Rgb([0, 0, 0]),
    outline_width: 2
  };
  canvas.render(&Circle::new(10.0, 10.0, 5.0), &style);

  assert_eq!(*canvas.get_pixel(10, 10), style.fill);
  assert_eq!(*canvas.get_pixel(9, 9), style.fill);
  // pixel center (10.5, 6.5) is 1.46 inside the edge
  assert_eq!(*canvas.get_pixel(10, 6), style.outline);
  // outside the disk
  assert_eq!(*canvas.get_pixel(0, 0), BACKGROUND);
  assert_eq!(*canvas.get_pixel(19, 19), BACKGROUND);
  assert_eq!(*canvas.get_pixel(10, 16), BACKGROUND);
}

#[test] fn render_outside_canvas_is_noop() {
  let mut canvas = blank_canvas(8, 8);
  let style = Style::outlined(Rgb([0, 0, 0]), 0.4, 1);
  canvas.render(&Circle::new(-20.0, -20.0, 5.0), &style);
  assert!(canvas.pixels().all(|px| *px == BACKGROUND));
}
