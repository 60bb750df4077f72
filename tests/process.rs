use {
  circle_mosaic::{config::Config, error::ConfigError, drawing::BACKGROUND},
  image::{ImageBuffer, Rgb, RgbImage},
  anyhow::Result
};

fn gradient(width: u32, height: u32) -> RgbImage {
  ImageBuffer::from_fn(width, height, |x, y| Rgb([
    (x * 255 / width) as u8,
    (y * 255 / height) as u8,
    128
  ]))
}

#[test]
fn writes_image_with_same_dimensions() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  let output = dir.path().join("out.png");
  gradient(120, 80).save(&input)?;

  let config = Config::default().with_seed(1);
  let (path, stats) = circle_mosaic::process(&input, &output, &config)?;

  assert_eq!(path, output);
  assert!(stats.total_circles() > 0);
  assert_eq!(stats.gap_fill_draws, stats.target_circles / 2);
  assert!(stats.sizes.min_radius >= 3.0 && stats.sizes.max_radius <= 25.0);

  let result = image::open(&output)?.to_rgb8();
  assert_eq!(result.dimensions(), (120, 80));
  // no circle reaches the very corner
  assert_eq!(*result.get_pixel(0, 0), BACKGROUND);
  assert!(result.pixels().any(|px| *px != BACKGROUND));
  Ok(())
}

#[test]
fn same_seed_same_picture() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  gradient(64, 64).save(&input)?;

  let config = Config::default().with_radii(2, 9).with_seed(5);
  let (a, stats_a) = circle_mosaic::process(&input, dir.path().join("a.png"), &config)?;
  let (b, stats_b) = circle_mosaic::process(&input, dir.path().join("b.png"), &config)?;
  assert_eq!(stats_a, stats_b);
  assert_eq!(image::open(a)?.to_rgb8(), image::open(b)?.to_rgb8());
  Ok(())
}

#[test]
fn missing_input_is_an_error() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let output = dir.path().join("out.png");
  let err = circle_mosaic::process(dir.path().join("nope.png"), &output, &Config::default())
    .unwrap_err();
  assert!(err.to_string().contains("nope.png"));
  assert!(!output.exists());
  Ok(())
}

#[test]
fn unwritable_output_is_an_error() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let input = dir.path().join("in.png");
  gradient(32, 32).save(&input)?;
  let output = dir.path().join("missing-dir").join("out.png");
  assert!(circle_mosaic::process(&input, &output, &Config::default().with_seed(0)).is_err());
  Ok(())
}

#[test]
fn invalid_config_fails_fast() -> Result<()> {
  let dir = tempfile::tempdir()?;
  let output = dir.path().join("out.png");
  // input does not exist either: configuration is checked first
  let err = circle_mosaic::process(
    dir.path().join("nope.png"),
    &output,
    &Config::default().with_radii(25, 3)
  ).unwrap_err();
  assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::InvertedRadii { min: 25, max: 3 }));
  assert!(!output.exists());
  Ok(())
}

#[test]
fn render_in_memory() -> Result<()> {
  use rand::SeedableRng;
  let source = gradient(50, 40);
  let rng = rand_pcg::Pcg64::seed_from_u64(3);
  let (canvas, stats) = circle_mosaic::render(&source, &Config::default().with_radii(3, 10), rng)?;
  assert_eq!(canvas.dimensions(), (50, 40));
  assert!(stats.density_placed as u64 <= stats.target_circles);

  let err = circle_mosaic::render(&RgbImage::new(0, 0), &Config::default(), rand_pcg::Pcg64::seed_from_u64(0))
    .unwrap_err();
  assert_eq!(err.downcast_ref::<ConfigError>(), Some(&ConfigError::EmptyCanvas { width: 0, height: 0 }));
  Ok(())
}
