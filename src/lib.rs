//! Circle mosaics: cover a canvas with non-overlapping circles, each filled with the average
//! color of the source picture beneath it.
//!
//! The placement engine lives in [`solver`], the color sampling and drawing collaborators in
//! [`drawing`]. Placement is randomized: a bucketed size distribution picks the radius, a
//! uniformly random center is tested against the canvas edges and the already placed circles,
//! and accepted circles are drawn right away. A second pass fills the gaps with small circles.
//!
//! # Basic usage
//! ```no_run
//! # use circle_mosaic::{config::Config, error::Result};
//! # fn main() -> Result<()> {
//! let config = Config::default()
//!   .with_radii(3, 25)
//!   .with_seed(0);
//! let (path, stats) = circle_mosaic::process("in.jpg", "out.png", &config)?;
//! println!("{} circles, average radius {:.1}", stats.total_circles(), stats.sizes.avg_radius);
//! # Ok(())
//! # }
//! ```
//! For an image already in memory, [`render`] takes the random source explicitly:
//! ```
//! # use {circle_mosaic::{config::Config, error::Result}, rand::SeedableRng};
//! # fn main() -> Result<()> {
//! let source = image::RgbImage::from_pixel(64, 64, image::Rgb([30, 60, 90]));
//! let rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let (canvas, stats) = circle_mosaic::render(&source, &Config::default(), rng)?;
//! assert_eq!(canvas.dimensions(), (64, 64));
//! assert!(stats.total_circles() > 0);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod config;
pub mod geometry;
pub mod sdf;
pub mod solver;
pub mod drawing;
pub mod util;

use {
  std::path::{Path, PathBuf},
  image::RgbImage,
  log::info,
  rand::{Rng, SeedableRng},
  humansize::{FileSize, file_size_opts as options},
  crate::{
    config::Config,
    error::{Result, Context},
    geometry::Bounds,
    solver::{CollisionIndex, PackingEngine, RunStatistics}
  }
};

/// Pack circles over `source`, returning a new canvas of the same dimensions.
pub fn render<R: Rng>(source: &RgbImage, config: &Config, rng: R) -> Result<(RgbImage, RunStatistics)> {
  config.validate()?;
  let bounds = Bounds::new(source.width(), source.height())?;
  let mut canvas = drawing::blank_canvas(source.width(), source.height());
  let mut index = CollisionIndex::for_config(bounds, config);
  let stats = PackingEngine::new(config.clone(), &mut index, source, &mut canvas, rng)?
    .run();
  Ok((canvas, stats))
}

/// Decode `input`, pack circles over it and encode the result to `output`.
/// The output format follows the extension of `output`.
pub fn process(
  input: impl AsRef<Path>,
  output: impl AsRef<Path>,
  config: &Config
) -> Result<(PathBuf, RunStatistics)> {
  let (input, output) = (input.as_ref(), output.as_ref());
  config.validate()?;

  let source = image::open(input)
    .with_context(|| format!("unable to open {:?}", input))?
    .to_rgb8();
  info!("image dimensions: {}x{}", source.width(), source.height());

  let rng = match config.seed {
    Some(seed) => rand_pcg::Pcg64::seed_from_u64(seed),
    None => rand_pcg::Pcg64::from_entropy()
  };
  let (canvas, stats) = render(&source, config, rng)?;

  crate::profile!("encode", {
    canvas.save(output)
      .with_context(|| format!("unable to write {:?}", output))?;
  });
  let written = std::fs::metadata(output)
    .map(|m| m.len())
    .unwrap_or(0);

  info!("output saved to {:?} ({})", output, written.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", written)));
  info!("total circles placed: {}", stats.total_circles());
  info!("smallest circle: {} px", stats.sizes.min_radius);
  info!("largest circle: {} px", stats.sizes.max_radius);
  info!("average size: {:.1} px", stats.sizes.avg_radius);
  Ok((output.to_path_buf(), stats))
}
