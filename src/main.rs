use {
  std::{path::PathBuf, process::ExitCode},
  clap::{ArgAction, Parser, ValueHint},
  circle_mosaic::{config::Config, error}
};

#[derive(Parser, Debug)]
#[command(name = "circle-mosaic", version, about = "Redraw an image as packed, non-overlapping circles")]
struct Cli {
  /// Input image path
  #[arg(value_hint = ValueHint::FilePath)]
  input: PathBuf,
  /// Output image path, format chosen by extension
  #[arg(value_hint = ValueHint::FilePath)]
  output: PathBuf,

  /// Smallest circle radius
  #[arg(long = "min-radius", default_value_t = 3)]
  min_radius: u32,
  /// Largest circle radius
  #[arg(long = "max-radius", default_value_t = 25)]
  max_radius: u32,
  /// Multiplier on the area-based circle count
  #[arg(long = "density", default_value_t = 1.5)]
  density_factor: f64,
  /// Attempt budget per target circle
  #[arg(long = "attempts", default_value_t = 50)]
  max_attempts_per_circle: u32,
  /// Clearance between circles, in pixels
  #[arg(long = "buffer", default_value_t = 2.0)]
  buffer: f32,
  /// Scan every placed circle on overlap checks instead of using the grid
  #[arg(long = "no-grid", action = ArgAction::SetTrue)]
  no_grid: bool,
  /// Seed for reproducible output
  #[arg(long = "seed")]
  seed: Option<u64>,
}

fn build_config(cli: &Cli) -> Config {
  let cfg = Config::default()
    .with_radii(cli.min_radius, cli.max_radius)
    .with_density_factor(cli.density_factor)
    .with_max_attempts_per_circle(cli.max_attempts_per_circle)
    .with_buffer(cli.buffer)
    .with_spatial_index(!cli.no_grid);
  match cli.seed {
    Some(seed) => cfg.with_seed(seed),
    None => cfg
  }
}

fn main() -> ExitCode {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
  let cli = Cli::parse();
  match circle_mosaic::process(&cli.input, &cli.output, &build_config(&cli)) {
    Ok(_) => ExitCode::SUCCESS,
    Err(e) => {
      error::display(&e);
      ExitCode::FAILURE
    }
  }
}
