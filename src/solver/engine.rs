use {
  anyhow::Result,
  log::info,
  rand::Rng,
  crate::{
    config::Config,
    drawing::{self, ColorSampler, Render, Style},
    geometry::{Bounds, Circle},
    solver::{CollisionIndex, SizeDistribution, RunStatistics, SizeStats},
    util
  }
};

/// Gap-fill radii are drawn from `[min_radius, min_radius + GAP_FILL_SPAN]`.
pub const GAP_FILL_SPAN: u32 = 5;
pub const PLACED_REPORT_INTERVAL: usize = 50;
pub const ATTEMPT_REPORT_INTERVAL: u64 = 1000;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
  /// Sized circles until the target count or the attempt budget is reached.
  DensityTarget,
  /// A fixed number of small-circle draws.
  GapFill,
  Done
}

/// Outline styling of a phase.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PhaseStyle {
  pub darken_factor: f64,
  pub stroke_divisor: u32
}

impl Phase {
  pub fn style(self) -> PhaseStyle {
    match self {
      Phase::DensityTarget => PhaseStyle { darken_factor: 0.4, stroke_divisor: 5 },
      _ => PhaseStyle { darken_factor: 0.3, stroke_divisor: 6 }
    }
  }
}

/// `floor(canvas_area / avg_circle_area * density_factor)`, where the average circle has the
/// mean of both radii.
pub fn target_circles(bounds: Bounds, config: &Config) -> u64 {
  let avg_radius = (config.min_radius as f64 + config.max_radius as f64) / 2.0;
  let avg_area = std::f64::consts::PI * avg_radius * avg_radius;
  (bounds.area() / avg_area * config.density_factor).floor() as u64
}

/// Randomized two-phase circle packing.
///
/// The engine borrows the placed-set, the color source and the render target for the duration
/// of a run; randomness comes only from the injected `rng`.
pub struct PackingEngine<'a, R, S: ?Sized, D: ?Sized> {
  config: Config,
  index: &'a mut CollisionIndex,
  sampler: &'a S,
  canvas: &'a mut D,
  rng: R,
  sizes: SizeDistribution,
  phase: Phase,
  target_circles: u64,
  max_total_attempts: u64,
  gap_fill_attempts: u64,
  density_placed: usize,
  density_attempts: u64,
  gap_fill_placed: usize,
  gap_fill_draws: u64
}

impl<'a, R, S, D> PackingEngine<'a, R, S, D>
  where R: Rng,
        S: ColorSampler + ?Sized,
        D: Render + ?Sized
{
  /// Fails on an invalid configuration, before anything is placed.
  pub fn new(
    config: Config,
    index: &'a mut CollisionIndex,
    sampler: &'a S,
    canvas: &'a mut D,
    rng: R
  ) -> Result<Self> {
    config.validate()?;
    let sizes = SizeDistribution::new(config.min_radius, config.max_radius)?;
    let target_circles = target_circles(index.bounds(), &config);
    Ok(Self {
      max_total_attempts: target_circles.saturating_mul(config.max_attempts_per_circle as u64),
      gap_fill_attempts: target_circles / 2,
      target_circles,
      config,
      index,
      sampler,
      canvas,
      rng,
      sizes,
      phase: Phase::DensityTarget,
      density_placed: 0,
      density_attempts: 0,
      gap_fill_placed: 0,
      gap_fill_draws: 0
    })
  }

  pub fn phase(&self) -> Phase { self.phase }
  pub fn target_circles(&self) -> u64 { self.target_circles }
  pub fn max_total_attempts(&self) -> u64 { self.max_total_attempts }
  pub fn gap_fill_attempts(&self) -> u64 { self.gap_fill_attempts }
  pub fn placed(&self) -> &[Circle] { self.index.circles() }

  /// Draw one candidate, or move to the next phase once the current one is exhausted.
  /// Returns the phase the engine is in afterwards.
  pub fn step(&mut self) -> Phase {
    match self.phase {
      Phase::DensityTarget => {
        if (self.density_placed as u64) < self.target_circles
          && self.density_attempts < self.max_total_attempts {
          self.density_step();
        } else {
          info!(
            "density phase finished: {}/{} circles in {} attempts",
            self.density_placed, self.target_circles, self.density_attempts
          );
          info!("filling gaps with smaller circles, {} draws", self.gap_fill_attempts);
          self.phase = Phase::GapFill;
        }
      }
      Phase::GapFill => {
        if self.gap_fill_draws < self.gap_fill_attempts {
          self.gap_fill_step();
        } else {
          info!("gap fill finished: {} circles in {} draws", self.gap_fill_placed, self.gap_fill_draws);
          self.phase = Phase::Done;
        }
      }
      Phase::Done => {}
    }
    self.phase
  }

  /// Run both phases to completion.
  pub fn run(mut self) -> RunStatistics {
    info!("placing up to {} circles, {} attempts at most", self.target_circles, self.max_total_attempts);
    crate::profile!("density phase", {
      while self.phase == Phase::DensityTarget { self.step(); }
    });
    crate::profile!("gap fill", {
      while self.phase == Phase::GapFill { self.step(); }
    });
    self.statistics()
  }

  pub fn statistics(&self) -> RunStatistics {
    RunStatistics {
      sizes: SizeStats::from_circles(self.index.circles()),
      target_circles: self.target_circles,
      density_placed: self.density_placed,
      density_attempts: self.density_attempts,
      gap_fill_placed: self.gap_fill_placed,
      gap_fill_draws: self.gap_fill_draws
    }
  }

  fn density_step(&mut self) {
    let radius = self.rng.sample(&self.sizes);
    if let Some(circle) = self.candidate(radius) {
      self.place(circle, Phase::DensityTarget);
      self.density_placed += 1;
      if self.density_placed % PLACED_REPORT_INTERVAL == 0 {
        info!("circles placed: {}/{}", self.density_placed, self.target_circles);
      }
    }
    self.density_attempts += 1;
    if self.density_attempts % ATTEMPT_REPORT_INTERVAL == 0 {
      info!(
        "attempts: {}, success rate: {:.1}%",
        self.density_attempts,
        util::percent(self.density_placed as u64, self.density_attempts)
      );
    }
  }

  fn gap_fill_step(&mut self) {
    let min = self.config.min_radius;
    let radius = self.rng.gen_range(min ..= min.saturating_add(GAP_FILL_SPAN));
    if let Some(circle) = self.candidate(radius) {
      self.place(circle, Phase::GapFill);
      self.gap_fill_placed += 1;
    }
    self.gap_fill_draws += 1;
  }

  /// A uniformly random center such that the disk lies in bounds, if the collision index accepts
  /// it. No center exists when the canvas is narrower than the diameter.
  fn candidate(&mut self, radius: u32) -> Option<Circle> {
    let bounds = self.index.bounds();
    if !bounds.fits_radius(radius) {
      return None;
    }
    let x = self.rng.gen_range(radius ..= bounds.width() - radius);
    let y = self.rng.gen_range(radius ..= bounds.height() - radius);
    let circle = Circle::new(x as f32, y as f32, radius as f32);
    self.index.can_place(&circle).then(|| circle)
  }

  fn place(&mut self, circle: Circle, phase: Phase) {
    let PhaseStyle { darken_factor, stroke_divisor } = phase.style();
    let style = Style::outlined(
      self.sampler.average_color(&circle),
      darken_factor,
      drawing::outline_width(circle.radius as u32, stroke_divisor)
    );
    self.canvas.render(&circle, &style);
    self.index.insert(circle);
  }
}
