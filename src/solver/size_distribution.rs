use {
  std::ops::RangeInclusive,
  anyhow::Result,
  rand::{
    Rng,
    distributions::{Distribution, WeightedIndex}
  }
};

/// Bucket bounds as offsets from `min_radius`; `None` extends the bucket up to `max_radius`.
/// Widths are 3, 5, 5, 5, remainder.
pub const BUCKET_OFFSETS: [(u32, Option<u32>); 5] = [
  (0, Some(3)),
  (3, Some(8)),
  (8, Some(13)),
  (13, Some(18)),
  (18, None)
];

/// Selection weights, small to large.
pub const BUCKET_WEIGHTS: [f64; 5] = [0.20, 0.30, 0.30, 0.15, 0.05];

#[derive(Debug, Clone, PartialEq)]
pub struct SizeBucket {
  pub range: RangeInclusive<u32>,
  pub weight: f64
}

/// Weighted, bucketed radius distribution biased toward medium sizes.
///
/// ```
/// # use {circle_mosaic::solver::SizeDistribution, rand::{Rng, SeedableRng}};
/// let sizes = SizeDistribution::new(3, 25)?;
/// let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
/// let r = rng.sample(&sizes);
/// assert!((3..=25).contains(&r));
/// # anyhow::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct SizeDistribution {
  buckets: Vec<SizeBucket>,
  index: WeightedIndex<f64>
}

impl SizeDistribution {
  /// Buckets are clamped to `max_radius` at both ends, so a narrow range collapses the upper
  /// buckets onto `max_radius` instead of leaving them empty.
  pub fn new(min_radius: u32, max_radius: u32) -> Result<Self> {
    let max_radius = max_radius.max(min_radius);
    let clamp = |offset: u32| min_radius.saturating_add(offset).min(max_radius);
    let buckets = BUCKET_OFFSETS.iter()
      .zip(BUCKET_WEIGHTS)
      .map(|(&(lo, hi), weight)| SizeBucket {
        range: clamp(lo) ..= hi.map_or(max_radius, |hi| clamp(hi - 1).max(clamp(lo))),
        weight
      })
      .collect::<Vec<_>>();
    let index = WeightedIndex::new(buckets.iter().map(|b| b.weight))?;
    Ok(Self { buckets, index })
  }

  pub fn buckets(&self) -> &[SizeBucket] {
    &self.buckets
  }
}

impl Distribution<u32> for SizeDistribution {
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
    let bucket = &self.buckets[self.index.sample(rng)];
    rng.gen_range(bucket.range.clone())
  }
}

/// One-off draw from a freshly built [`SizeDistribution`].
pub fn sample_radius<R: Rng + ?Sized>(rng: &mut R, min_radius: u32, max_radius: u32) -> Result<u32> {
  Ok(SizeDistribution::new(min_radius, max_radius)?.sample(rng))
}
