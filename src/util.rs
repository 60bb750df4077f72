/// Time a block, log the elapsed milliseconds at `debug` level and return the block's value.
#[macro_export]
macro_rules! profile(
  ($title: literal, $body: block) => {{
    let t0 = std::time::Instant::now();
    let ret = $body;
    ::log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Percentage of `part` in `total`, 0 when `total` is 0.
pub fn percent(part: u64, total: u64) -> f64 {
  if total == 0 { return 0.0; }
  part as f64 / total as f64 * 100.0
}
