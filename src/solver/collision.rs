use {
  std::ops::Range,
  euclid::{Box2D, Vector2D as V2},
  crate::geometry::{Bounds, Circle, PixelSpace}
};

/// Owns the placed-set and answers overlap queries against it.
///
/// Check-then-act: [`insert`](Self::insert) does not re-validate, callers must have called
/// [`can_place`](Self::can_place) first. Only sound with a single writer.
#[derive(Debug, Clone)]
pub struct CollisionIndex {
  bounds: Bounds,
  buffer: f32,
  circles: Vec<Circle>,
  grid: Option<Grid>
}

impl CollisionIndex {
  /// Index scanning every placed circle on each query.
  pub fn new(bounds: Bounds, buffer: f32) -> Self {
    CollisionIndex {
      bounds,
      buffer: buffer.max(0.0),
      circles: vec![],
      grid: None
    }
  }

  /// Prune queries with a uniform grid of `cell_size` square cells.
  pub fn with_grid(mut self, cell_size: f32) -> Self {
    let mut grid = Grid::new(self.bounds, cell_size);
    self.circles.iter()
      .enumerate()
      .for_each(|(id, circle)| grid.insert(id, circle));
    self.grid = Some(grid);
    self
  }

  pub fn bounds(&self) -> Bounds { self.bounds }
  pub fn buffer(&self) -> f32 { self.buffer }
  pub fn has_grid(&self) -> bool { self.grid.is_some() }

  /// Placed circles, in placement order.
  pub fn circles(&self) -> &[Circle] { &self.circles }
  pub fn len(&self) -> usize { self.circles.len() }
  pub fn is_empty(&self) -> bool { self.circles.is_empty() }

  pub fn into_circles(self) -> Vec<Circle> { self.circles }

  /// Candidate fits inside the canvas and keeps `buffer` clearance from every placed circle.
  pub fn can_place(&self, candidate: &Circle) -> bool {
    if !self.bounds.contains(candidate) {
      return false;
    }
    match &self.grid {
      Some(grid) => grid.neighbours(candidate, self.buffer)
        .all(|id| !candidate.overlaps(&self.circles[id], self.buffer)),
      None => self.circles.iter()
        .all(|placed| !candidate.overlaps(placed, self.buffer))
    }
  }

  pub fn insert(&mut self, circle: Circle) {
    let id = self.circles.len();
    if let Some(grid) = &mut self.grid {
      grid.insert(id, &circle);
    }
    self.circles.push(circle);
  }
}

/// Circle ids bucketed by the cell containing their center. Centers outside the canvas are
/// clamped to the border cells.
#[derive(Debug, Clone)]
struct Grid {
  cell_size: f32,
  columns: usize,
  rows: usize,
  cells: Vec<Vec<usize>>,
  max_radius: f32
}

impl Grid {
  fn new(bounds: Bounds, cell_size: f32) -> Self {
    let cell_size = if cell_size.is_finite() { cell_size.max(1.0) } else { 1.0 };
    let columns = ((bounds.width() as f32 / cell_size).ceil() as usize).max(1);
    let rows = ((bounds.height() as f32 / cell_size).ceil() as usize).max(1);
    Grid {
      cell_size,
      columns,
      rows,
      cells: vec![vec![]; columns * rows],
      max_radius: 0.0
    }
  }

  fn cell_span(&self, domain: Box2D<f32, PixelSpace>) -> (Range<usize>, Range<usize>) {
    let to_cell = |v: f32, count: usize| ((v / self.cell_size).floor().max(0.0) as usize).min(count - 1);
    (
      to_cell(domain.min.x, self.columns) .. to_cell(domain.max.x, self.columns) + 1,
      to_cell(domain.min.y, self.rows) .. to_cell(domain.max.y, self.rows) + 1
    )
  }

  fn insert(&mut self, id: usize, circle: &Circle) {
    let (xs, ys) = self.cell_span(Box2D::new(circle.center, circle.center));
    let cell = ys.start * self.columns + xs.start;
    self.cells[cell].push(id);
    self.max_radius = self.max_radius.max(circle.radius);
  }

  /// Ids of every circle that could be closer than `buffer` to `candidate`.
  fn neighbours<'a>(&'a self, candidate: &Circle, buffer: f32) -> impl Iterator<Item = usize> + 'a {
    let reach = candidate.radius + self.max_radius + buffer;
    let reach = V2::splat(reach);
    let domain = Box2D::new(candidate.center - reach, candidate.center + reach);
    let (xs, ys) = self.cell_span(domain);
    itertools::iproduct!(ys, xs)
      .flat_map(move |(y, x)| self.cells[y * self.columns + x].iter().copied())
  }
}
