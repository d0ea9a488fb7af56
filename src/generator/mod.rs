//! Point sequence of the chaos game.
//!
//! The sequence is index-significant:
//! - `0..3` — anchors (top-center, bottom-left, bottom-right)
//! - `3` — the seed point
//! - `4..` — each point is the midpoint between the previous one, and a uniformly
//!   chosen anchor.

use {
  crate::geometry::{self, CanvasSpace, Point},
  euclid::Size2D,
  rand::Rng
};

#[cfg(test)] mod tests;

/// Number of anchors + seed point.
pub const PREFIX_LEN: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Params {
  pub size: Size2D<f64, CanvasSpace>,
  /// Total length of the sequence, including anchors and seed.
  pub point_count: usize,
  /// Random generation is gated on its presence.
  pub seed: Option<Point>
}

impl Params {
  pub fn new(width: f64, height: f64, point_count: usize) -> Self {
    Self {
      size: Size2D::new(width, height),
      point_count,
      seed: None
    }
  }

  pub fn with_seed(self, seed: impl Into<Option<Point>>) -> Self {
    Self { seed: seed.into(), ..self }
  }

  pub fn anchors(&self) -> [Point; 3] {
    geometry::anchors(self.size)
  }

  /// Length of the sequence [`generate`] will produce.
  pub fn sequence_len(&self) -> usize {
    match self.seed {
      Some(_) => self.point_count.max(PREFIX_LEN),
      None => 3
    }
  }
}

impl Default for Params {
  fn default() -> Self {
    Self::new(300.0, 300.0, 10000)
  }
}

/// Uniform integer in `0..=2`.
pub fn random_index(rng: &mut impl Rng) -> usize {
  rng.gen_range(0..=2)
}

/// Single step of the chaos game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Step {
  /// Index of the anchor moved towards.
  pub anchor: usize,
  pub point: Point
}

/// Infinite iterator over the generated part of the sequence.
pub struct ChaosIter<'a, R> {
  anchors: [Point; 3],
  last: Point,
  rng: &'a mut R
}

impl<'a, R: Rng> ChaosIter<'a, R> {
  pub fn new(anchors: [Point; 3], seed: Point, rng: &'a mut R) -> Self {
    Self { anchors, last: seed, rng }
  }
}

impl<R: Rng> Iterator for ChaosIter<'_, R> {
  type Item = Step;

  fn next(&mut self) -> Option<Step> {
    let anchor = random_index(&mut *self.rng);
    self.last = geometry::midpoint(self.anchors[anchor], self.last);
    Some(Step { anchor, point: self.last })
  }
}

/// Build the full sequence from scratch.
///
/// Without a seed, only the three anchors are returned. With a seed, the result has
/// exactly `max(point_count, 4)` points. Inputs are not validated: negative or zero
/// sizes produce degenerate, but well defined geometry.
pub fn generate(params: &Params, rng: &mut impl Rng) -> Vec<Point> {
  let anchors = params.anchors();
  let mut points = Vec::with_capacity(params.sequence_len());
  points.extend_from_slice(&anchors);

  let seed = match params.seed {
    Some(seed) => seed,
    None => return points
  };
  points.push(seed);
  points.extend(ChaosIter::new(anchors, seed, rng)
    .take(params.point_count.saturating_sub(PREFIX_LEN))
    .map(|step| step.point));
  points
}
