//! Parameter state driving the recomputation of the point sequence.
//!
//! Every effective change of the parameter set schedules a full recomputation, which
//! runs only after the debounce delay has elapsed without further changes. The
//! installed sequence is replaced as a whole.

use {
  crate::{
    debounce::Debouncer,
    generator::{self, Params},
    geometry::Point
  },
  euclid::Size2D,
  rand::{Rng, SeedableRng},
  rand_pcg::Pcg64,
  std::time::{Duration, Instant}
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Change {
  Width(f64),
  Height(f64),
  PointCount(usize),
  Seed(Option<Point>)
}

impl Change {
  pub fn apply(self, params: Params) -> Params {
    match self {
      Change::Width(width) => Params { size: Size2D::new(width, params.size.height), ..params },
      Change::Height(height) => Params { size: Size2D::new(params.size.width, height), ..params },
      Change::PointCount(point_count) => Params { point_count, ..params },
      Change::Seed(seed) => Params { seed, ..params }
    }
  }
}

pub struct Session<R = Pcg64> {
  params: Params,
  debouncer: Debouncer<Params>,
  installed: Option<Params>,
  points: Vec<Point>,
  recomputations: usize,
  rng: R
}

impl Session<Pcg64> {
  /// Session with an entropy-seeded generator.
  pub fn new(params: Params, delay: Duration, now: Instant) -> Self {
    Self::with_rng(params, delay, Pcg64::from_entropy(), now)
  }
}

impl<R: Rng> Session<R> {
  /// The initial computation is scheduled as any other change.
  pub fn with_rng(params: Params, delay: Duration, rng: R, now: Instant) -> Self {
    let mut debouncer = Debouncer::new(delay);
    debouncer.schedule(params, now);
    Self {
      params,
      debouncer,
      installed: None,
      points: vec![],
      recomputations: 0,
      rng
    }
  }

  /// Latest observed parameters, not necessarily computed yet.
  pub fn params(&self) -> &Params {
    &self.params
  }

  /// Parameters the installed sequence was computed from.
  pub fn installed(&self) -> Option<&Params> {
    self.installed.as_ref()
  }

  pub fn points(&self) -> &[Point] {
    &self.points
  }

  pub fn recomputations(&self) -> usize {
    self.recomputations
  }

  pub fn is_pending(&self) -> bool {
    self.debouncer.is_pending()
  }

  pub fn time_left(&self, now: Instant) -> Option<Duration> {
    self.debouncer.time_left(now)
  }

  /// Returns whether a recomputation got scheduled.
  /// A change which leaves the parameters as they were is ignored.
  pub fn update(&mut self, change: Change, now: Instant) -> bool {
    let params = change.apply(self.params);
    if params == self.params {
      return false;
    }
    self.params = params;
    if self.debouncer.schedule(params, now).is_some() {
      log::trace!("pending recomputation superseded");
    }
    true
  }

  /// Recompute, if the pending parameters are due. Returns whether it happened.
  pub fn poll(&mut self, now: Instant) -> bool {
    match self.debouncer.poll(now) {
      Some(params) => { self.recompute(params); true }
      None => false
    }
  }

  /// Recompute pending parameters right away.
  pub fn flush(&mut self) -> bool {
    match self.debouncer.cancel() {
      Some(params) => { self.recompute(params); true }
      None => false
    }
  }

  fn recompute(&mut self, params: Params) {
    let points;
    profile!("generate", points = generator::generate(&params, &mut self.rng));
    log::debug!("recomputed {} points for {}x{}, seed {:?}",
      points.len(), params.size.width, params.size.height, params.seed);
    self.points = points;
    self.installed = Some(params);
    self.recomputations += 1;
  }

  /// Exporting requires a seed point, and a computed sequence to export.
  pub fn can_export(&self) -> bool {
    self.params.seed.is_some() && self.installed.is_some()
  }

  /// Installed sequence, ready to be exported. `None` while exporting is disabled.
  #[cfg(feature = "drawing")]
  pub fn scene(&self, radius: f64) -> Option<crate::drawing::Scene> {
    use crate::drawing::{Palette, Scene};

    let installed = self.installed.as_ref().filter(|_| self.can_export())?;
    Some(Scene::with_style(installed.size, &self.points, radius, &Palette::default()))
  }
}
