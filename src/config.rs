use {
  crate::{
    debounce,
    error::{Context, Result},
    generator::Params,
    geometry::Point
  },
  serde::{Deserialize, Serialize},
  std::{path::{Path, PathBuf}, time::Duration}
};

/// Below that, input controls would refuse the value. Here it is only a warning.
pub const RECOMMENDED_MIN: f64 = 10.0;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
  pub width: f64,
  pub height: f64,
  /// Total number of points, anchors and seed included.
  pub point_count: usize,
  /// `[x, y]` in canvas coordinates. Nothing but the anchors is generated without it.
  pub seed: Option<[f64; 2]>,
  /// Quiescent interval before recomputation, in interactive mode.
  pub debounce_ms: u64,
  /// Fixed generator seed, for reproducible pictures.
  pub rng_seed: Option<u64>,
  pub svg_path: Option<PathBuf>,
  pub raster_path: Option<PathBuf>,
  /// Output size of the raster export; the view box size if unset.
  pub raster_width: Option<u32>,
  pub raster_height: Option<u32>,
  pub marker_radius: f64,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      width: 300.0,
      height: 300.0,
      point_count: 10000,
      seed: None,
      debounce_ms: debounce::DEFAULT_DELAY.as_millis() as u64,
      rng_seed: None,
      svg_path: Some("sierpinski-triangle.svg".into()),
      raster_path: Some("sierpinski-triangle.png".into()),
      raster_width: None,
      raster_height: None,
      marker_radius: 1.0,
    }
  }
}

impl Config {
  pub fn load(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
      .with_context(|| format!("unable to read {}", path.display()))?;
    let config = Self::parse(&content)
      .with_context(|| format!("invalid config {}", path.display()))?;
    log::debug!("loaded {}", path.display());
    Ok(config)
  }

  pub fn parse(content: &str) -> Result<Self> {
    let config: Self = toml::from_str(content)?;
    config.warn_below_minimum();
    Ok(config)
  }

  pub fn seed_point(&self) -> Option<Point> {
    self.seed.map(Point::from)
  }

  pub fn params(&self) -> Params {
    Params::new(self.width, self.height, self.point_count)
      .with_seed(self.seed_point())
  }

  pub fn debounce(&self) -> Duration {
    Duration::from_millis(self.debounce_ms)
  }

  /// Values are passed on as they are.
  pub fn warn_below_minimum(&self) {
    [
      ("width", self.width),
      ("height", self.height),
      ("point_count", self.point_count as f64)
    ].iter()
      .filter(|(_, value)| *value < RECOMMENDED_MIN)
      .for_each(|(name, value)| log::warn!(
        "{} = {} is below the recommended minimum of {}", name, value, RECOMMENDED_MIN
      ));
  }
}
