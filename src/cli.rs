//! Export and interactive command handling behind the `chaos-game` binary.

use {
  crate::{
    command::Command,
    config::Config,
    drawing::{save_raster, save_svg, Palette, Scene},
    error::{bail, Error, Result},
    generator::generate,
    geometry::{self, CanvasSpace, PixelSpace, Viewport},
    session::{Change, Session}
  },
  euclid::{Box2D, Size2D},
  rand::Rng,
  std::{path::PathBuf, time::Instant}
};

/// Configured raster size, the missing side deduced from the aspect ratio of the view box.
pub fn resolution(config: &Config, view_box: Box2D<f64, CanvasSpace>)
  -> Option<Size2D<u32, PixelSpace>>
{
  let natural = geometry::natural_resolution(view_box).to_f64();
  let aspect = natural.height / natural.width.max(1.0);
  match (config.raster_width, config.raster_height) {
    (Some(w), Some(h)) => Some(Size2D::new(w, h)),
    (Some(w), None) => Some(Size2D::new(w, (w as f64 * aspect).round() as u32)),
    (None, Some(h)) => Some(Size2D::new((h as f64 / aspect.max(f64::EPSILON)).round() as u32, h)),
    (None, None) => None
  }
}

pub fn export(
  scene: &Scene,
  config: &Config,
  svg_path: Option<&PathBuf>,
  raster_path: Option<&PathBuf>
) -> Result<()> {
  if let Some(path) = svg_path {
    save_svg(scene, path)?;
  }
  if let Some(path) = raster_path {
    profile!("rasterize", let _ = save_raster(scene, path, resolution(config, scene.view_box))?);
  }
  Ok(())
}

/// Generate the configured sequence and write it to the configured paths.
/// Returns whether anything got exported, which needs a seed point.
pub fn once(config: &Config, rng: &mut impl Rng) -> Result<bool> {
  let params = config.params();
  let points;
  profile!("generate", points = generate(&params, rng));
  log::info!("{} points on {}x{} canvas", points.len(), params.size.width, params.size.height);

  if params.seed.is_none() {
    log::warn!("no seed point configured, nothing to export");
    return Ok(false);
  }
  let scene = Scene::with_style(params.size, &points, config.marker_radius, &Palette::default());
  export(&scene, config, config.svg_path.as_ref(), config.raster_path.as_ref())?;
  Ok(true)
}

/// Installed sequence after a pending recomputation, if any, has run.
fn exportable<R: Rng>(session: &mut Session<R>, config: &Config) -> Result<Scene> {
  session.flush();
  session.scene(config.marker_radius)
    .ok_or_else(|| Error::msg("no seed point yet, nothing to export"))
}

/// Run one interactive command. `Quit` is left to the caller.
pub fn execute<R: Rng>(
  command: Command,
  session: &mut Session<R>,
  config: &Config,
  now: Instant
) -> Result<()> {
  match command {
    Command::Change(change) => {
      session.update(change, now);
    }
    Command::Click(pixel) => {
      let view_box = geometry::view_box(session.params().size);
      let resolution = resolution(config, view_box)
        .unwrap_or_else(|| geometry::natural_resolution(view_box));
      let seed = match Viewport::new(view_box, resolution).to_canvas(pixel) {
        Some(seed) => seed,
        None => bail!("surface has no area, unable to place a seed")
      };
      log::info!("seed at ({}, {})", seed.x, seed.y);
      session.update(Change::Seed(Some(seed)), now);
    }
    Command::ExportSvg(path) => {
      let scene = exportable(session, config)?;
      export(&scene, config, path.or_else(|| config.svg_path.clone()).as_ref(), None)?;
    }
    Command::ExportRaster(path) => {
      let scene = exportable(session, config)?;
      export(&scene, config, None, path.or_else(|| config.raster_path.clone()).as_ref())?;
    }
    Command::Show => {
      let params = session.params();
      log::info!("{}x{}, {} points, seed {:?}, {} installed, {}",
        params.size.width, params.size.height, params.point_count, params.seed,
        session.points().len(),
        if session.is_pending() { "recomputation pending" } else { "up to date" });
    }
    Command::Quit => {}
  }
  Ok(())
}
