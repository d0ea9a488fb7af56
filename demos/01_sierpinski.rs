/// Render the default scene: 300x300 canvas, 10000 points, seed in the middle of the
/// bottom edge. Writes both the vector and the raster picture.

use {
  chaos_game::{
    drawing::{save_raster, save_svg, Scene},
    generator::{generate, Params},
    geometry::Point
  },
  anyhow::Result,
  rand::prelude::*
};

fn main() -> Result<()> {
  let params = Params::default()
    .with_seed(Point::new(150.0, 300.0));
  let mut rng = rand_pcg::Pcg64::from_entropy();
  let points = generate(&params, &mut rng);

  let scene = Scene::new(params.size, &points);
  save_svg(&scene, "out.svg")?;
  save_raster(&scene, "out.png", Some([2048, 2048].into()))?;
  open::that("out.png")?;
  Ok(())
}
