//! Rendering collaborators: the point sequence, displayed as one disc per point.
//!
//! Anchors, seed and generated points are colored by their position in the sequence.
//! Two backends are provided: [`svg`] (vector) and [`raster`] (RGBA image).

use {
  crate::geometry::{self, CanvasSpace, Point},
  euclid::{Box2D, Size2D},
  image::Rgba
};

pub mod svg;
pub mod raster;

pub use raster::{Canvas, save_raster};
pub use svg::save_svg;

pub trait Draw<Backend> {
  fn draw(&self, backend: &mut Backend);
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Role {
  Anchor,
  Seed,
  Generated
}

impl Role {
  pub fn of(index: usize) -> Self {
    match index {
      0..=2 => Role::Anchor,
      3 => Role::Seed,
      _ => Role::Generated
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Palette {
  pub anchor: Rgba<u8>,
  pub seed: Rgba<u8>,
  pub generated: Rgba<u8>
}

impl Default for Palette {
  fn default() -> Self {
    Self {
      anchor: Rgba([255, 0, 0, 255]),
      seed: Rgba([0, 255, 0, 255]),
      generated: Rgba([0, 0, 0, 255])
    }
  }
}

impl Palette {
  pub fn color(&self, role: Role) -> Rgba<u8> {
    match role {
      Role::Anchor => self.anchor,
      Role::Seed => self.seed,
      Role::Generated => self.generated
    }
  }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Marker {
  pub center: Point,
  pub radius: f64,
  pub color: Rgba<u8>
}

/// Everything needed to render a point sequence: the view box and one marker per point.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
  pub view_box: Box2D<f64, CanvasSpace>,
  pub markers: Vec<Marker>
}

impl Scene {
  pub fn new(size: Size2D<f64, CanvasSpace>, points: &[Point]) -> Self {
    Self::with_style(size, points, 1.0, &Palette::default())
  }

  pub fn with_style(
    size: Size2D<f64, CanvasSpace>,
    points: &[Point],
    radius: f64,
    palette: &Palette
  ) -> Self {
    let markers = points.iter()
      .enumerate()
      .map(|(index, &center)| Marker {
        center,
        radius,
        color: palette.color(Role::of(index))
      })
      .collect();
    Self { view_box: geometry::view_box(size), markers }
  }

  pub fn natural_resolution(&self) -> Size2D<u32, geometry::PixelSpace> {
    geometry::natural_resolution(self.view_box)
  }
}
