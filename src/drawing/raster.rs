#![allow(non_snake_case)]
//! Raster backend. The view box is fitted into the requested resolution, markers are
//! drawn as anti-aliased discs.

use {
  super::{Draw, Marker, Scene},
  crate::{
    error::{Context, Result},
    geometry::{CanvasSpace, PixelSpace, P2, Viewport},
    util::human_size
  },
  euclid::{Box2D, Size2D, Vector2D as V2},
  image::{DynamicImage, ImageFormat, Pixel, Rgba, RgbaImage, RgbImage},
  std::path::Path
};

pub struct Canvas {
  pub image: RgbaImage,
  pub viewport: Viewport
}

impl Canvas {
  /// Transparent canvas.
  pub fn new(view_box: Box2D<f64, CanvasSpace>, resolution: Size2D<u32, PixelSpace>) -> Self {
    Self {
      image: RgbaImage::new(resolution.width, resolution.height),
      viewport: Viewport::new(view_box, resolution)
    }
  }

  /// Empty canvas with the same mapping.
  fn layer(&self) -> Self {
    Self::new(self.viewport.view_box, self.viewport.resolution)
  }
}

// alpha coverage of one pixel, Δp = 1 in pixel space
fn sdf_overlay_aa(sdf: f64, mut col1: Rgba<u8>, mut col2: Rgba<u8>) -> Rgba<u8> {
  let alpha = (0.5 - sdf).clamp(0.0, 1.0);
  // overlay blending with premultiplied alpha
  col2.0[3] = ((col2.0[3] as f64) * alpha) as u8;
  col1.blend(&col2);
  col1
}

impl Draw<Canvas> for Marker {
  fn draw(&self, canvas: &mut Canvas) {
    let center = canvas.viewport.to_pixel(self.center);
    let r = self.radius * canvas.viewport.scale();
    let Δ = V2::splat(r + 0.5);
    let screen = Box2D::from_size(canvas.viewport.resolution.to_f64());
    let bounding_box = match Box2D::new(center - Δ, center + Δ)
      .round_out()
      .intersection(&screen) {
      Some(x) => x.to_u32(),
      None => return // marker has no intersection with screen at all
    };

    itertools::iproduct!(bounding_box.y_range(), bounding_box.x_range())
      .for_each(|(y, x)| {
        let pixel_center = P2::<PixelSpace>::new(x as f64 + 0.5, y as f64 + 0.5);
        let sdf = (pixel_center - center).length() - r;
        if sdf >= 0.5 {
          return;
        }
        let pixel = canvas.image.get_pixel_mut(x, y);
        *pixel = sdf_overlay_aa(sdf, *pixel, self.color);
      });
  }
}

/// Markers are split between threads, each one drawing on its own layer.
/// Layers are then composited in sequence order.
/// Will use `resolution.x * resolution.y * num_threads * 4` bytes of memory.
impl Draw<Canvas> for Scene {
  fn draw(&self, canvas: &mut Canvas) {
    use rayon::prelude::*;

    if self.markers.is_empty() {
      return;
    }
    let num_threads = rayon::current_num_threads().max(1);
    let chunk_len = (self.markers.len() + num_threads - 1) / num_threads;

    let layers = self.markers
      .par_chunks(chunk_len)
      .map(|chunk| {
        let mut layer = canvas.layer();
        chunk.iter().for_each(|marker| marker.draw(&mut layer));
        layer.image
      })
      .collect::<Vec<_>>();

    layers.iter().for_each(|layer|
      image::imageops::overlay(&mut canvas.image, layer, 0, 0)
    );
  }
}

/// Render the scene with explicit output dimensions,
/// or the view box size when `resolution` is `None`.
pub fn rasterize(scene: &Scene, resolution: Option<Size2D<u32, PixelSpace>>) -> RgbaImage {
  let resolution = resolution.unwrap_or_else(|| scene.natural_resolution());
  let mut canvas = Canvas::new(scene.view_box, resolution);
  scene.draw(&mut canvas);
  canvas.image
}

/// Composite onto an opaque background, for formats without alpha channel.
pub fn flatten(image: &RgbaImage, background: Rgba<u8>) -> RgbImage {
  RgbImage::from_fn(image.width(), image.height(), |x, y| {
    let mut pixel = background;
    pixel.blend(image.get_pixel(x, y));
    pixel.to_rgb()
  })
}

/// Format is deduced from the file extension. Returns the number of bytes written.
pub fn save_raster(
  scene: &Scene,
  path: impl AsRef<Path>,
  resolution: Option<Size2D<u32, PixelSpace>>
) -> Result<u64> {
  let path = path.as_ref();
  let format = ImageFormat::from_path(path)
    .with_context(|| format!("unsupported image format: {}", path.display()))?;
  let image = rasterize(scene, resolution);
  let image = match format {
    ImageFormat::Png => DynamicImage::ImageRgba8(image),
    _ => DynamicImage::ImageRgb8(flatten(&image, Rgba([255, 255, 255, 255])))
  };
  image.save_with_format(path, format)
    .with_context(|| format!("unable to write {}", path.display()))?;
  let len = std::fs::metadata(path)?.len();
  log::info!("{} written, {}x{}, {}", path.display(), image.width(), image.height(), human_size(len));
  Ok(len)
}
