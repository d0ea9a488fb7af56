//! .
//!
//! The origin of canvas coordinate system is in top-left corner, `y` grows downwards.
//! A canvas of size `(width, height)` is displayed through a view box padded by one unit
//! on every side, so that markers placed on the edges are not clipped.

use {
  euclid::{Point2D, Box2D, Size2D, Vector2D as V2},
  num_traits::Float
};


/// Canvas coordinate basis, the one points are generated in
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSpace;
/// Pixel coordinate basis of a rendered surface
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PixelSpace;

pub type Point = Point2D<f64, CanvasSpace>;
pub type P2<S = CanvasSpace> = Point2D<f64, S>;

/// Padding of the view box around the canvas.
pub const VIEW_BOX_MARGIN: f64 = 1.0;

/// `((x1 + x2) / 2, (y1 + y2) / 2)`
pub fn midpoint<T: Float, S>(a: Point2D<T, S>, b: Point2D<T, S>) -> Point2D<T, S> {
  let two = T::one() + T::one();
  Point2D::new((a.x + b.x) / two, (a.y + b.y) / two)
}

/// Vertices of the triangle: top-center, bottom-left, bottom-right.
pub fn anchors(size: Size2D<f64, CanvasSpace>) -> [Point; 3] {
  [
    Point::new(size.width / 2.0, 0.0),
    Point::new(0.0, size.height),
    Point::new(size.width, size.height),
  ]
}

/// `-1 -1 (width + 2) (height + 2)`
pub fn view_box(size: Size2D<f64, CanvasSpace>) -> Box2D<f64, CanvasSpace> {
  Box2D::new(
    Point2D::splat(-VIEW_BOX_MARGIN),
    Point2D::new(size.width + VIEW_BOX_MARGIN, size.height + VIEW_BOX_MARGIN)
  )
}

/// Size of the view box, rounded up to whole pixels.
pub fn natural_resolution(view_box: Box2D<f64, CanvasSpace>) -> Size2D<u32, PixelSpace> {
  let size = view_box.size();
  Size2D::new(size.width.max(0.0).ceil() as u32, size.height.max(0.0).ceil() as u32)
}

/// Affine mapping between a view box and a rendered surface.
///
/// The view box is scaled uniformly to fit the surface, and centered along the
/// remaining axis (same as SVG `preserveAspectRatio="xMidYMid meet"`).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
  pub view_box: Box2D<f64, CanvasSpace>,
  pub resolution: Size2D<u32, PixelSpace>,
  scale: f64,
  offset: V2<f64, PixelSpace>
}

impl Viewport {
  pub fn new(view_box: Box2D<f64, CanvasSpace>, resolution: Size2D<u32, PixelSpace>) -> Self {
    let size = view_box.size();
    let res = resolution.to_f64();
    let scale = if size.width > 0.0 && size.height > 0.0 {
      (res.width / size.width).min(res.height / size.height)
    } else {
      0.0
    };
    let offset = V2::new(
      (res.width - size.width * scale) / 2.0,
      (res.height - size.height * scale) / 2.0
    );
    Self { view_box, resolution, scale, offset }
  }

  /// Pixels per canvas unit.
  pub fn scale(&self) -> f64 {
    self.scale
  }

  pub fn to_pixel(&self, point: Point) -> P2<PixelSpace> {
    ((point - self.view_box.min) * self.scale).cast_unit().to_point() + self.offset
  }

  /// Inverse of [`to_pixel`](Self::to_pixel). `None` for a degenerate view box.
  pub fn to_canvas(&self, pixel: P2<PixelSpace>) -> Option<Point> {
    if self.scale <= 0.0 {
      return None;
    }
    Some(((pixel - self.offset).to_vector() / self.scale).cast_unit().to_point()
      + self.view_box.min.to_vector())
  }
}
