//! Vector backend. Markers are written as `<circle>` elements, in sequence order.

use {
  super::{Draw, Marker, Scene},
  crate::{
    error::{Context, Result},
    util::human_size
  },
  image::Rgba,
  std::{fmt::Write, path::Path}
};

/// `#rrggbb`
pub fn hex(color: Rgba<u8>) -> String {
  let [r, g, b, _] = color.0;
  format!("#{:02x}{:02x}{:02x}", r, g, b)
}

impl Draw<String> for Marker {
  fn draw(&self, svg: &mut String) {
    let alpha = self.color.0[3];
    write!(svg,
      r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
      self.center.x, self.center.y, self.radius, hex(self.color)
    ).ok();
    if alpha < 255 {
      write!(svg, r#" fill-opacity="{:.3}""#, alpha as f32 / 255.0).ok();
    }
    svg.push_str("/>\n");
  }
}

impl Draw<String> for Scene {
  fn draw(&self, svg: &mut String) {
    let size = self.view_box.size();
    write!(svg,
      concat!(
        r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg" "#,
        r#"xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="{} {} {} {}">"#,
        "\n"
      ),
      self.view_box.min.x, self.view_box.min.y, size.width, size.height
    ).ok();
    self.markers.iter().for_each(|marker| marker.draw(svg));
    svg.push_str("</svg>\n");
  }
}

pub fn to_svg(scene: &Scene) -> String {
  // ~64 bytes per circle element
  let mut svg = String::with_capacity(128 + scene.markers.len() * 64);
  scene.draw(&mut svg);
  svg
}

/// Returns the number of bytes written.
pub fn save_svg(scene: &Scene, path: impl AsRef<Path>) -> Result<u64> {
  let path = path.as_ref();
  let svg = to_svg(scene);
  std::fs::write(path, &svg)
    .with_context(|| format!("unable to write {}", path.display()))?;
  log::info!("{} written, {}", path.display(), human_size(svg.len() as u64));
  Ok(svg.len() as u64)
}
