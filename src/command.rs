//! Line commands of the interactive mode.
//!
//! ```text
//! width 400      height 250      count 5000
//! seed 150 300   seed none       click 120 87
//! svg [path]     png [path]      show      quit
//! ```

use {
  crate::{
    error::{bail, Context, Result},
    geometry::{P2, PixelSpace, Point},
    session::Change
  },
  std::{path::PathBuf, str::FromStr}
};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
  Change(Change),
  /// Pointer position on the rendered raster surface.
  Click(P2<PixelSpace>),
  ExportSvg(Option<PathBuf>),
  ExportRaster(Option<PathBuf>),
  Show,
  Quit
}

fn arg<T>(args: &[&str], index: usize, name: &str) -> Result<T>
  where T: FromStr, T::Err: std::error::Error + Send + Sync + 'static
{
  let raw = args.get(index)
    .with_context(|| format!("missing {}", name))?;
  raw.parse().with_context(|| format!("invalid {}: {:?}", name, raw))
}

fn path(args: &[&str]) -> Option<PathBuf> {
  args.first().map(PathBuf::from)
}

impl FromStr for Command {
  type Err = crate::error::Error;

  fn from_str(line: &str) -> Result<Self> {
    let words = line.split_whitespace().collect::<Vec<_>>();
    let (keyword, args) = match words.split_first() {
      Some((keyword, args)) => (keyword.to_lowercase(), args),
      None => bail!("empty command")
    };
    let command = match keyword.as_str() {
      "width" => Command::Change(Change::Width(arg(args, 0, "width")?)),
      "height" => Command::Change(Change::Height(arg(args, 0, "height")?)),
      "count" => Command::Change(Change::PointCount(arg(args, 0, "count")?)),
      "seed" if args.first() == Some(&"none") => Command::Change(Change::Seed(None)),
      "seed" => Command::Change(Change::Seed(Some(
        Point::new(arg(args, 0, "x")?, arg(args, 1, "y")?)
      ))),
      "click" => Command::Click(P2::new(arg(args, 0, "x")?, arg(args, 1, "y")?)),
      "svg" => Command::ExportSvg(path(args)),
      "png" | "raster" => Command::ExportRaster(path(args)),
      "show" => Command::Show,
      "quit" | "exit" => Command::Quit,
      other => bail!("unknown command {:?}", other)
    };
    Ok(command)
  }
}
