//! Sierpiński triangle, drawn by the chaos game.
//!
//! Three anchors are fixed at the vertices of a triangle inscribed in the canvas. Starting
//! from a seed point, every next point is the midpoint between the previous one, and an
//! anchor chosen uniformly at random. The scatter converges to the Sierpiński triangle.
//!
//! It is split into [`generator`] for producing the point sequence, [`session`] for
//! debounced recomputation on parameter changes, and [`drawing`] for displaying it
//! (requires `drawing` feature).
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   chaos_game::{
//! #     error::Result,
//! #     generator::{generate, Params},
//! #     geometry::Point,
//! #     drawing::{Scene, save_svg, save_raster}
//! #   },
//! #   rand::SeedableRng
//! # };
//! # fn main() -> Result<()> {
//! // 300x300 canvas, 10000 points in total, anchors and seed included.
//! let params = Params::new(300.0, 300.0, 10000)
//!   .with_seed(Point::new(150.0, 300.0));
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
//! let points = generate(&params, &mut rng);
//! assert_eq!(points.len(), 10000);
//!
//! let scene = Scene::new(params.size, &points);
//! save_svg(&scene, "out.svg")?;
//! save_raster(&scene, "out.png", Some([1024, 1024].into()))?;
//! #   Ok(())
//! # }
//! ```
//!
//! # Recomputation
//! Parameters usually come from input controls, changing on every keystroke. A
//! [`Session`](session::Session) recomputes the sequence only after the parameters
//! have been stable for a quiescent interval:
//! ```
//! # use {
//! #   chaos_game::{generator::Params, geometry::Point, session::{Change, Session}},
//! #   std::time::{Duration, Instant}
//! # };
//! let t0 = Instant::now();
//! let delay = Duration::from_millis(500);
//! let mut session = Session::new(Params::default(), delay, t0);
//!
//! session.update(Change::Seed(Some(Point::new(150.0, 300.0))), t0);
//! session.update(Change::PointCount(500), t0 + delay / 2);
//! assert!(!session.poll(t0 + delay));
//! assert!(session.poll(t0 + delay / 2 + delay));
//! assert_eq!(session.points().len(), 500);
//! assert_eq!(session.recomputations(), 1);
//! ```

pub mod error;
#[macro_use]
pub mod util;
pub mod geometry;
pub mod generator;
pub mod debounce;
pub mod session;
pub mod config;
pub mod command;
#[cfg(feature = "drawing")]
pub mod cli;
#[cfg(feature = "drawing")]
pub mod drawing;
