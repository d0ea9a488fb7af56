/// How often each anchor gets chosen, and how fast the scatter settles on the attractor.

use {
  chaos_game::{
    generator::{ChaosIter, Params},
    geometry::Point
  },
  rand::prelude::*
};

fn main() {
  let params = Params::default();
  let [top, left, right] = params.anchors();
  let mut rng = rand_pcg::Pcg64::seed_from_u64(0);
  let mut histogram = [0usize; 3];

  // a seed far outside of the triangle
  let seed = Point::new(-1000.0, 5000.0);
  ChaosIter::new([top, left, right], seed, &mut rng)
    .take(1_000_000)
    .enumerate()
    .for_each(|(i, step)| {
      histogram[step.anchor] += 1;
      if i < 12 {
        println!("#{:<2} anchor {} -> ({:.3}, {:.3})", i + 4, step.anchor, step.point.x, step.point.y);
      }
    });

  let total: usize = histogram.iter().sum();
  histogram.iter().enumerate().for_each(|(anchor, &count)| {
    println!("anchor {}: {} ({:.3}%)", anchor, count, count as f64 / total as f64 * 100.0);
  });
}
