use {
  super::*,
  crate::geometry::midpoint,
  rand::prelude::*
};

fn rng() -> rand_pcg::Pcg64 {
  rand_pcg::Pcg64::seed_from_u64(0)
}

#[test] fn anchors_only_without_seed() {
  for (w, h) in [(300.0, 300.0), (10.0, 640.0), (0.0, 0.0)] {
    let points = generate(&Params::new(w, h, 10000), &mut rng());
    assert_eq!(points, vec![
      Point::new(w / 2.0, 0.0),
      Point::new(0.0, h),
      Point::new(w, h),
    ]);
  }
}

#[test] fn short_count_is_clamped() {
  let seed = Point::new(10.0, 20.0);
  for count in 0..=PREFIX_LEN {
    let params = Params::new(100.0, 50.0, count).with_seed(seed);
    let points = generate(&params, &mut rng());
    assert_eq!(points.len(), PREFIX_LEN);
    assert_eq!(&points[..3], &params.anchors());
    assert_eq!(points[3], seed);
  }
}

#[test] fn every_point_is_midpoint_towards_anchor() {
  let params = Params::new(640.0, 480.0, 5000).with_seed(Point::new(17.0, 333.0));
  let points = generate(&params, &mut rng());
  assert_eq!(points.len(), 5000);
  let anchors = &points[..3];
  points.windows(2).skip(3).for_each(|pair| {
    let (prev, next) = (pair[0], pair[1]);
    assert!(anchors.iter().any(|&a| midpoint(a, prev) == next),
      "{:?} is not a midpoint from {:?}", next, prev);
  });
}

#[test] fn prefix_is_deterministic() {
  let params = Params::new(300.0, 200.0, 100).with_seed(Point::new(1.0, 2.0));
  let a = generate(&params, &mut StdRng::seed_from_u64(1));
  let b = generate(&params, &mut StdRng::seed_from_u64(2));
  assert_eq!(a[..PREFIX_LEN], b[..PREFIX_LEN]);
  assert_eq!(a.len(), b.len());
}

#[test] fn same_rng_state_reproduces() {
  let params = Params::default().with_seed(Point::new(150.0, 300.0));
  assert_eq!(generate(&params, &mut rng()), generate(&params, &mut rng()));
}

#[test] fn points_stay_inside_triangle_bounds() {
  let params = Params::new(300.0, 300.0, 2000).with_seed(Point::new(150.0, 300.0));
  generate(&params, &mut rng()).into_iter().for_each(|p| {
    assert!((0.0..=300.0).contains(&p.x) && (0.0..=300.0).contains(&p.y), "{:?}", p);
  });
}

#[test] fn default_scenario() {
  let params = Params::default().with_seed(Point::new(150.0, 300.0));
  assert_eq!(params.sequence_len(), 10000);
  let points = generate(&params, &mut rng());
  assert_eq!(points.len(), 10000);
  assert_eq!(points[0], Point::new(150.0, 0.0));
  assert_eq!(points[1], Point::new(0.0, 300.0));
  assert_eq!(points[2], Point::new(300.0, 300.0));
  assert_eq!(points[3], Point::new(150.0, 300.0));
}

#[test] fn iter_extends_from_last_point() {
  let params = Params::new(300.0, 300.0, 0);
  let seed = Point::new(42.0, 42.0);
  let mut r = rng();
  let mut last = seed;
  ChaosIter::new(params.anchors(), seed, &mut r)
    .take(1000)
    .for_each(|Step { anchor, point }| {
      assert_eq!(point, midpoint(params.anchors()[anchor], last));
      last = point;
    });
}

#[test] fn anchor_choice_is_uniform() {
  let n = 300_000;
  let params = Params::default();
  let mut r = rng();
  let mut histogram = [0usize; 3];
  ChaosIter::new(params.anchors(), Point::new(1.0, 1.0), &mut r)
    .take(n)
    .for_each(|step| histogram[step.anchor] += 1);

  let expected = n as f64 / 3.0;
  let chi2: f64 = histogram.iter()
    .map(|&observed| (observed as f64 - expected).powi(2) / expected)
    .sum();
  // 2 degrees of freedom, p = 0.001
  assert!(chi2 < 13.82, "{:?}, chi2 = {}", histogram, chi2);
}

#[test] fn random_index_range() {
  let mut r = rng();
  let mut seen = [false; 3];
  for _ in 0..1000 {
    seen[random_index(&mut r)] = true;
  }
  assert_eq!(seen, [true; 3]);
}
