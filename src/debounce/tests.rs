use super::*;

const MS: Duration = Duration::from_millis(1);

#[test] fn fires_after_delay() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::new(500 * MS);
  assert_eq!(debouncer.schedule(1, t0), None);
  assert_eq!(debouncer.poll(t0), None);
  assert_eq!(debouncer.poll(t0 + 499 * MS), None);
  assert_eq!(debouncer.poll(t0 + 500 * MS), Some(1));
  assert!(!debouncer.is_pending());
  assert_eq!(debouncer.poll(t0 + 10_000 * MS), None);
}

#[test] fn burst_keeps_only_last() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::default();
  let mut fired = vec![];
  // keystrokes every 100ms, then silence
  for i in 0..10u32 {
    let now = t0 + i * 100 * MS;
    fired.extend(debouncer.poll(now));
    if i > 0 {
      assert_eq!(debouncer.schedule(i, now), Some(i - 1));
    } else {
      assert_eq!(debouncer.schedule(i, now), None);
    }
  }
  for tick in 0..20u32 {
    fired.extend(debouncer.poll(t0 + (900 + tick * 50) * MS));
  }
  assert_eq!(fired, vec![9]);
}

#[test] fn reschedule_moves_deadline() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::new(500 * MS);
  debouncer.schedule("a", t0);
  debouncer.schedule("b", t0 + 400 * MS);
  assert_eq!(debouncer.deadline(), Some(t0 + 900 * MS));
  assert_eq!(debouncer.poll(t0 + 600 * MS), None);
  assert_eq!(debouncer.peek(), Some(&"b"));
  assert_eq!(debouncer.poll(t0 + 900 * MS), Some("b"));
}

#[test] fn cancel() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::new(500 * MS);
  debouncer.schedule(7, t0);
  assert_eq!(debouncer.cancel(), Some(7));
  assert_eq!(debouncer.poll(t0 + 1000 * MS), None);
  assert_eq!(debouncer.cancel(), None);
}

#[test] fn time_left() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::new(500 * MS);
  assert_eq!(debouncer.time_left(t0), None);
  debouncer.schedule((), t0);
  assert_eq!(debouncer.time_left(t0 + 200 * MS), Some(300 * MS));
  assert_eq!(debouncer.time_left(t0 + 800 * MS), Some(Duration::ZERO));
}

#[test] fn zero_delay_fires_immediately() {
  let t0 = Instant::now();
  let mut debouncer = Debouncer::new(Duration::ZERO);
  debouncer.schedule(1, t0);
  assert_eq!(debouncer.poll(t0), Some(1));
}
