use humansize::{FileSize, file_size_opts as options};

/// Time a statement, and log the elapsed time at debug level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $stmt: stmt) => {{
    let t0 = std::time::Instant::now();
    $stmt
    log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
  }}
);

/// Byte count in binary units, for log messages.
pub fn human_size(bytes: u64) -> String {
  bytes.file_size(options::CONVENTIONAL)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

#[test] fn human_size_units() {
  assert!(human_size(1536).starts_with("1.5"));
  assert!(human_size(1536).ends_with("KB"));
  assert!(human_size(3 * 1024 * 1024).ends_with("MB"));
}
