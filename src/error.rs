//! .
//!
//! Errors only originate at the edges: reading configuration, and writing exported
//! files. Point generation itself never fails.

pub use anyhow::{Error, Context, bail};

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Render the cause chain, one cause per line.
pub fn display(error: &Error) -> String {
  let mut msg = "Error:\n".to_string();
  error
    .chain()
    .enumerate()
    .for_each(|(index, error)| msg.push_str(&format!("└> {} - {}\n", index, error)));
  msg
}

#[test] fn display_chain() {
  let error = Err::<(), _>(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))
    .context("reading config")
    .unwrap_err();
  assert_eq!(display(&error), "Error:\n└> 0 - reading config\n└> 1 - gone\n");
}
