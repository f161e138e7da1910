use std::time::{Duration, Instant};

/// Times a scope and logs the duration at debug level when it ends.
pub struct Profile {
  label:   String,
  started: Instant
}

impl Profile {
  pub fn new(label: impl Into<String>) -> Self {
    Self { label: label.into(), started: Instant::now() }
  }

  pub fn elapsed(&self) -> Duration {
    self.started.elapsed()
  }
}

impl Drop for Profile {
  fn drop(&mut self) {
    log::debug!("{} took {:.2?}", self.label, self.elapsed());
  }
}

#[macro_export]
macro_rules! profile {
  ($label:expr) => {
    let _profile = $crate::profiling::Profile::new($label);
  };
}
