pub use verbosity::*;


// Global control over verbose messaging.
pub(crate) mod verbosity {
  use std::{
    io::{Stdout, stdout, Write},
    sync::{
      Mutex,
      atomic::{AtomicI32, Ordering as AtomicOrdering}
    }
  };
  use lazy_static::lazy_static;
  use yansi::Paint;

  static VERBOSITY: AtomicI32 = AtomicI32::new(0);
  lazy_static! {
    static ref VERBOSE_STREAM: Mutex<Stdout> = Mutex::new(stdout());
  }

  pub(crate) fn verbosity_is_at_least(lvl: i32) -> bool {
    VERBOSITY.load(AtomicOrdering::Relaxed) >= lvl
  }

  pub fn set_verbosity(new_value: i32) {
    VERBOSITY.store(new_value, AtomicOrdering::Relaxed);
  }

  pub fn verbosity() -> i32 {
    VERBOSITY.load(AtomicOrdering::Relaxed)
  }

  pub(crate) fn verbose_emit(level: i32, msg: &str) {
    // A poisoned stream only means another thread panicked mid-write. The stream itself is still usable.
    let mut stream = match VERBOSE_STREAM.lock() {
      Ok(guard)     => guard,
      Err(poisoned) => poisoned.into_inner(),
    };
    let _ = writeln!(stream, "{} {}", Paint::cyan(format!("[{}]", level)), msg);
  }

  /// Only emits a message if the verbosity level is at least `level`.
  pub(crate) fn log_at_level(level: i32, msg: &str) {
    if verbosity_is_at_least(level) {
      verbose_emit(level, msg);
    }
  }
}
