/*!

A `Deferred<T>` is a value that is computed on first use and cached afterward.

Combinators take their "other" capability as `impl Into<Deferred<_>>`. A capability that is already built converts
with `From`, and one that does not exist yet is passed as `Deferred::new(thunk)`. Two instances that need each other
(say, the comparator for a tree node and the comparator for its list of children) can then both be constructed,
because neither constructor calls into the other. The thunk runs the first time a comparison actually needs it.

*/

use std::sync::{
  Arc,
  OnceLock
};

use crate::logging::log_at_level;

pub struct Deferred<T> {
  cell : Arc<OnceLock<T>>,
  thunk: Option<Arc<dyn Fn() -> T + Send + Sync>>,
}


impl<T> Deferred<T> {

  /// Defers `thunk` until the value is first forced.
  pub fn new<F>(thunk: F) -> Self
    where F: Fn() -> T + Send + Sync + 'static
  {
    Deferred {
      cell : Arc::new(OnceLock::new()),
      thunk: Some(Arc::new(thunk)),
    }
  }

  /// A value that is already available.
  pub fn ready(value: T) -> Self {
    let cell = OnceLock::new();
    let _ = cell.set(value);
    Deferred {
      cell : Arc::new(cell),
      thunk: None,
    }
  }

  /// Evaluates the thunk the first time and returns the cached value thereafter. Concurrent first calls race to
  /// initialize, but only one result is ever stored.
  pub fn force(&self) -> &T {
    self.cell.get_or_init(|| {
      log_at_level(6, "Forcing a deferred value.");
      match &self.thunk {
        Some(thunk) => thunk(),
        None        => unforced_ready_value(),
      }
    })
  }

  pub fn is_forced(&self) -> bool {
    self.cell.get().is_some()
  }

}


impl<T> Clone for Deferred<T> {
  fn clone(&self) -> Self {
    Deferred {
      cell : self.cell.clone(),
      thunk: self.thunk.clone(),
    }
  }
}


impl<T> From<T> for Deferred<T> {
  fn from(value: T) -> Self {
    Deferred::ready(value)
  }
}


/// A `Deferred` built with `ready` always has its cell filled, so its thunk is never consulted.
fn unforced_ready_value() -> ! {
  unreachable!("A ready Deferred value had an empty cell, which is impossible. This is a bug.")
}
