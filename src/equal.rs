/*!

The equality capability.

Equality is consumed by the comparison algebra, never redefined by it. Every `PartialOrd<A>` carries an `Equal<A>`
and forwards `equal`/`not_equal` to it, and the laws require `compare(a, b).is_equal() == equal(a, b)`. Capabilities
derived through combinators derive their `Equal` structurally from the `Equal`s of their parts, so the law is kept
without asking the composite comparator to decide equality.

*/

use std::sync::Arc;

/// An equality test packaged as a value. Cloning is cheap, since clones share the same closure.
pub struct Equal<A: ?Sized> {
  test: Arc<dyn Fn(&A, &A) -> bool + Send + Sync>,
}


impl<A: ?Sized + 'static> Equal<A> {

  pub fn make<F>(test: F) -> Self
    where F: Fn(&A, &A) -> bool + Send + Sync + 'static
  {
    Equal {
      test: Arc::new(test)
    }
  }

  /// The equality of `A`'s `PartialEq` implementation.
  pub fn from_partial_eq() -> Self
    where A: PartialEq
  {
    Equal::make(|l: &A, r: &A| l == r)
  }

  pub fn equal(&self, l: &A, r: &A) -> bool {
    (self.test)(l, r)
  }

  pub fn not_equal(&self, l: &A, r: &A) -> bool {
    !self.equal(l, r)
  }

  /// Equality on `B` by comparing the `A` values computed from each side.
  pub fn contramap<B, F>(&self, f: F) -> Equal<B>
    where B: ?Sized + 'static,
          F: Fn(&B) -> A + Send + Sync + 'static,
          A: Sized
  {
    let test = self.test.clone();
    Equal::make(move |l: &B, r: &B| test(&f(l), &f(r)))
  }

  /// Like `contramap`, but with a projection that borrows from its argument.
  pub fn contramap_ref<B, F>(&self, f: F) -> Equal<B>
    where B: ?Sized + 'static,
          F: for<'a> Fn(&'a B) -> &'a A + Send + Sync + 'static
  {
    let test = self.test.clone();
    Equal::make(move |l: &B, r: &B| test(f(l), f(r)))
  }

}


impl<A: ?Sized> Clone for Equal<A> {
  fn clone(&self) -> Self {
    Equal {
      test: self.test.clone()
    }
  }
}
