/*!

The partial-order capability.

A `PartialOrd<A>` packages a comparison `(A, A) -> PartialOrdering` together with the `Equal<A>` it must agree with.
It is a value, not a trait implementation. A type can therefore have several partial orders, and generic code
receives the one it should use as an argument (or asks for the canonical one through `HasPartialOrd`).

# Identity fast path

`compare(l, r)` first checks whether `l` and `r` are the same reference (`std::ptr::eq`). If they are, the result is
`Equals` and the user comparator is never called. This is only sound because a lawful comparator is reflexive. A
comparator that reports a value as anything other than `Equals` to itself is already broken, and the fast path simply
hides the breakage. The `identity-shortcut` feature (on by default) controls the fast path, so law tests of raw
comparators can switch it off.

*/

use std::sync::Arc;

use crate::{
  comparison::PartialOrdering,
  deferred::Deferred,
  either::Either,
  equal::Equal,
};

/// A shared comparison closure.
pub(crate) type Comparator<A, R> = Arc<dyn Fn(&A, &A) -> R + Send + Sync>;


/// Reports whether `l` and `r` are the same reference, which for a lawful comparator decides the comparison outright.
#[inline]
pub(crate) fn identical<A: ?Sized>(l: &A, r: &A) -> bool {
  cfg!(feature = "identity-shortcut") && std::ptr::eq(l, r)
}


pub struct PartialOrd<A: ?Sized> {
  equal  : Equal<A>,
  compare: Comparator<A, PartialOrdering>,
}


impl<A: ?Sized + 'static> PartialOrd<A> {

  // region Construction

  /// Wraps a raw comparator. `equal` must agree with it: `compare(a, b) == Equals` exactly when `equal(a, b)`.
  pub fn make<F>(equal: Equal<A>, compare: F) -> Self
    where F: Fn(&A, &A) -> PartialOrdering + Send + Sync + 'static
  {
    PartialOrd {
      equal,
      compare: Arc::new(compare)
    }
  }

  /// Wraps a raw comparator and takes equality to be "compares `Equals`".
  pub fn from_fn<F>(compare: F) -> Self
    where F: Fn(&A, &A) -> PartialOrdering + Send + Sync + 'static
  {
    let compare: Comparator<A, PartialOrdering> = Arc::new(compare);
    let for_equal = compare.clone();
    PartialOrd {
      equal: Equal::make(move |l: &A, r: &A| identical(l, r) || for_equal(l, r).is_equal()),
      compare
    }
  }

  /// The partial order of `A`'s standard `PartialOrd` implementation, with `None` read as `Incomparable`.
  pub fn from_std() -> Self
    where A: std::cmp::PartialOrd
  {
    PartialOrd::make(
      Equal::from_partial_eq(),
      |l: &A, r: &A| l.partial_cmp(r).into()
    )
  }

  /// A partial order that is built the first time it is used.
  pub fn defer<F>(thunk: F) -> Self
    where F: Fn() -> PartialOrd<A> + Send + Sync + 'static
  {
    let deferred = Deferred::new(thunk);
    let for_equal = deferred.clone();
    PartialOrd::make(
      Equal::make(move |l: &A, r: &A| for_equal.force().equal(l, r)),
      move |l: &A, r: &A| deferred.force().compare(l, r)
    )
  }

  // endregion

  // region Queries

  pub fn compare(&self, l: &A, r: &A) -> PartialOrdering {
    if identical(l, r) {
      return PartialOrdering::Equals;
    }
    (self.compare)(l, r)
  }

  /// Forwarded from the associated `Equal<A>`. It is not recomputed from `compare`.
  pub fn equal(&self, l: &A, r: &A) -> bool {
    self.equal.equal(l, r)
  }

  pub fn not_equal(&self, l: &A, r: &A) -> bool {
    self.equal.not_equal(l, r)
  }

  pub fn less_than(&self, l: &A, r: &A) -> bool {
    self.compare(l, r).is_less_than()
  }

  pub fn less_or_equal(&self, l: &A, r: &A) -> bool {
    self.compare(l, r).is_less_or_equal()
  }

  pub fn greater_than(&self, l: &A, r: &A) -> bool {
    self.compare(l, r).is_greater_than()
  }

  pub fn greater_or_equal(&self, l: &A, r: &A) -> bool {
    self.compare(l, r).is_greater_or_equal()
  }

  pub fn comparable(&self, l: &A, r: &A) -> bool {
    !self.compare(l, r).is_incomparable()
  }

  pub fn equal_capability(&self) -> &Equal<A> {
    &self.equal
  }

  // endregion

  // region Combinators

  /// Compares `B`s by comparing the `A` values computed from them.
  pub fn contramap<B, F>(&self, f: F) -> PartialOrd<B>
    where B: ?Sized + 'static,
          F: Fn(&B) -> A + Send + Sync + 'static,
          A: Sized
  {
    let f = Arc::new(f);
    let for_equal = f.clone();
    let this = self.clone();
    PartialOrd::make(
      self.equal.contramap(move |b: &B| for_equal(b)),
      move |l: &B, r: &B| this.compare(&f(l), &f(r))
    )
  }

  /// Compares `B`s by a projection that borrows from them. The identity fast path still applies to the projected
  /// references.
  pub fn contramap_ref<B, F>(&self, f: F) -> PartialOrd<B>
    where B: ?Sized + 'static,
          F: for<'a> Fn(&'a B) -> &'a A + Send + Sync + 'static
  {
    let f = Arc::new(f);
    let for_equal = f.clone();
    let this = self.clone();
    PartialOrd::make(
      self.equal.contramap_ref(move |b: &B| for_equal(b)),
      move |l: &B, r: &B| this.compare(f(l), f(r))
    )
  }

  /// Lexicographic product: the first components decide unless they are `Equals`.
  pub fn both<B>(&self, that: impl Into<Deferred<PartialOrd<B>>>) -> PartialOrd<(A, B)>
    where A: Sized,
          B: 'static
  {
    let that: Deferred<PartialOrd<B>> = that.into();
    let (this, this_for_equal) = (self.clone(), self.clone());
    let that_for_equal = that.clone();
    PartialOrd::make(
      Equal::make(move |l: &(A, B), r: &(A, B)| {
        this_for_equal.equal(&l.0, &r.0) && that_for_equal.force().equal(&l.1, &r.1)
      }),
      move |l: &(A, B), r: &(A, B)| {
        this.compare(&l.0, &r.0)
            .or_else_with(|| that.force().compare(&l.1, &r.1))
      }
    )
  }

  pub fn both_with<B, C, F>(&self, that: impl Into<Deferred<PartialOrd<B>>>, f: F) -> PartialOrd<C>
    where A: Sized,
          B: 'static,
          C: ?Sized + 'static,
          F: Fn(&C) -> (A, B) + Send + Sync + 'static
  {
    self.both(that).contramap(f)
  }

  /// Product order: neither component has priority, and the two signals are reconciled with `unify`. A pair is
  /// below another exactly when it is below or equal in both components and not equal overall.
  pub fn componentwise<B>(&self, that: impl Into<Deferred<PartialOrd<B>>>) -> PartialOrd<(A, B)>
    where A: Sized,
          B: 'static
  {
    let that: Deferred<PartialOrd<B>> = that.into();
    let (this, this_for_equal) = (self.clone(), self.clone());
    let that_for_equal = that.clone();
    PartialOrd::make(
      Equal::make(move |l: &(A, B), r: &(A, B)| {
        this_for_equal.equal(&l.0, &r.0) && that_for_equal.force().equal(&l.1, &r.1)
      }),
      move |l: &(A, B), r: &(A, B)| {
        let first = this.compare(&l.0, &r.0);
        if first.is_incomparable() {
          return first;
        }
        first.unify(that.force().compare(&l.1, &r.1))
      }
    )
  }

  /// Sum order: every `Left` is below every `Right`.
  pub fn either<B>(&self, that: impl Into<Deferred<PartialOrd<B>>>) -> PartialOrd<Either<A, B>>
    where A: Sized,
          B: 'static
  {
    let that: Deferred<PartialOrd<B>> = that.into();
    let (this, this_for_equal) = (self.clone(), self.clone());
    let that_for_equal = that.clone();
    PartialOrd::make(
      Equal::make(move |l: &Either<A, B>, r: &Either<A, B>| {
        match (l, r) {
          (Either::Left(a), Either::Left(b))   => this_for_equal.equal(a, b),
          (Either::Right(a), Either::Right(b)) => that_for_equal.force().equal(a, b),
          _                                    => false,
        }
      }),
      move |l: &Either<A, B>, r: &Either<A, B>| {
        match (l, r) {
          (Either::Left(a), Either::Left(b))   => this.compare(a, b),
          (Either::Right(a), Either::Right(b)) => that.force().compare(a, b),
          (Either::Left(_), Either::Right(_))  => PartialOrdering::LessThan,
          (Either::Right(_), Either::Left(_))  => PartialOrdering::GreaterThan,
        }
      }
    )
  }

  pub fn reverse(&self) -> PartialOrd<A> {
    self.map_ordering(PartialOrdering::opposite)
  }

  /// Post-processes every comparison result with `f`. Equality is kept, so `f` must fix `Equals` and must not map
  /// anything else to it.
  pub fn map_ordering<F>(&self, f: F) -> PartialOrd<A>
    where F: Fn(PartialOrdering) -> PartialOrdering + Send + Sync + 'static
  {
    let this = self.clone();
    PartialOrd::make(
      self.equal.clone(),
      move |l: &A, r: &A| f(this.compare(l, r))
    )
  }

  // endregion

}


impl<A: ?Sized> Clone for PartialOrd<A> {
  fn clone(&self) -> Self {
    PartialOrd {
      equal  : self.equal.clone(),
      compare: self.compare.clone(),
    }
  }
}


#[cfg(test)]
mod tests {
  use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
  use super::*;

  /// `a ≤ b` iff `a` divides `b`.
  fn divisibility() -> PartialOrd<u32> {
    PartialOrd::from_fn(|a: &u32, b: &u32| {
      if a == b {
        PartialOrdering::Equals
      } else if *a != 0 && b % a == 0 {
        PartialOrdering::LessThan
      } else if *b != 0 && a % b == 0 {
        PartialOrdering::GreaterThan
      } else {
        PartialOrdering::Incomparable
      }
    })
  }

  #[test]
  fn divisibility_order() {
    let p = divisibility();
    assert_eq!(p.compare(&3, &12), PartialOrdering::LessThan);
    assert_eq!(p.compare(&12, &3), PartialOrdering::GreaterThan);
    assert_eq!(p.compare(&4, &6), PartialOrdering::Incomparable);
    assert!(p.less_or_equal(&3, &12));
    assert!(!p.less_or_equal(&4, &6));
    assert!(!p.greater_or_equal(&4, &6));
    assert!(!p.comparable(&4, &6));
    assert!(p.equal(&7, &7));
  }

  #[test]
  fn laws_on_small_domain() {
    let p = divisibility();
    let domain: Vec<u32> = (1..=24).collect();
    for a in &domain {
      let a_copy = *a;
      assert_eq!(p.compare(a, &a_copy), PartialOrdering::Equals);
      for b in &domain {
        let ab = p.compare(a, b);
        assert_eq!(ab.opposite(), p.compare(b, a));
        assert_eq!(ab.is_equal(), p.equal(a, b));
        for c in &domain {
          if ab.is_less_or_equal() && p.compare(b, c).is_less_or_equal() {
            assert!(p.compare(a, c).is_less_or_equal());
          }
        }
      }
    }
  }

  #[test]
  fn std_partial_order_reads_none_as_incomparable() {
    let p = PartialOrd::<f64>::from_std();
    assert_eq!(p.compare(&1.0, &2.0), PartialOrdering::LessThan);
    assert_eq!(p.compare(&f64::NAN, &1.0), PartialOrdering::Incomparable);
  }

  #[test]
  fn identity_fast_path_skips_the_comparator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    // Deliberately unlawful: never says `Equals`.
    let p = PartialOrd::make(Equal::<i32>::from_partial_eq(), move |_: &i32, _: &i32| {
      counter.fetch_add(1, AtomicOrdering::SeqCst);
      PartialOrdering::Incomparable
    });

    let x = 5;
    let y = 5;
    #[cfg(feature = "identity-shortcut")]
    {
      assert_eq!(p.compare(&x, &x), PartialOrdering::Equals);
      assert_eq!(calls.load(AtomicOrdering::SeqCst), 0);
    }
    #[cfg(not(feature = "identity-shortcut"))]
    {
      assert_eq!(p.compare(&x, &x), PartialOrdering::Incomparable);
      assert_eq!(calls.load(AtomicOrdering::SeqCst), 1);
    }
    // Distinct references always reach the comparator.
    let before = calls.load(AtomicOrdering::SeqCst);
    assert_eq!(p.compare(&x, &y), PartialOrdering::Incomparable);
    assert_eq!(calls.load(AtomicOrdering::SeqCst), before + 1);
  }

  #[test]
  fn lexicographic_versus_componentwise() {
    let ints = PartialOrd::<i32>::from_std();
    let lexicographic = ints.both(ints.clone());
    let componentwise = ints.componentwise(ints.clone());

    assert_eq!(lexicographic.compare(&(1, 9), &(2, 0)), PartialOrdering::LessThan);
    assert_eq!(componentwise.compare(&(1, 9), &(2, 0)), PartialOrdering::Incomparable);
    assert_eq!(componentwise.compare(&(1, 0), &(2, 0)), PartialOrdering::LessThan);
    assert_eq!(componentwise.compare(&(2, 3), &(1, 0)), PartialOrdering::GreaterThan);
    assert!(componentwise.equal(&(2, 3), &(2, 3)));
  }

  #[test]
  fn incomparable_components_propagate() {
    let pair = divisibility().both(PartialOrd::<i32>::from_std());
    assert_eq!(pair.compare(&(4, 0), &(6, 1)), PartialOrdering::Incomparable);
    assert_eq!(pair.compare(&(4, 0), &(4, 1)), PartialOrdering::LessThan);
  }

  #[test]
  fn sum_and_reverse() {
    let sum = divisibility().either(PartialOrd::<i32>::from_std());
    assert_eq!(sum.compare(&Either::Left(100), &Either::Right(-1)), PartialOrdering::LessThan);
    assert_eq!(sum.compare(&Either::Left(4), &Either::Left(6)), PartialOrdering::Incomparable);
    assert!(!sum.equal(&Either::Left(1), &Either::Right(1)));

    let reversed = divisibility().reverse();
    assert_eq!(reversed.compare(&3, &12), PartialOrdering::GreaterThan);
    assert_eq!(reversed.compare(&4, &6), PartialOrdering::Incomparable);
  }

  #[test]
  fn contramapped_orders() {
    let by_len = PartialOrd::<usize>::from_std().contramap(|s: &String| s.len());
    assert_eq!(by_len.compare(&"ab".to_string(), &"abc".to_string()), PartialOrdering::LessThan);

    let by_second = divisibility().contramap_ref(|pair: &(char, u32)| &pair.1);
    assert_eq!(by_second.compare(&('x', 2), &('a', 8)), PartialOrdering::LessThan);
    assert!(by_second.equal(&('x', 2), &('a', 2)));

    let pairs = divisibility().both_with(PartialOrd::<char>::from_std(), |s: &String| {
      (s.len() as u32, s.chars().next().unwrap_or(' '))
    });
    assert_eq!(pairs.compare(&"ab".to_string(), &"bcde".to_string()), PartialOrdering::LessThan);
  }

  #[test]
  fn deferred_order_is_built_lazily() {
    let built = Arc::new(AtomicUsize::new(0));
    let counter = built.clone();
    let p = PartialOrd::defer(move || {
      counter.fetch_add(1, AtomicOrdering::SeqCst);
      divisibility()
    });
    assert_eq!(built.load(AtomicOrdering::SeqCst), 0);
    assert_eq!(p.compare(&2, &4), PartialOrdering::LessThan);
    assert_eq!(p.compare(&4, &2), PartialOrdering::GreaterThan);
    assert_eq!(built.load(AtomicOrdering::SeqCst), 1);
  }
}
