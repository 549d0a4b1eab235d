/*!

Sequence orders.

Two sequences are compared element by element. The first pair that is not `Equals` decides, and if one sequence
runs out first, it is a prefix of the other and is `LessThan` it. The comparison is a loop over two iterators, so it
uses constant auxiliary space and no recursion, whatever the length of the sequences.

The same rule gives a partial order when the elements are only partially ordered. In that case an `Incomparable` pair
decides the comparison like any other non-`Equals` pair.

*/

use std::collections::{
  BTreeSet,
  LinkedList,
  VecDeque
};

use crate::{
  comparison::{
    Ordering,
    PartialOrdering
  },
  deferred::Deferred,
  equal::Equal,
  ord::Ord,
  partial_ord::PartialOrd,
};

use super::HasOrd;


// region Algorithms

/// Lexicographic comparison of two sequences under `compare`.
pub fn compare_lexicographic<'l, 'r, A, L, R, F>(left: L, right: R, compare: F) -> Ordering
  where A: ?Sized + 'l + 'r,
        L: IntoIterator<Item = &'l A>,
        R: IntoIterator<Item = &'r A>,
        F: Fn(&A, &A) -> Ordering
{
  let mut left = left.into_iter();
  let mut right = right.into_iter();
  loop {
    match (left.next(), right.next()) {
      (None, None)    => return Ordering::Equals,
      (None, Some(_)) => return Ordering::LessThan,
      (Some(_), None) => return Ordering::GreaterThan,
      (Some(l), Some(r)) => {
        let ordering = compare(l, r);
        if ordering != Ordering::Equals {
          return ordering;
        }
      }
    }
  }
}

/// Lexicographic comparison of two sequences under a partial `compare`.
pub fn partial_compare_lexicographic<'l, 'r, A, L, R, F>(left: L, right: R, compare: F) -> PartialOrdering
  where A: ?Sized + 'l + 'r,
        L: IntoIterator<Item = &'l A>,
        R: IntoIterator<Item = &'r A>,
        F: Fn(&A, &A) -> PartialOrdering
{
  let mut left = left.into_iter();
  let mut right = right.into_iter();
  loop {
    match (left.next(), right.next()) {
      (None, None)    => return PartialOrdering::Equals,
      (None, Some(_)) => return PartialOrdering::LessThan,
      (Some(_), None) => return PartialOrdering::GreaterThan,
      (Some(l), Some(r)) => {
        let ordering = compare(l, r);
        if ordering != PartialOrdering::Equals {
          return ordering;
        }
      }
    }
  }
}

/// Same length and pairwise `equal`.
pub fn equal_pairwise<'l, 'r, A, L, R, F>(left: L, right: R, equal: F) -> bool
  where A: ?Sized + 'l + 'r,
        L: IntoIterator<Item = &'l A>,
        R: IntoIterator<Item = &'r A>,
        F: Fn(&A, &A) -> bool
{
  let mut left = left.into_iter();
  let mut right = right.into_iter();
  loop {
    match (left.next(), right.next()) {
      (None, None)       => return true,
      (Some(l), Some(r)) => {
        if !equal(l, r) {
          return false;
        }
      }
      _ => return false,
    }
  }
}

// endregion


// region Constructors

/// The lexicographic order of any collection whose shared references iterate over `&A` in sequence order.
pub fn ord_iterable<C, A>(ord: impl Into<Deferred<Ord<A>>>) -> Ord<C>
  where C: ?Sized + 'static,
        A: 'static,
        for<'a> &'a C: IntoIterator<Item = &'a A>
{
  let ord: Deferred<Ord<A>> = ord.into();
  let ord_for_equal = ord.clone();
  Ord::make(
    Equal::make(move |l: &C, r: &C| {
      let ord = ord_for_equal.force();
      equal_pairwise(l, r, |a: &A, b: &A| ord.equal(a, b))
    }),
    move |l: &C, r: &C| {
      let ord = ord.force();
      compare_lexicographic(l, r, |a: &A, b: &A| ord.compare(a, b))
    }
  )
}

pub fn partial_ord_iterable<C, A>(partial_ord: impl Into<Deferred<PartialOrd<A>>>) -> PartialOrd<C>
  where C: ?Sized + 'static,
        A: 'static,
        for<'a> &'a C: IntoIterator<Item = &'a A>
{
  let partial_ord: Deferred<PartialOrd<A>> = partial_ord.into();
  let partial_ord_for_equal = partial_ord.clone();
  PartialOrd::make(
    Equal::make(move |l: &C, r: &C| {
      let partial_ord = partial_ord_for_equal.force();
      equal_pairwise(l, r, |a: &A, b: &A| partial_ord.equal(a, b))
    }),
    move |l: &C, r: &C| {
      let partial_ord = partial_ord.force();
      partial_compare_lexicographic(l, r, |a: &A, b: &A| partial_ord.compare(a, b))
    }
  )
}

pub fn ord_slice<A: 'static>(ord: impl Into<Deferred<Ord<A>>>) -> Ord<[A]> {
  ord_iterable::<[A], A>(ord)
}

pub fn ord_vec<A: 'static>(ord: impl Into<Deferred<Ord<A>>>) -> Ord<Vec<A>> {
  ord_iterable::<Vec<A>, A>(ord)
}

pub fn partial_ord_slice<A: 'static>(partial_ord: impl Into<Deferred<PartialOrd<A>>>) -> PartialOrd<[A]> {
  partial_ord_iterable::<[A], A>(partial_ord)
}

pub fn partial_ord_vec<A: 'static>(partial_ord: impl Into<Deferred<PartialOrd<A>>>) -> PartialOrd<Vec<A>> {
  partial_ord_iterable::<Vec<A>, A>(partial_ord)
}

// endregion


// region Canonical instances

impl<T: HasOrd> HasOrd for [T] {
  fn ord() -> Ord<[T]> {
    ord_slice(Ord::defer(T::ord))
  }
}

impl<T: HasOrd> HasOrd for Vec<T> {
  fn ord() -> Ord<Vec<T>> {
    ord_vec(Ord::defer(T::ord))
  }
}

impl<T: HasOrd> HasOrd for VecDeque<T> {
  fn ord() -> Ord<VecDeque<T>> {
    ord_iterable::<VecDeque<T>, T>(Ord::defer(T::ord))
  }
}

impl<T: HasOrd> HasOrd for LinkedList<T> {
  fn ord() -> Ord<LinkedList<T>> {
    ord_iterable::<LinkedList<T>, T>(Ord::defer(T::ord))
  }
}

/// Sets iterate in ascending order of `T`'s standard `Ord`, so this is the lexicographic order of their sorted
/// contents, as it is for `BTreeSet`'s own `Ord`.
impl<T: HasOrd + std::cmp::Ord> HasOrd for BTreeSet<T> {
  fn ord() -> Ord<BTreeSet<T>> {
    ord_iterable::<BTreeSet<T>, T>(Ord::defer(T::ord))
  }
}

// endregion
