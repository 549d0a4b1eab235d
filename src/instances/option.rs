/*!

Orders for option-like and sum-like shapes.

`None` is below every `Some(_)`, and two `Some` values compare by the inner order. For `Either`, every `Left` is
below every `Right`, and values with the same tag compare by that side's order. An option behaves like a sum whose
left side has a single value.

*/

use crate::{
  comparison::{
    Ordering,
    PartialOrdering
  },
  deferred::Deferred,
  either::Either,
  equal::Equal,
  ord::Ord,
  partial_ord::PartialOrd,
};

use super::HasOrd;


pub fn ord_option<A: 'static>(ord: impl Into<Deferred<Ord<A>>>) -> Ord<Option<A>> {
  let ord: Deferred<Ord<A>> = ord.into();
  let ord_for_equal = ord.clone();
  Ord::make(
    Equal::make(move |l: &Option<A>, r: &Option<A>| {
      match (l, r) {
        (None, None)       => true,
        (Some(a), Some(b)) => ord_for_equal.force().equal(a, b),
        _                  => false,
      }
    }),
    move |l: &Option<A>, r: &Option<A>| {
      match (l, r) {
        (None, None)       => Ordering::Equals,
        (None, Some(_))    => Ordering::LessThan,
        (Some(_), None)    => Ordering::GreaterThan,
        (Some(a), Some(b)) => ord.force().compare(a, b),
      }
    }
  )
}

pub fn partial_ord_option<A: 'static>(partial_ord: impl Into<Deferred<PartialOrd<A>>>) -> PartialOrd<Option<A>> {
  let partial_ord: Deferred<PartialOrd<A>> = partial_ord.into();
  let partial_ord_for_equal = partial_ord.clone();
  PartialOrd::make(
    Equal::make(move |l: &Option<A>, r: &Option<A>| {
      match (l, r) {
        (None, None)       => true,
        (Some(a), Some(b)) => partial_ord_for_equal.force().equal(a, b),
        _                  => false,
      }
    }),
    move |l: &Option<A>, r: &Option<A>| {
      match (l, r) {
        (None, None)       => PartialOrdering::Equals,
        (None, Some(_))    => PartialOrdering::LessThan,
        (Some(_), None)    => PartialOrdering::GreaterThan,
        (Some(a), Some(b)) => partial_ord.force().compare(a, b),
      }
    }
  )
}

/// The sum order from an order for each side. Neither side is built until a comparison needs it.
pub fn ord_either<L, R>(left: impl Into<Deferred<Ord<L>>>, right: impl Into<Deferred<Ord<R>>>) -> Ord<Either<L, R>>
  where L: 'static,
        R: 'static
{
  let left: Deferred<Ord<L>> = left.into();
  let right: Deferred<Ord<R>> = right.into();
  Ord::defer(move || left.force().either(right.clone()))
}


impl<T: HasOrd> HasOrd for Option<T> {
  fn ord() -> Ord<Option<T>> {
    ord_option(Ord::defer(T::ord))
  }
}

impl<L: HasOrd, R: HasOrd> HasOrd for Either<L, R> {
  fn ord() -> Ord<Either<L, R>> {
    ord_either(Ord::defer(L::ord), Ord::defer(R::ord))
  }
}


#[cfg(test)]
mod tests {
  use crate::instances::ord_of;
  use super::*;

  #[test]
  fn none_is_least() {
    let ord = ord_of::<Option<i32>>();
    assert_eq!(ord.compare(&None, &Some(i32::MIN)), Ordering::LessThan);
    assert_eq!(ord.compare(&Some(i32::MIN), &None), Ordering::GreaterThan);
    assert_eq!(ord.compare(&None, &None), Ordering::Equals);
    assert_eq!(ord.compare(&Some(2), &Some(1)), Ordering::GreaterThan);
    assert!(ord.equal(&Some(2), &Some(2)));
    assert!(ord.not_equal(&None, &Some(2)));
  }

  #[test]
  fn option_with_reversed_inner_order() {
    let ord = ord_option(ord_of::<i32>().reverse());
    assert_eq!(ord.compare(&Some(2), &Some(1)), Ordering::LessThan);
    // `None` stays least.
    assert_eq!(ord.compare(&None, &Some(1)), Ordering::LessThan);
  }

  #[test]
  fn partial_option() {
    let ord = partial_ord_option(PartialOrd::<f64>::from_std());
    assert_eq!(ord.compare(&None, &Some(f64::NAN)), PartialOrdering::LessThan);
    assert_eq!(ord.compare(&Some(1.0), &Some(f64::NAN)), PartialOrdering::Incomparable);
  }

  #[test]
  fn lefts_before_rights() {
    let ord = ord_of::<Either<String, i32>>();
    let domain = [
      Either::Left("a".to_string()),
      Either::Left("b".to_string()),
      Either::Right(-7),
      Either::Right(3),
    ];
    for (i, l) in domain.iter().enumerate() {
      for (j, r) in domain.iter().enumerate() {
        assert_eq!(ord.compare(l, r), Ordering::from(i.cmp(&j)));
        assert_eq!(ord.equal(l, r), i == j);
      }
    }
  }

  #[test]
  fn either_from_explicit_sides() {
    let ord = ord_either(ord_of::<i32>().reverse(), ord_of::<bool>());
    assert_eq!(ord.compare(&Either::Left(5), &Either::Left(9)), Ordering::GreaterThan);
    assert_eq!(ord.compare(&Either::Left(5), &Either::Right(false)), Ordering::LessThan);
  }
}
