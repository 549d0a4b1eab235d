/*!

The total-order capability.

An `Ord<A>` refines `PartialOrd<A>`. Its comparator returns an `Ordering`, which has no `Incomparable` variant, so
every pair of values is decided one of the three ways. An `Ord` always carries the `PartialOrd` it refines (the same
comparator lifted into `PartialOrdering`), which in turn carries the `Equal<A>` both must agree with.

The combinators build new total orders from existing ones:

| combinator      | result                                                              |
|:----------------|:--------------------------------------------------------------------|
| `contramap`     | compare `B`s through a key `B → A`                                  |
| `contramap_ref` | compare `B`s through a borrowed projection `&B → &A`                |
| `both`          | lexicographic order on `(A, B)`                                     |
| `both_with`     | lexicographic order on `C` through `C → (A, B)`                     |
| `either`        | sum order on `Either<A, B>`, every `Left` below every `Right`       |
| `either_with`   | sum order on `C` through `C → Either<A, B>`                         |
| `reverse`       | the opposite order                                                  |
| `map_ordering`  | post-process each result                                            |

The "other" operand of a binary combinator is taken as `impl Into<Deferred<Ord<_>>>`, so recursive instances can be
written with `Ord::defer` without constructing each other forever.

*/

use std::{
  cmp::Ordering as StdOrdering,
  sync::Arc
};

use crate::{
  comparison::Ordering,
  deferred::Deferred,
  either::Either,
  equal::Equal,
  partial_ord::{
    identical,
    Comparator,
    PartialOrd
  },
  product::Lexicographic,
};


pub struct Ord<A: ?Sized> {
  partial: PartialOrd<A>,
  compare: Comparator<A, Ordering>,
}


impl<A: ?Sized + 'static> Ord<A> {

  // region Construction

  /// Wraps a raw comparator. `equal` must agree with it: `compare(a, b) == Equals` exactly when `equal(a, b)`. The
  /// refined `PartialOrd` is the same comparator lifted into `PartialOrdering`.
  pub fn make<F>(equal: Equal<A>, compare: F) -> Self
    where F: Fn(&A, &A) -> Ordering + Send + Sync + 'static
  {
    let compare: Comparator<A, Ordering> = Arc::new(compare);
    let lifted = compare.clone();
    Ord {
      partial: PartialOrd::make(equal, move |l: &A, r: &A| lifted(l, r).into()),
      compare
    }
  }

  /// Wraps a raw comparator and takes equality to be "compares `Equals`".
  pub fn from_fn<F>(compare: F) -> Self
    where F: Fn(&A, &A) -> Ordering + Send + Sync + 'static
  {
    let compare: Comparator<A, Ordering> = Arc::new(compare);
    let for_equal = compare.clone();
    let lifted = compare.clone();
    Ord {
      partial: PartialOrd::make(
        Equal::make(move |l: &A, r: &A| identical(l, r) || for_equal(l, r).is_equal()),
        move |l: &A, r: &A| lifted(l, r).into()
      ),
      compare
    }
  }

  /// The total order of `A`'s standard `Ord` implementation.
  pub fn from_std() -> Self
    where A: std::cmp::Ord
  {
    Ord::make(
      Equal::from_partial_eq(),
      |l: &A, r: &A| l.cmp(r).into()
    )
  }

  /// A total order that is built the first time it is used. This is how recursive instances tie the knot.
  pub fn defer<F>(thunk: F) -> Self
    where F: Fn() -> Ord<A> + Send + Sync + 'static
  {
    let deferred = Deferred::new(thunk);
    let for_equal = deferred.clone();
    Ord::make(
      Equal::make(move |l: &A, r: &A| for_equal.force().equal(l, r)),
      move |l: &A, r: &A| deferred.force().compare(l, r)
    )
  }

  // endregion

  // region Queries

  /// Compares `l` with `r`. Identical references are `Equals` without consulting the comparator.
  pub fn compare(&self, l: &A, r: &A) -> Ordering {
    if identical(l, r) {
      return Ordering::Equals;
    }
    (self.compare)(l, r)
  }

  pub fn as_partial(&self) -> &PartialOrd<A> {
    &self.partial
  }

  pub fn to_partial(&self) -> PartialOrd<A> {
    self.partial.clone()
  }

  pub fn equal_capability(&self) -> &Equal<A> {
    self.partial.equal_capability()
  }

  pub fn equal(&self, l: &A, r: &A) -> bool {
    self.partial.equal(l, r)
  }

  pub fn not_equal(&self, l: &A, r: &A) -> bool {
    self.partial.not_equal(l, r)
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

  /// The smaller of `l` and `r`, preferring `l` on ties.
  pub fn min<'a>(&self, l: &'a A, r: &'a A) -> &'a A {
    if self.greater_than(l, r) { r } else { l }
  }

  /// The larger of `l` and `r`, preferring `r` on ties.
  pub fn max<'a>(&self, l: &'a A, r: &'a A) -> &'a A {
    if self.greater_than(l, r) { l } else { r }
  }

  /// Restricts `value` to the interval `[low, high]`.
  ///
  /// Panics if `low` is greater than `high`, as `std::cmp::Ord::clamp` does.
  pub fn clamp<'a>(&self, value: &'a A, low: &'a A, high: &'a A) -> &'a A {
    assert!(self.less_or_equal(low, high), "Ord::clamp called with low > high");
    if self.less_than(value, low) {
      low
    } else if self.greater_than(value, high) {
      high
    } else {
      value
    }
  }

  /// A standard-library comparator, for `slice::sort_by`, `BinaryHeap` wrappers, and the like.
  pub fn comparator(&self) -> impl Fn(&A, &A) -> StdOrdering + '_ {
    move |l: &A, r: &A| -> StdOrdering { self.compare(l, r).into() }
  }

  /// Stable sort of `values` under this order.
  pub fn sort(&self, values: &mut [A])
    where A: Sized
  {
    values.sort_by(self.comparator());
  }

  pub fn is_sorted(&self, values: &[A]) -> bool
    where A: Sized
  {
    values.windows(2).all(|pair| self.less_or_equal(&pair[0], &pair[1]))
  }

  // endregion

  // region Combinators

  /// Compares `B`s by comparing the keys computed from them.
  pub fn contramap<B, F>(&self, f: F) -> Ord<B>
    where B: ?Sized + 'static,
          F: Fn(&B) -> A + Send + Sync + 'static,
          A: Sized
  {
    let f = Arc::new(f);
    let for_equal = f.clone();
    let this = self.clone();
    Ord::make(
      self.equal_capability().contramap(move |b: &B| for_equal(b)),
      move |l: &B, r: &B| this.compare(&f(l), &f(r))
    )
  }

  /// Compares `B`s by a projection that borrows from them.
  pub fn contramap_ref<B, F>(&self, f: F) -> Ord<B>
    where B: ?Sized + 'static,
          F: for<'a> Fn(&'a B) -> &'a A + Send + Sync + 'static
  {
    let f = Arc::new(f);
    let for_equal = f.clone();
    let this = self.clone();
    Ord::make(
      self.equal_capability().contramap_ref(move |b: &B| for_equal(b)),
      move |l: &B, r: &B| this.compare(f(l), f(r))
    )
  }

  /// Lexicographic product: compare the first components, and the second ones only if the first are `Equals`.
  pub fn both<B>(&self, that: impl Into<Deferred<Ord<B>>>) -> Ord<(A, B)>
    where A: Sized,
          B: 'static
  {
    Lexicographic::new()
      .then(self.clone(), |pair: &(A, B)| &pair.0)
      .then(that, |pair: &(A, B)| &pair.1)
      .build()
  }

  pub fn both_with<B, C, F>(&self, that: impl Into<Deferred<Ord<B>>>, f: F) -> Ord<C>
    where A: Sized,
          B: 'static,
          C: ?Sized + 'static,
          F: Fn(&C) -> (A, B) + Send + Sync + 'static
  {
    self.both(that).contramap(f)
  }

  /// Sum order: every `Left` is `LessThan` every `Right`, and values with the same tag compare by that side's order.
  pub fn either<B>(&self, that: impl Into<Deferred<Ord<B>>>) -> Ord<Either<A, B>>
    where A: Sized,
          B: 'static
  {
    let that: Deferred<Ord<B>> = that.into();
    let (this, this_for_equal) = (self.clone(), self.clone());
    let that_for_equal = that.clone();
    Ord::make(
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
          (Either::Left(_), Either::Right(_))  => Ordering::LessThan,
          (Either::Right(_), Either::Left(_))  => Ordering::GreaterThan,
        }
      }
    )
  }

  pub fn either_with<B, C, F>(&self, that: impl Into<Deferred<Ord<B>>>, f: F) -> Ord<C>
    where A: Sized,
          B: 'static,
          C: ?Sized + 'static,
          F: Fn(&C) -> Either<A, B> + Send + Sync + 'static
  {
    self.either(that).contramap(f)
  }

  pub fn reverse(&self) -> Ord<A> {
    self.map_ordering(Ordering::opposite)
  }

  /// Post-processes every comparison result with `f`. Equality is kept, so `f` must fix `Equals` and must not map
  /// anything else to it; `f` must also commute with `opposite` for the result to stay antisymmetric.
  pub fn map_ordering<F>(&self, f: F) -> Ord<A>
    where F: Fn(Ordering) -> Ordering + Send + Sync + 'static
  {
    let this = self.clone();
    Ord::make(
      self.equal_capability().clone(),
      move |l: &A, r: &A| f(this.compare(l, r))
    )
  }

  // endregion

}


impl<A: ?Sized> Clone for Ord<A> {
  fn clone(&self) -> Self {
    Ord {
      partial: self.partial.clone(),
      compare: self.compare.clone(),
    }
  }
}


#[cfg(test)]
mod tests {
  use strum::IntoEnumIterator;
  use crate::{
    comparison::PartialOrdering,
    instances::sequence::ord_vec,
  };
  use super::*;

  fn ints() -> Ord<i32> {
    Ord::from_std()
  }

  fn check_total_order_laws<A: 'static>(ord: &Ord<A>, domain: &[A]) {
    for a in domain {
      for b in domain {
        let ab = ord.compare(a, b);
        assert_eq!(ab.opposite(), ord.compare(b, a), "antisymmetry");
        assert_eq!(ab.is_equal(), ord.equal(a, b), "consistency with equality");
        assert_eq!(PartialOrdering::from(ab), ord.as_partial().compare(a, b), "refinement");
        for c in domain {
          if ab.is_less_or_equal() && ord.compare(b, c).is_less_or_equal() {
            assert!(ord.compare(a, c).is_less_or_equal(), "transitivity");
          }
        }
      }
      assert_eq!(ord.compare(a, a), Ordering::Equals, "reflexivity");
    }
  }

  #[test]
  fn from_std_is_lawful() {
    check_total_order_laws(&ints(), &[-3, 0, 0, 2, 7]);
  }

  #[test]
  fn ordering_of_orderings() {
    let ord = Ord::<u8>::from_std().contramap(|o: &Ordering| o.ordinal());
    let all: Vec<Ordering> = Ordering::iter().collect();
    check_total_order_laws(&ord, &all);
    assert_eq!(ord.compare(&Ordering::LessThan, &Ordering::GreaterThan), Ordering::LessThan);
  }

  #[test]
  fn derived_predicates() {
    let ord = ints();
    assert!(ord.less_than(&1, &2));
    assert!(ord.less_or_equal(&2, &2));
    assert!(ord.greater_than(&3, &2));
    assert!(ord.greater_or_equal(&3, &3));
    assert_eq!(*ord.min(&4, &2), 2);
    assert_eq!(*ord.max(&4, &2), 4);
    assert_eq!(*ord.clamp(&9, &0, &5), 5);
    assert_eq!(*ord.clamp(&-9, &0, &5), 0);
    assert_eq!(*ord.clamp(&3, &0, &5), 3);
  }

  #[test]
  fn min_and_max_tie_breaking() {
    let by_len = Ord::<usize>::from_std().contramap(|s: &String| s.len());
    let (a, b) = ("ab".to_string(), "cd".to_string());
    assert_eq!(by_len.min(&a, &b), "ab");
    assert_eq!(by_len.max(&a, &b), "cd");
  }

  #[test]
  fn sorting() {
    let mut values = vec![5, -1, 3, 3, 0];
    ints().reverse().sort(&mut values);
    assert_eq!(values, vec![5, 3, 3, 0, -1]);
    assert!(ints().reverse().is_sorted(&values));
    assert!(!ints().is_sorted(&values));
  }

  #[test]
  fn lexicographic_product_law() {
    let pairs = ints().both(Ord::<char>::from_std());
    let domain: Vec<(i32, char)> = vec![(0, 'a'), (0, 'b'), (1, 'a'), (-1, 'z')];
    for l in &domain {
      for r in &domain {
        let expected = ints().compare(&l.0, &r.0)
                             .or_else(Ord::<char>::from_std().compare(&l.1, &r.1));
        assert_eq!(pairs.compare(l, r), expected);
      }
    }
    check_total_order_laws(&pairs, &domain);
  }

  #[test]
  fn both_with_projection() {
    let ord = ints().both_with(ints().reverse(), |v: &Vec<i32>| (v.len() as i32, v.iter().sum::<i32>()));
    // Shorter first, then larger sum first.
    assert_eq!(ord.compare(&vec![9], &vec![1, 1]), Ordering::LessThan);
    assert_eq!(ord.compare(&vec![1, 5], &vec![2, 1]), Ordering::LessThan);
  }

  #[test]
  fn sum_order() {
    let sum = ints().either(Ord::<String>::from_std());
    let domain: Vec<Either<i32, String>> = vec![
      Either::Left(10),
      Either::Left(-2),
      Either::Right("a".to_string()),
      Either::Right("b".to_string()),
    ];
    assert_eq!(sum.compare(&domain[0], &domain[2]), Ordering::LessThan);
    assert_eq!(sum.compare(&domain[3], &domain[1]), Ordering::GreaterThan);
    assert_eq!(sum.compare(&domain[0], &domain[1]), Ordering::GreaterThan);
    check_total_order_laws(&sum, &domain);

    let parity = ints().either_with(ints(), |n: &i32| {
      if n % 2 == 0 { Either::Left(*n) } else { Either::Right(*n) }
    });
    assert_eq!(parity.compare(&100, &1), Ordering::LessThan);
  }

  #[test]
  fn reverse_and_map_ordering() {
    let reversed = ints().reverse();
    assert_eq!(reversed.compare(&1, &2), Ordering::GreaterThan);
    assert_eq!(reversed.as_partial().compare(&1, &2), PartialOrdering::GreaterThan);
    check_total_order_laws(&reversed, &[1, 2, 3]);

    let same = ints().map_ordering(|o| o);
    assert_eq!(same.compare(&1, &2), Ordering::LessThan);
  }

  #[test]
  fn from_fn_derives_equality() {
    let case_insensitive = Ord::from_fn(|l: &String, r: &String| {
      l.to_lowercase().cmp(&r.to_lowercase()).into()
    });
    assert!(case_insensitive.equal(&"Loris".to_string(), &"LORIS".to_string()));
    assert_eq!(case_insensitive.compare(&"a".to_string(), &"B".to_string()), Ordering::LessThan);
  }

  #[test]
  fn comparator_drives_std_sort() {
    let mut words: Vec<String> = vec!["pear".into(), "fig".into(), "apple".into()];
    let by_len = Ord::<usize>::from_std().contramap(|s: &String| s.len());
    words.sort_by(by_len.comparator());
    assert_eq!(words, vec!["fig", "pear", "apple"]);
  }

  // A rose tree and its forest each need the other's order.
  struct Tree {
    label   : u32,
    children: Forest,
  }

  struct Forest(Vec<Tree>);

  fn tree_ord() -> Ord<Tree> {
    Lexicographic::new()
      .then(Ord::<u32>::from_std(), |t: &Tree| &t.label)
      .then(Ord::defer(forest_ord), |t: &Tree| &t.children)
      .build()
  }

  fn forest_ord() -> Ord<Forest> {
    ord_vec(Ord::defer(tree_ord)).contramap_ref(|f: &Forest| &f.0)
  }

  fn leaf(label: u32) -> Tree {
    Tree { label, children: Forest(vec![]) }
  }

  #[test]
  fn mutually_recursive_instances() {
    let ord = tree_ord();
    let small = Tree { label: 1, children: Forest(vec![leaf(2), leaf(3)]) };
    let large = Tree { label: 1, children: Forest(vec![leaf(2), leaf(4)]) };
    let longer = Tree { label: 1, children: Forest(vec![leaf(2), leaf(3), leaf(0)]) };

    assert_eq!(ord.compare(&small, &large), Ordering::LessThan);
    assert_eq!(ord.compare(&large, &small), Ordering::GreaterThan);
    assert_eq!(ord.compare(&small, &longer), Ordering::LessThan);
    assert!(ord.equal(&small, &Tree { label: 1, children: Forest(vec![leaf(2), leaf(3)]) }));
  }
}
