/*!

Instances for primitive types.

Primitive instances never change, so each is built once per process and cloned out of a `lazy_static` afterward.
Cloning an `Ord` only bumps reference counts.

Floating point types are totally ordered by the IEEE 754 `totalOrder` predicate (`total_cmp`), and their equality is
derived from the same predicate. That makes `NaN` equal to itself and `-0.0` distinct from `0.0`, which is what the
reflexivity and consistency laws require. The IEEE comparison operators satisfy neither.

*/

use std::{
  cmp::Ordering as StdOrdering,
  convert::Infallible
};

use lazy_static::lazy_static;

use crate::{
  comparison::Ordering,
  equal::Equal,
  ord::Ord,
};

use super::HasOrd;


macro_rules! cached_std_ord {
  ($($type_name:ty),* $(,)?) => {
    $(
      impl HasOrd for $type_name {
        fn ord() -> Ord<$type_name> {
          lazy_static! {
            static ref ORD: Ord<$type_name> = Ord::from_std();
          }
          ORD.clone()
        }
      }
    )*
  }
}

macro_rules! cached_float_ord {
  ($($type_name:ty),* $(,)?) => {
    $(
      impl HasOrd for $type_name {
        fn ord() -> Ord<$type_name> {
          lazy_static! {
            static ref ORD: Ord<$type_name> = Ord::make(
              Equal::make(|l: &$type_name, r: &$type_name| l.total_cmp(r) == StdOrdering::Equal),
              |l: &$type_name, r: &$type_name| l.total_cmp(r).into()
            );
          }
          ORD.clone()
        }
      }
    )*
  }
}


cached_std_ord!(
  i8, i16, i32, i64, i128, isize,
  u8, u16, u32, u64, u128, usize,
  bool, char, (), str, String,
);

cached_float_ord!(f32, f64);


impl HasOrd for Ordering {
  fn ord() -> Ord<Ordering> {
    lazy_static! {
      static ref ORD: Ord<Ordering> = u8::ord().contramap(|ordering: &Ordering| ordering.ordinal());
    }
    ORD.clone()
  }
}


/// The empty type has no values, so its comparator can never be called. Reaching it would mean an `Infallible` was
/// constructed, and the `match` below has no arms to run.
impl HasOrd for Infallible {
  fn ord() -> Ord<Infallible> {
    Ord::from_fn(|never: &Infallible, _: &Infallible| match *never {})
  }
}
