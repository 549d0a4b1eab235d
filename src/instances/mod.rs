/*!

Canonical instances.

Generic code that needs "the" order of a type asks for it with a trait bound: `T: HasOrd` gives `T::ord()`, and
`T: HasPartialOrd` gives `T::partial_ord()`. Resolution is static at every call site. There is no global registry to
populate or consult.

Every `HasOrd` type is also `HasPartialOrd` (through the refined `PartialOrd` its `Ord` carries). Types that are only
partially ordered, such as key/value mappings, implement `HasPartialOrd` directly.

The instances for composite shapes (sequences, options, sums, tuples, wrappers) obtain the instances of their parts
through `Ord::defer`. A recursive type can therefore define its own instance in terms of, say, `Vec<Self>` without
the two constructors calling each other forever.

The free functions in the submodules build the same instances from explicit capabilities, for callers who want a
non-canonical order of the parts (a reversed element order, a partial element order, and so on).

*/

pub mod option;
pub mod primitive;
pub mod sequence;
pub mod tuple;
pub mod wrapper;

use crate::{
  ord::Ord,
  partial_ord::PartialOrd,
};


/// Types with a canonical total order.
pub trait HasOrd: 'static {
  fn ord() -> Ord<Self>;
}

/// Types with a canonical partial order.
pub trait HasPartialOrd: 'static {
  fn partial_ord() -> PartialOrd<Self>;
}


impl<T: HasOrd + ?Sized> HasPartialOrd for T {
  fn partial_ord() -> PartialOrd<T> {
    T::ord().to_partial()
  }
}


/// The canonical total order of `T`.
pub fn ord_of<T: HasOrd + ?Sized>() -> Ord<T> {
  T::ord()
}

/// The canonical partial order of `T`.
pub fn partial_ord_of<T: HasPartialOrd + ?Sized>() -> PartialOrd<T> {
  T::partial_ord()
}
