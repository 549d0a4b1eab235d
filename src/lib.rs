/*!

A comparison algebra.

Comparison outcomes come in two flavors: `Ordering` for total orders and `PartialOrdering`, which adds
`Incomparable`. The orders themselves are capability values, `Ord<A>` and `PartialOrd<A>`, that generic code receives
and passes around like any other value. They are built from raw comparators with `make`, derived from other orders
with combinators (`contramap`, `both`, `either`, `reverse`, ...), or obtained canonically by type with `ord_of::<T>()`.

*/

mod comparison;
mod deferred;
mod either;
mod equal;
mod mapping;
mod ord;
mod partial_ord;
mod product;
pub mod instances;
pub mod logging;

pub use comparison::{
  is_equal,
  is_greater_than,
  is_incomparable,
  is_less_than,
  Ordering,
  PartialOrdering
};
pub use deferred::Deferred;
pub use either::Either;
pub use equal::Equal;
pub use instances::{
  ord_of,
  partial_ord_of,
  HasOrd,
  HasPartialOrd,
  tuple::{tuple2, tuple3, tuple4},
  wrapper::{DeriveOrd, Transparent},
};
pub use mapping::{
  compare_soft,
  partial_ord_mapping,
  Mapping
};
pub use ord::Ord;
pub use partial_ord::PartialOrd;
pub use product::Lexicographic;
