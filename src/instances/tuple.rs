/*!

Tuple orders for arities 2 through 4.

All of them are the generic lexicographic product (`Lexicographic`) with one component per field. Wider tuples and
structs are assembled with `Lexicographic` directly.

*/

use crate::{
  deferred::Deferred,
  ord::Ord,
  product::Lexicographic,
};

use super::HasOrd;


macro_rules! tuple_ord {
  ($constructor:ident; $(($type_name:ident, $ord:ident, $index:tt)),+) => {
    /// Lexicographic order on the tuple, from an order for each field.
    pub fn $constructor<$($type_name: 'static),+>($($ord: impl Into<Deferred<Ord<$type_name>>>),+)
      -> Ord<($($type_name,)+)>
    {
      Lexicographic::<($($type_name,)+)>::new()
        $(.then($ord, |tuple| &tuple.$index))+
        .build()
    }

    impl<$($type_name: HasOrd),+> HasOrd for ($($type_name,)+) {
      fn ord() -> Ord<Self> {
        $constructor($(Ord::defer(<$type_name>::ord)),+)
      }
    }
  }
}

tuple_ord!(tuple2; (A, a, 0), (B, b, 1));
tuple_ord!(tuple3; (A, a, 0), (B, b, 1), (C, c, 2));
tuple_ord!(tuple4; (A, a, 0), (B, b, 1), (C, c, 2), (D, d, 3));
