/*!

Deriving orders for wrapper shapes.

A wrapper is any type whose order follows from the order of one inner type. `DeriveOrd` is the strategy interface.
Given the inner type's `Ord` (or `PartialOrd`), it produces the wrapper's. Most wrappers only expose their inner
value, and implementing `Transparent` is enough for those: the derived order compares the exposed values. Wrappers
that change the order implement `DeriveOrd` directly, as `std::cmp::Reverse` does here.

Since a transparent wrapper compares through a borrowed projection, the identity fast path also sees through it.
Two `Rc`s that share an allocation compare `Equals` without the inner comparator being called.

*/

use std::{
  cmp::Reverse,
  num::Wrapping,
  rc::Rc,
  sync::Arc
};

use crate::{
  ord::Ord,
  partial_ord::PartialOrd,
};

use super::HasOrd;


/// Obtains the order of `Self` from the order of `Self::Inner`.
pub trait DeriveOrd: 'static {
  type Inner: ?Sized + 'static;

  fn derive_ord(inner: Ord<Self::Inner>) -> Ord<Self>;

  fn derive_partial_ord(inner: PartialOrd<Self::Inner>) -> PartialOrd<Self>;
}

/// A wrapper whose order is exactly the order of the value it exposes.
pub trait Transparent: 'static {
  type Inner: ?Sized + 'static;

  fn inner(&self) -> &Self::Inner;
}


impl<W: Transparent> DeriveOrd for W {
  type Inner = W::Inner;

  fn derive_ord(inner: Ord<W::Inner>) -> Ord<W> {
    inner.contramap_ref(W::inner)
  }

  fn derive_partial_ord(inner: PartialOrd<W::Inner>) -> PartialOrd<W> {
    inner.contramap_ref(W::inner)
  }
}

impl<T: 'static> DeriveOrd for Reverse<T> {
  type Inner = T;

  fn derive_ord(inner: Ord<T>) -> Ord<Reverse<T>> {
    inner.reverse().contramap_ref(|wrapper: &Reverse<T>| &wrapper.0)
  }

  fn derive_partial_ord(inner: PartialOrd<T>) -> PartialOrd<Reverse<T>> {
    inner.reverse().contramap_ref(|wrapper: &Reverse<T>| &wrapper.0)
  }
}


// region Transparent wrappers

impl<T: ?Sized + 'static> Transparent for Box<T> {
  type Inner = T;

  fn inner(&self) -> &T {
    self
  }
}

impl<T: ?Sized + 'static> Transparent for Rc<T> {
  type Inner = T;

  fn inner(&self) -> &T {
    self
  }
}

impl<T: ?Sized + 'static> Transparent for Arc<T> {
  type Inner = T;

  fn inner(&self) -> &T {
    self
  }
}

impl<T: 'static> Transparent for Wrapping<T> {
  type Inner = T;

  fn inner(&self) -> &T {
    &self.0
  }
}

// endregion


// region Canonical instances

impl<T: HasOrd + ?Sized> HasOrd for Box<T> {
  fn ord() -> Ord<Box<T>> {
    Box::<T>::derive_ord(Ord::defer(T::ord))
  }
}

impl<T: HasOrd + ?Sized> HasOrd for Rc<T> {
  fn ord() -> Ord<Rc<T>> {
    Rc::<T>::derive_ord(Ord::defer(T::ord))
  }
}

impl<T: HasOrd + ?Sized> HasOrd for Arc<T> {
  fn ord() -> Ord<Arc<T>> {
    Arc::<T>::derive_ord(Ord::defer(T::ord))
  }
}

impl<T: HasOrd> HasOrd for Wrapping<T> {
  fn ord() -> Ord<Wrapping<T>> {
    Wrapping::<T>::derive_ord(Ord::defer(T::ord))
  }
}

impl<T: HasOrd> HasOrd for Reverse<T> {
  fn ord() -> Ord<Reverse<T>> {
    Reverse::<T>::derive_ord(Ord::defer(T::ord))
  }
}

// endregion
