/*!

Lexicographic products of any arity.

A `Lexicographic<C>` is an ordered list of components. Each component pairs a projection out of `C` with the `Ord` of
the projected type. The resulting `Ord<C>` compares the components left to right and stops at the first one that is
not `Equals`. Equality of `C` is the conjunction of the components' equalities.

Tuples of arity 2 through 4 get canonical instances built from this (see `instances::tuple`). Any other fixed shape,
be it a wider tuple or a struct with named fields, is assembled on demand:

```ignore
let by_name_then_age: Ord<Person> =
  Lexicographic::new()
    .then(ord_of::<str>(), |p: &Person| p.name.as_str())
    .then(ord_of::<u32>(), |p: &Person| &p.age)
    .build();
```

Most products have only a handful of components, so they are kept in a `SmallVec` on the stack.

*/

use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
  comparison::Ordering,
  deferred::Deferred,
  equal::Equal,
  ord::Ord,
  partial_ord::Comparator,
};


struct Component<C: ?Sized> {
  compare: Comparator<C, Ordering>,
  equal  : Comparator<C, bool>,
}

type ComponentList<C> = SmallVec<[Component<C>; 4]>;


pub struct Lexicographic<C: ?Sized> {
  components: ComponentList<C>,
}


impl<C: ?Sized + 'static> Lexicographic<C> {

  pub fn new() -> Self {
    Lexicographic {
      components: SmallVec::new()
    }
  }

  /// Appends a component compared through a projection that borrows from `C`.
  pub fn then<A, F>(mut self, ord: impl Into<Deferred<Ord<A>>>, project: F) -> Self
    where A: ?Sized + 'static,
          F: for<'a> Fn(&'a C) -> &'a A + Send + Sync + 'static
  {
    let ord: Deferred<Ord<A>> = ord.into();
    let ord_for_equal = ord.clone();
    let project = Arc::new(project);
    let project_for_equal = project.clone();

    self.components.push(
      Component {
        compare: Arc::new(move |l: &C, r: &C| ord.force().compare(project(l), project(r))),
        equal  : Arc::new(move |l: &C, r: &C| {
          ord_for_equal.force().equal(project_for_equal(l), project_for_equal(r))
        }),
      }
    );
    self
  }

  /// Appends a component compared through a computed key.
  pub fn then_key<A, F>(mut self, ord: impl Into<Deferred<Ord<A>>>, key: F) -> Self
    where A: 'static,
          F: Fn(&C) -> A + Send + Sync + 'static
  {
    let ord: Deferred<Ord<A>> = ord.into();
    let ord_for_equal = ord.clone();
    let key = Arc::new(key);
    let key_for_equal = key.clone();

    self.components.push(
      Component {
        compare: Arc::new(move |l: &C, r: &C| ord.force().compare(&key(l), &key(r))),
        equal  : Arc::new(move |l: &C, r: &C| ord_for_equal.force().equal(&key_for_equal(l), &key_for_equal(r))),
      }
    );
    self
  }

  pub fn len(&self) -> usize {
    self.components.len()
  }

  pub fn is_empty(&self) -> bool {
    self.components.is_empty()
  }

  pub fn build(self) -> Ord<C> {
    let components: Arc<ComponentList<C>> = Arc::new(self.components);
    let components_for_equal = components.clone();

    Ord::make(
      Equal::make(move |l: &C, r: &C| {
        components_for_equal.iter().all(|component| (component.equal)(l, r))
      }),
      move |l: &C, r: &C| {
        for component in components.iter() {
          let ordering = (component.compare)(l, r);
          if ordering != Ordering::Equals {
            return ordering;
          }
        }
        Ordering::Equals
      }
    )
  }

}


impl<C: ?Sized + 'static> Default for Lexicographic<C> {
  fn default() -> Self {
    Lexicographic::new()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug)]
  struct Person {
    name: String,
    age : u32,
  }

  fn person(name: &str, age: u32) -> Person {
    Person { name: name.to_string(), age }
  }

  #[test]
  fn empty_product_is_trivial() {
    let unit: Ord<Person> = Lexicographic::new().build();
    assert_eq!(unit.compare(&person("a", 1), &person("b", 2)), Ordering::Equals);
    assert!(unit.equal(&person("a", 1), &person("b", 2)));
  }

  #[test]
  fn first_difference_wins() {
    let ord: Ord<Person> =
      Lexicographic::new()
        .then(Ord::<str>::from_std(), |p: &Person| p.name.as_str())
        .then(Ord::<u32>::from_std(), |p: &Person| &p.age)
        .build();

    assert_eq!(ord.compare(&person("ann", 90), &person("bob", 10)), Ordering::LessThan);
    assert_eq!(ord.compare(&person("bob", 30), &person("bob", 10)), Ordering::GreaterThan);
    assert_eq!(ord.compare(&person("bob", 10), &person("bob", 10)), Ordering::Equals);
    assert!(ord.equal(&person("bob", 10), &person("bob", 10)));
    assert!(ord.not_equal(&person("bob", 10), &person("bob", 11)));
  }

  #[test]
  fn wide_products_are_synthesized() {
    type Wide = (u8, u8, u8, u8, u8, u8, u8);
    let ord: Ord<Wide> =
      Lexicographic::new()
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.0)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.1)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.2)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.3)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.4)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.5)
        .then(Ord::<u8>::from_std(), |t: &Wide| &t.6)
        .build();

    assert_eq!(ord.compare(&(0, 0, 0, 0, 0, 0, 1), &(0, 0, 0, 0, 0, 0, 2)), Ordering::LessThan);
    assert_eq!(ord.compare(&(0, 0, 0, 0, 0, 3, 1), &(0, 0, 0, 0, 0, 0, 2)), Ordering::GreaterThan);
  }

  #[test]
  fn keyed_components() {
    let ord: Ord<String> =
      Lexicographic::new()
        .then_key(Ord::<usize>::from_std(), |s: &String| s.len())
        .then(Ord::<str>::from_std(), |s: &String| s.as_str())
        .build();

    assert_eq!(ord.compare(&"zz".to_string(), &"aaa".to_string()), Ordering::LessThan);
    assert_eq!(ord.compare(&"ab".to_string(), &"aa".to_string()), Ordering::GreaterThan);
  }
}
