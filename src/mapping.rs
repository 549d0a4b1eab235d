/*!

The partial order of key/value mappings.

Two mappings are compared key by key. Every key in either mapping contributes one signal:

| key is in      | signal                          |
|:---------------|:--------------------------------|
| left only      | `GreaterThan`                   |
| right only     | `LessThan`                      |
| both           | the value order on the two values |

The signals are folded together with `PartialOrdering::unify`, starting from `Equals`. No key has priority over any
other, so a left mapping is `GreaterThan` a right mapping only when every signal is `GreaterThan` or `Equals` and at
least one is not `Equals`. A single `LessThan` next to a `GreaterThan`, or a single `Incomparable` value pair, makes
the whole comparison `Incomparable`.

Only the presence of extra keys matters. Two extra keys on the left count the same as one.

*/

use std::{
  collections::{
    btree_map,
    hash_map,
    BTreeMap,
    HashMap
  },
  hash::{
    BuildHasher,
    Hash
  }
};

use crate::{
  comparison::PartialOrdering,
  deferred::Deferred,
  equal::Equal,
  instances::HasPartialOrd,
  logging::{
    log_at_level,
    verbosity_is_at_least
  },
  partial_ord::PartialOrd,
};


/// A finite key/value container with unique keys.
pub trait Mapping {
  type Key: 'static;
  type Value: 'static;
  type Entries<'a>: Iterator<Item = (&'a Self::Key, &'a Self::Value)> where Self: 'a;

  fn len(&self) -> usize;

  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

  fn contains_key(&self, key: &Self::Key) -> bool {
    self.get(key).is_some()
  }

  fn entries(&self) -> Self::Entries<'_>;
}


impl<K, V, S> Mapping for HashMap<K, V, S>
  where K: Eq + Hash + 'static,
        V: 'static,
        S: BuildHasher
{
  type Key = K;
  type Value = V;
  type Entries<'a> = hash_map::Iter<'a, K, V> where Self: 'a;

  fn len(&self) -> usize {
    HashMap::len(self)
  }

  fn get(&self, key: &K) -> Option<&V> {
    HashMap::get(self, key)
  }

  fn entries(&self) -> Self::Entries<'_> {
    self.iter()
  }
}

impl<K, V> Mapping for BTreeMap<K, V>
  where K: std::cmp::Ord + 'static,
        V: 'static
{
  type Key = K;
  type Value = V;
  type Entries<'a> = btree_map::Iter<'a, K, V> where Self: 'a;

  fn len(&self) -> usize {
    BTreeMap::len(self)
  }

  fn get(&self, key: &K) -> Option<&V> {
    BTreeMap::get(self, key)
  }

  fn entries(&self) -> Self::Entries<'_> {
    self.iter()
  }
}


/// Compares two mappings under the partial order described in the module documentation. Runs in time linear in the
/// size of the larger mapping and returns as soon as the result is known to be `Incomparable`.
pub fn compare_soft<M: Mapping>(left: &M, right: &M, values: &PartialOrd<M::Value>) -> PartialOrdering {
  let mut result = PartialOrdering::Equals;
  let mut shared: usize = 0;

  for (key, left_value) in left.entries() {
    let signal = match right.get(key) {
      Some(right_value) => {
        shared += 1;
        values.compare(left_value, right_value)
      }
      None => PartialOrdering::GreaterThan,
    };

    result = result.unify(signal);
    if result == PartialOrdering::Incomparable {
      log_incomparable(left.len(), right.len());
      return result;
    }
  }

  // Keys are unique, so any entries of `right` beyond the shared ones are keys that `left` lacks.
  if right.len() > shared {
    result = result.unify(PartialOrdering::LessThan);
    if result == PartialOrdering::Incomparable {
      log_incomparable(left.len(), right.len());
    }
  }

  result
}

fn log_incomparable(left_len: usize, right_len: usize) {
  if verbosity_is_at_least(5) {
    log_at_level(
      5,
      format!("Mappings with {} and {} entries are incomparable.", left_len, right_len).as_str()
    );
  }
}


/// The partial order of mappings of type `M`, from a partial order of their values. Two mappings are equal when they
/// have the same keys and equal values at every key.
pub fn partial_ord_mapping<M>(values: impl Into<Deferred<PartialOrd<M::Value>>>) -> PartialOrd<M>
  where M: Mapping + 'static
{
  let values: Deferred<PartialOrd<M::Value>> = values.into();
  let values_for_equal = values.clone();
  PartialOrd::make(
    Equal::make(move |l: &M, r: &M| {
      let values = values_for_equal.force();
      l.len() == r.len()
        && l.entries().all(|(key, left_value)| {
          match r.get(key) {
            Some(right_value) => values.equal(left_value, right_value),
            None              => false,
          }
        })
    }),
    move |l: &M, r: &M| compare_soft(l, r, values.force())
  )
}


impl<K, V, S> HasPartialOrd for HashMap<K, V, S>
  where K: Eq + Hash + 'static,
        V: HasPartialOrd,
        S: BuildHasher + 'static
{
  fn partial_ord() -> PartialOrd<HashMap<K, V, S>> {
    partial_ord_mapping(PartialOrd::defer(V::partial_ord))
  }
}

impl<K, V> HasPartialOrd for BTreeMap<K, V>
  where K: std::cmp::Ord + 'static,
        V: HasPartialOrd
{
  fn partial_ord() -> PartialOrd<BTreeMap<K, V>> {
    partial_ord_mapping(PartialOrd::defer(V::partial_ord))
  }
}
