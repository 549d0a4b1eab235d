/*!

Comparison outcomes.

There are two result types. An `Ordering` is the outcome of comparing two values under a total order, so it is always
one of `LessThan`, `Equals`, or `GreaterThan`. A `PartialOrdering` is the outcome under a partial order and adds
`Incomparable`. Every `Ordering` embeds into `PartialOrdering`.

There are also two ways to combine outcomes:

  * `or_else`, the lexicographic combine. The first non-`Equals` outcome wins. It is associative with identity
    `Equals`, but it is not commutative. Products and sequences are compared with it.
  * `unify`, defined only on `PartialOrdering`. Two outcomes that agree (or where one is `Equals`) survive, and
    everything else collapses to `Incomparable`. It is commutative, associative, and idempotent, with identity `Equals`
    and absorbing element `Incomparable`. Structural comparisons in which no field has priority use it, the mapping
    comparator in particular.

*/

use std::cmp::Ordering as StdOrdering;

use strum_macros::{
  Display,
  EnumIter,
  IntoStaticStr
};


/// The outcome of a total-order comparison.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, IntoStaticStr, EnumIter)]
pub enum Ordering {
  LessThan,
  Equals,
  GreaterThan,
}

/// The outcome of a partial-order comparison.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Display, IntoStaticStr, EnumIter)]
pub enum PartialOrdering {
  LessThan,
  Equals,
  GreaterThan,
  Incomparable,
}


impl Ordering {

  /// Swaps `LessThan` and `GreaterThan`. `Equals` is fixed.
  pub fn opposite(self) -> Ordering {
    match self {
      Ordering::LessThan    => Ordering::GreaterThan,
      Ordering::Equals      => Ordering::Equals,
      Ordering::GreaterThan => Ordering::LessThan,
    }
  }

  /// The position of `self` in `LessThan < Equals < GreaterThan`. This is what the `Ord` instance for `Ordering`
  /// itself is built from.
  pub fn ordinal(self) -> u8 {
    match self {
      Ordering::LessThan    => 0,
      Ordering::Equals      => 1,
      Ordering::GreaterThan => 2,
    }
  }

  /// Lexicographic combine: `self` unless `self` is `Equals`, in which case `other`.
  pub fn or_else(self, other: Ordering) -> Ordering {
    match self {
      Ordering::Equals => other,
      decided          => decided,
    }
  }

  /// Same as `or_else`, but `other` is only computed when it is needed.
  pub fn or_else_with<F>(self, other: F) -> Ordering
    where F: FnOnce() -> Ordering
  {
    match self {
      Ordering::Equals => other(),
      decided          => decided,
    }
  }

  /// Lexicographic fold of `outcomes`, stopping at the first one that is not `Equals`. An empty fold is `Equals`.
  pub fn combine_all<I>(outcomes: I) -> Ordering
    where I: IntoIterator<Item = Ordering>
  {
    outcomes.into_iter()
            .find(|outcome| *outcome != Ordering::Equals)
            .unwrap_or(Ordering::Equals)
  }

  // region Predicates

  pub fn is_equal(self) -> bool {
    self == Ordering::Equals
  }

  pub fn is_less_than(self) -> bool {
    self == Ordering::LessThan
  }

  pub fn is_greater_than(self) -> bool {
    self == Ordering::GreaterThan
  }

  pub fn is_less_or_equal(self) -> bool {
    self != Ordering::GreaterThan
  }

  pub fn is_greater_or_equal(self) -> bool {
    self != Ordering::LessThan
  }

  // endregion

}


impl PartialOrdering {

  /// Swaps `LessThan` and `GreaterThan`. `Equals` and `Incomparable` are fixed.
  pub fn opposite(self) -> PartialOrdering {
    match self {
      PartialOrdering::LessThan    => PartialOrdering::GreaterThan,
      PartialOrdering::GreaterThan => PartialOrdering::LessThan,
      fixed                        => fixed,
    }
  }

  /// Lexicographic combine over four values. `Incomparable` is not neutral, so it wins like any other decided outcome.
  pub fn or_else(self, other: PartialOrdering) -> PartialOrdering {
    match self {
      PartialOrdering::Equals => other,
      decided                 => decided,
    }
  }

  pub fn or_else_with<F>(self, other: F) -> PartialOrdering
    where F: FnOnce() -> PartialOrdering
  {
    match self {
      PartialOrdering::Equals => other(),
      decided                 => decided,
    }
  }

  /// Reconciles two independent signals without giving either priority. Agreeing signals survive, `Equals` defers to
  /// the other operand, and any clash or `Incomparable` operand gives `Incomparable`.
  pub fn unify(self, other: PartialOrdering) -> PartialOrdering {
    match (self, other) {
      (PartialOrdering::Equals, x)
      | (x, PartialOrdering::Equals) => x,

      (PartialOrdering::LessThan, PartialOrdering::LessThan)       => PartialOrdering::LessThan,
      (PartialOrdering::GreaterThan, PartialOrdering::GreaterThan) => PartialOrdering::GreaterThan,

      _ => PartialOrdering::Incomparable,
    }
  }

  /// Folds `signals` with `unify` starting from `Equals`. Stops early once the fold is `Incomparable`, since nothing
  /// can bring it back.
  pub fn unify_all<I>(signals: I) -> PartialOrdering
    where I: IntoIterator<Item = PartialOrdering>
  {
    let mut result = PartialOrdering::Equals;
    for signal in signals {
      result = result.unify(signal);
      if result == PartialOrdering::Incomparable {
        break;
      }
    }
    result
  }

  /// `None` exactly when `self` is `Incomparable`.
  pub fn to_ordering(self) -> Option<Ordering> {
    match self {
      PartialOrdering::LessThan     => Some(Ordering::LessThan),
      PartialOrdering::Equals       => Some(Ordering::Equals),
      PartialOrdering::GreaterThan  => Some(Ordering::GreaterThan),
      PartialOrdering::Incomparable => None,
    }
  }

  // region Predicates

  pub fn is_equal(self) -> bool {
    self == PartialOrdering::Equals
  }

  pub fn is_less_than(self) -> bool {
    self == PartialOrdering::LessThan
  }

  pub fn is_greater_than(self) -> bool {
    self == PartialOrdering::GreaterThan
  }

  pub fn is_incomparable(self) -> bool {
    self == PartialOrdering::Incomparable
  }

  pub fn is_less_or_equal(self) -> bool {
    matches!(self, PartialOrdering::LessThan | PartialOrdering::Equals)
  }

  pub fn is_greater_or_equal(self) -> bool {
    matches!(self, PartialOrdering::GreaterThan | PartialOrdering::Equals)
  }

  // endregion

}


// region Free predicates

pub fn is_equal<O: Into<PartialOrdering>>(outcome: O) -> bool {
  Into::<PartialOrdering>::into(outcome).is_equal()
}

pub fn is_less_than<O: Into<PartialOrdering>>(outcome: O) -> bool {
  Into::<PartialOrdering>::into(outcome).is_less_than()
}

pub fn is_greater_than<O: Into<PartialOrdering>>(outcome: O) -> bool {
  Into::<PartialOrdering>::into(outcome).is_greater_than()
}

pub fn is_incomparable<O: Into<PartialOrdering>>(outcome: O) -> bool {
  Into::<PartialOrdering>::into(outcome).is_incomparable()
}

// endregion


// region Conversions

impl From<Ordering> for PartialOrdering {
  fn from(ordering: Ordering) -> Self {
    match ordering {
      Ordering::LessThan    => PartialOrdering::LessThan,
      Ordering::Equals      => PartialOrdering::Equals,
      Ordering::GreaterThan => PartialOrdering::GreaterThan,
    }
  }
}

impl From<StdOrdering> for Ordering {
  fn from(ordering: StdOrdering) -> Self {
    match ordering {
      StdOrdering::Less    => Ordering::LessThan,
      StdOrdering::Equal   => Ordering::Equals,
      StdOrdering::Greater => Ordering::GreaterThan,
    }
  }
}

impl From<Ordering> for StdOrdering {
  fn from(ordering: Ordering) -> Self {
    match ordering {
      Ordering::LessThan    => StdOrdering::Less,
      Ordering::Equals      => StdOrdering::Equal,
      Ordering::GreaterThan => StdOrdering::Greater,
    }
  }
}

impl From<StdOrdering> for PartialOrdering {
  fn from(ordering: StdOrdering) -> Self {
    Ordering::from(ordering).into()
  }
}

impl From<Option<StdOrdering>> for PartialOrdering {
  fn from(ordering: Option<StdOrdering>) -> Self {
    match ordering {
      Some(ordering) => Ordering::from(ordering).into(),
      None           => PartialOrdering::Incomparable,
    }
  }
}

impl From<PartialOrdering> for Option<StdOrdering> {
  fn from(ordering: PartialOrdering) -> Self {
    ordering.to_ordering().map(StdOrdering::from)
  }
}

// endregion
