/*!

The sum shape. An `Either<L, R>` holds a value of one of two types, and the tag remembers which one. Comparators for
sums order every `Left` before every `Right`.

*/

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Either<L, R> {
  Left(L),
  Right(R),
}


impl<L, R> Either<L, R> {

  pub fn is_left(&self) -> bool {
    matches!(self, Either::Left(_))
  }

  pub fn is_right(&self) -> bool {
    matches!(self, Either::Right(_))
  }

  pub fn left(self) -> Option<L> {
    match self {
      Either::Left(l) => Some(l),
      Either::Right(_) => None,
    }
  }

  pub fn right(self) -> Option<R> {
    match self {
      Either::Left(_) => None,
      Either::Right(r) => Some(r),
    }
  }

  pub fn as_ref(&self) -> Either<&L, &R> {
    match self {
      Either::Left(l)  => Either::Left(l),
      Either::Right(r) => Either::Right(r),
    }
  }

}
