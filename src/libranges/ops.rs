// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Point and range primitives.
//!
//! A point type is either natively ordered (`PartialOrd`, used by [`NumberRange`](../number_range/struct.NumberRange.html)) or explicitly ordered through [`Sequencable`] (used by [`SeqRange`](../seq_range/struct.SeqRange.html)). A range type only has to implement [`Range`] and `gcollections::ops::Contains`; every other operation is derived in the [algebra module](../algebra/index.html).

use gcollections::ops::Contains;
use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};

/// Half-open range `[start, end)` over the points `Self::Item`.
///
/// The point type is the associated `Collection::Item` of the range so a range and its endpoints can never disagree on their type. Membership `start <= p < end` is given by `Contains::contains`.
pub trait Range : Contains + Sized
{
  /// Builds `[start, end)`, swapping the operands if `end` precedes `start`.
  fn new(start: Self::Item, end: Self::Item) -> Self;

  /// Destructures the range into `(start, end)`.
  fn de_range(&self) -> (Self::Item, Self::Item);

  /// `true` if the range ends at or before `point`.
  fn is_before_point(&self, point: &Self::Item) -> bool;

  /// `true` if the range starts strictly after `point`.
  fn is_after_point(&self, point: &Self::Item) -> bool;

  fn is_included_point(&self, point: &Self::Item) -> bool {
    self.contains(point)
  }
}

/// Total order given by three predicates, for points without native ordering operators.
///
/// For any pair exactly one of `equal`, `before` and `after` must hold, and `equal` must agree with `==`: the algebra compares endpoints with `PartialEq` to detect equal and adjacent ranges. This is not checked: a violation makes every range operation unspecified.
pub trait Sequencable
{
  fn equal(&self, other: &Self) -> bool;
  fn before(&self, other: &Self) -> bool;
  fn after(&self, other: &Self) -> bool;

  fn before_or_equal(&self, other: &Self) -> bool {
    self.before(other) || self.equal(other)
  }
}

macro_rules! ord_sequencable_impl
{
  ( $( $t: ty ),* ) =>
  {$(
    impl Sequencable for $t
    {
      fn equal(&self, other: &$t) -> bool {
        self == other
      }

      fn before(&self, other: &$t) -> bool {
        self < other
      }

      fn after(&self, other: &$t) -> bool {
        self > other
      }
    }
  )*}
}

ord_sequencable_impl!(i8,u8,i16,u16,i32,u32,i64,u64,i128,u128,isize,usize,f32,f64,char);
ord_sequencable_impl!(NaiveDate, NaiveDateTime);

impl<Tz: TimeZone> Sequencable for DateTime<Tz>
{
  fn equal(&self, other: &DateTime<Tz>) -> bool {
    self == other
  }

  fn before(&self, other: &DateTime<Tz>) -> bool {
    self < other
  }

  fn after(&self, other: &DateTime<Tz>) -> bool {
    self > other
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Utc;

  #[test]
  fn primitive_total_order() {
    for i in -3i32..3 {
      for j in -3i32..3 {
        let holding = [i.equal(&j), i.before(&j), i.after(&j)];
        assert_eq!(holding.iter().filter(|b| **b).count(), 1);
        assert_eq!(i.before_or_equal(&j), i <= j);
      }
    }
  }

  #[test]
  fn date_time_order() {
    let t1 = Utc.with_ymd_and_hms(2022, 3, 1, 8, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2022, 3, 2, 8, 0, 0).unwrap();
    assert!(t1.before(&t2));
    assert!(t2.after(&t1));
    assert!(!t1.after(&t2));
    assert!(t1.equal(&t1.clone()));
    assert!(t1.before_or_equal(&t1));
  }
}
