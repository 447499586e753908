// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Stepping a value forward and backward by whole periods.
//!
//! A [`CycleCalculator`] keeps an origin, a [`CycleDescriptor`] (a period of `count` times `unit`) and an advance strategy computing the value `index` periods away from the origin. The strategy is opaque: the stock ones below are linear, but any function of the index is accepted.
//!
//! | value | strategy |
//! |-------|----------|
//! | number | [`number_cycle`] |
//! | `NumberRange` | [`number_range_cycle`] |
//! | any `Range` | [`range_cycle`] over a point strategy |
//! | `DateTime` | [`time_point_cycle`](../time_interval/fn.time_point_cycle.html) |
//! | `TimeInterval` | [`time_interval_cycle`](../time_interval/fn.time_interval_cycle.html) |
//!
//! The calculator is a single-owner value: stepping takes `&mut self` and there is no internal synchronization. Share it between threads behind a `Mutex` if needed.
//!
//! # Examples
//!
//! ```rust
//! use ranges::prelude::*;
//!
//! let mut shift = CycleCalculator::new(NumberRange::new(8, 12), CycleDescriptor::new(1, 24), number_range_cycle::<i32>);
//! assert_eq!(shift.next(), (1, NumberRange::new(32, 36)));
//! assert_eq!(shift.pre(), (0, NumberRange::new(8, 12)));
//! assert_eq!(shift.pre(), (-1, NumberRange::new(-16, -12)));
//!
//! // Non-linear stepping: doubling every period.
//! let doubling = |origin: &u64, index: i32, cycle: &CycleDescriptor<u64>| {
//!   origin * cycle.unit().pow((index * cycle.count()) as u32)
//! };
//! let mut growth = CycleCalculator::new(3u64, CycleDescriptor::new(1, 2), doubling);
//! growth.next();
//! assert_eq!(growth.next(), (2, 12));
//! ```

use crate::ops::Range;
use crate::number_range::NumberRange;
use num_traits::{Num, NumCast};
use serde::{Serialize, Deserialize};
use tracing::trace;

/// One period: `count` repetitions of `unit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CycleDescriptor<C>
{
  count: i32,
  unit: C
}

impl<C> CycleDescriptor<C>
{
  pub fn new(count: i32, unit: C) -> CycleDescriptor<C> {
    CycleDescriptor { count, unit }
  }

  pub fn count(&self) -> i32 {
    self.count
  }

  pub fn unit(&self) -> &C {
    &self.unit
  }
}

/// Strategy computing the value `index` periods away from `origin`.
///
/// Implemented by every function or closure `Fn(&T, i32, &CycleDescriptor<C>) -> T`.
pub trait Advance<T, C>
{
  fn advance(&self, origin: &T, index: i32, cycle: &CycleDescriptor<C>) -> T;
}

impl<T, C, F> Advance<T, C> for F where
 F: Fn(&T, i32, &CycleDescriptor<C>) -> T
{
  fn advance(&self, origin: &T, index: i32, cycle: &CycleDescriptor<C>) -> T {
    self(origin, index, cycle)
  }
}

/// Tracks the current period index of a value stepped by an [`Advance`] strategy.
#[derive(Debug, Clone)]
pub struct CycleCalculator<T, C, F = fn(&T, i32, &CycleDescriptor<C>) -> T>
{
  origin: T,
  cycle: CycleDescriptor<C>,
  advance: F,
  cycle_index: i32
}

impl<T, C, F> CycleCalculator<T, C, F> where
 T: Clone,
 F: Advance<T, C>
{
  pub fn new(origin: T, cycle: CycleDescriptor<C>, advance: F) -> CycleCalculator<T, C, F> {
    CycleCalculator { origin, cycle, advance, cycle_index: 0 }
  }

  /// Moves one period forward, returns the new index and its value.
  #[allow(clippy::should_implement_trait)]
  pub fn next(&mut self) -> (i32, T) {
    self.cycle_index += 1;
    trace!(cycle_index = self.cycle_index, "cycle forward");
    (self.cycle_index, self.advance.advance(&self.origin, self.cycle_index, &self.cycle))
  }

  /// Moves one period backward, returns the new index and its value.
  pub fn pre(&mut self) -> (i32, T) {
    self.cycle_index -= 1;
    trace!(cycle_index = self.cycle_index, "cycle backward");
    (self.cycle_index, self.advance.advance(&self.origin, self.cycle_index, &self.cycle))
  }

  /// Current index and value. The origin is returned as is at index 0, without calling the strategy.
  pub fn current(&self) -> (i32, T) {
    (self.cycle_index, self.value())
  }

  pub fn value(&self) -> T {
    if self.cycle_index == 0 {
      self.origin.clone()
    } else {
      self.advance.advance(&self.origin, self.cycle_index, &self.cycle)
    }
  }

  pub fn cycles(&self) -> i32 {
    self.cycle_index
  }

  pub fn reset(&mut self) {
    trace!(from = self.cycle_index, "cycle reset");
    self.cycle_index = 0;
  }

  pub fn origin(&self) -> &T {
    &self.origin
  }

  pub fn cycle(&self) -> &CycleDescriptor<C> {
    &self.cycle
  }
}

/// `origin + index * count * unit`.
///
/// # Panics
///
/// Panics if `index * count` can be represented in `P` neither as is nor as a magnitude (unsigned points), or, as the arithmetic operators do, on overflow.
pub fn number_cycle<P>(origin: &P, index: i32, cycle: &CycleDescriptor<P>) -> P where
 P: Num + NumCast + Copy
{
  let steps = <i64 as From<i32>>::from(index) * <i64 as From<i32>>::from(cycle.count());
  if let Some(signed_steps) = <P as NumCast>::from(steps) {
    return *origin + *cycle.unit() * signed_steps;
  }
  // Negative steps over unsigned points.
  let magnitude: P = <P as NumCast>::from(steps.unsigned_abs())
    .expect("cycle step count cannot be represented in the point type");
  let shift = *cycle.unit() * magnitude;
  if steps < 0 { *origin - shift } else { *origin + shift }
}

/// Lifts a point strategy to ranges by shifting both endpoints, the width of the range is preserved by linear strategies.
pub fn range_cycle<R, C, F>(point_cycle: F) -> impl Fn(&R, i32, &CycleDescriptor<C>) -> R where
 R: Range,
 F: Fn(&R::Item, i32, &CycleDescriptor<C>) -> R::Item
{
  move |range: &R, index: i32, cycle: &CycleDescriptor<C>| {
    let (start, end) = range.de_range();
    R::new(point_cycle(&start, index, cycle), point_cycle(&end, index, cycle))
  }
}

/// [`number_cycle`] applied to both endpoints.
pub fn number_range_cycle<P>(range: &NumberRange<P>, index: i32, cycle: &CycleDescriptor<P>) -> NumberRange<P> where
 P: Num + NumCast + PartialOrd + Copy
{
  range_cycle::<NumberRange<P>, P, _>(number_cycle::<P>)(range, index, cycle)
}

/// Calculator stepping a number by [`number_cycle`].
pub fn number_calculator<P>(origin: P, cycle: CycleDescriptor<P>) -> CycleCalculator<P, P> where
 P: Num + NumCast + Copy
{
  CycleCalculator::new(origin, cycle, number_cycle::<P> as fn(&P, i32, &CycleDescriptor<P>) -> P)
}

/// Calculator stepping a `NumberRange` by [`number_range_cycle`].
pub fn number_range_calculator<P>(origin: NumberRange<P>, cycle: CycleDescriptor<P>) -> CycleCalculator<NumberRange<P>, P> where
 P: Num + NumCast + PartialOrd + Copy
{
  CycleCalculator::new(origin, cycle,
    number_range_cycle::<P> as fn(&NumberRange<P>, i32, &CycleDescriptor<P>) -> NumberRange<P>)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_test::{assert_tokens, Token};

  #[test]
  fn numeric_steps() {
    let mut calc = number_calculator(12, CycleDescriptor::new(10, 1));
    assert_eq!(calc.current(), (0, 12));
    assert_eq!(calc.next(), (1, 22));
    assert_eq!(calc.next(), (2, 32));
    assert_eq!(calc.current(), (2, 32));
    assert_eq!(calc.cycles(), 2);
    calc.reset();
    assert_eq!(calc.current(), (0, 12));
    assert_eq!(calc.pre(), (-1, 2));
    assert_eq!(calc.pre(), (-2, -8));
  }

  #[test]
  fn float_and_unsigned_steps() {
    let mut calc = number_calculator(1.5f64, CycleDescriptor::new(2, 0.25));
    assert_eq!(calc.next(), (1, 2.0));
    let mut calc = number_calculator(100u32, CycleDescriptor::new(3, 5));
    assert_eq!(calc.pre(), (-1, 85));
    assert_eq!(calc.pre(), (-2, 70));
  }

  #[test]
  fn narrow_signed_steps() {
    // 128 periods do not fit in i8 but the shifted value does.
    assert_eq!(number_cycle(&100i8, -1, &CycleDescriptor::new(128, 1i8)), -28);
    assert_eq!(number_cycle(&-100i8, 1, &CycleDescriptor::new(127, 1i8)), 27);
    assert_eq!(number_cycle(&200u8, -1, &CycleDescriptor::new(128, 1u8)), 72);
  }

  #[test]
  fn round_trip() {
    let mut calc = number_calculator(7i64, CycleDescriptor::new(-3, 2));
    calc.next();
    calc.next();
    let before = calc.current();
    calc.next();
    assert_eq!(calc.pre(), before);
    assert_eq!(calc.current(), before);
    assert_eq!(calc.value(), 7 - 2 * 3 * 2);
  }

  #[test]
  fn range_steps_preserve_width() {
    let mut calc = number_range_calculator(NumberRange::new(0, 3), CycleDescriptor::new(2, 5));
    assert_eq!(calc.next(), (1, NumberRange::new(10, 13)));
    assert_eq!(calc.next(), (2, NumberRange::new(20, 23)));
    calc.reset();
    assert_eq!(calc.pre(), (-1, NumberRange::new(-10, -7)));
    assert_eq!(calc.origin(), &NumberRange::new(0, 3));
    assert_eq!(calc.cycle(), &CycleDescriptor::new(2, 5));
  }

  #[test]
  fn origin_is_not_advanced() {
    // A strategy that would alter the value even at index 0.
    let calc = CycleCalculator::new(5, CycleDescriptor::new(1, 1),
      |origin: &i32, index: i32, _: &CycleDescriptor<i32>| origin * 100 + index);
    assert_eq!(calc.current(), (0, 5));
  }

  #[test]
  fn generic_range_cycle() {
    let shift = range_cycle::<NumberRange<i32>, i32, _>(number_cycle::<i32>);
    let r = NumberRange::new(1, 6);
    assert_eq!(shift(&r, 3, &CycleDescriptor::new(1, 2)), NumberRange::new(7, 12));
    assert_eq!(shift(&r, 0, &CycleDescriptor::new(1, 2)), r);
  }

  #[test]
  fn descriptor_serde() {
    assert_tokens(&CycleDescriptor::new(10, 1), &[
      Token::Struct { name: "CycleDescriptor", len: 2 },
      Token::Str("count"),
      Token::I32(10),
      Token::Str("unit"),
      Token::I32(1),
      Token::StructEnd
    ]);
  }
}
