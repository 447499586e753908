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

//! Operations derived from the [`Range`](../ops/trait.Range.html) primitives.
//!
//! Every function of this module only relies on `new`, `de_range`, `contains`, `is_before_point` and `is_after_point`, so it works unchanged for numbers, timestamps or any custom point type. Operations without an answer (no intersection, nothing left after a difference) return the sentinel range `Empty::empty()` along with a `false` flag; the flag must be checked before trusting the range.
//!
//! The same operations are available as methods through the blanket trait [`RangeAlgebra`].
//!
//! # Examples
//!
//! ```rust
//! use ranges::prelude::*;
//! use ranges::algebra;
//!
//! let a = NumberRange::new(0, 3);
//! let b = NumberRange::new(3, 10);
//! // Adjacent ranges do not intersect but are successive.
//! assert!(!algebra::is_intersected(&a, &b));
//! assert_eq!(algebra::union(&a, &b), (true, NumberRange::new(0, 10)));
//! assert_eq!(a.to_string(), "[0,3)");
//! ```

use crate::ops::Range;
use gcollections::ops::Empty;
use trilean::SKleene;

fn copy_of<R: Range>(r: &R) -> R {
  let (start, end) = r.de_range();
  R::new(start, end)
}

/// Pairwise equality of the endpoints.
pub fn equal<R>(this: &R, other: &R) -> bool where
 R: Range,
 R::Item: PartialEq
{
  this.de_range() == other.de_range()
}

/// `true` if the range is a single point `[p, p)`, which contains nothing.
pub fn is_point<R>(r: &R) -> bool where
 R: Range,
 R::Item: PartialEq
{
  let (start, end) = r.de_range();
  start == end
}

/// `true` if `this` and `other` share at least one point. Adjacent ranges such as `[0,3)` and `[3,10)` do not intersect.
pub fn is_intersected<R>(this: &R, other: &R) -> bool where
 R: Range,
 R::Item: PartialEq
{
  let (this_start, this_end) = this.de_range();
  let (other_start, other_end) = other.de_range();
  let touching =
    this.is_included_point(&other_start) || this.is_included_point(&other_end) ||
    other.is_included_point(&this_start) || other.is_included_point(&this_end);
  touching && this_start != other_end && other_start != this_end
}

/// `true` if `inner` lies within `outer`. The end of `inner` may coincide with the (excluded) end of `outer`.
pub fn is_included<R>(outer: &R, inner: &R) -> bool where
 R: Range,
 R::Item: PartialEq
{
  let (inner_start, inner_end) = inner.de_range();
  let (_, outer_end) = outer.de_range();
  outer.is_included_point(&inner_start) &&
    (outer.is_included_point(&inner_end) || outer_end == inner_end)
}

/// Intersection of two ranges, `(false, R::empty())` if they do not intersect.
pub fn intersect<R>(this: &R, other: &R) -> (bool, R) where
 R: Range + Empty,
 R::Item: PartialEq
{
  if !is_intersected(this, other) {
    return (false, R::empty());
  }
  let (this_start, this_end) = this.de_range();
  let (other_start, other_end) = other.de_range();
  let start = if this.is_included_point(&other_start) { other_start } else { this_start };
  let end = if this.is_included_point(&other_end) { other_end } else { this_end };
  (true, R::new(start, end))
}

/// Folds `intersect` over `others` starting from `this`.
///
/// The flag is `true` if at least one step intersected. Once a step fails, the accumulator is the sentinel range and the following steps intersect with it. An empty `others` gives `(false, R::empty())`.
pub fn intersect_others<R>(this: &R, others: &[R]) -> (bool, R) where
 R: Range + Empty,
 R::Item: PartialEq
{
  if others.is_empty() {
    return (false, R::empty());
  }
  let mut exist_intersection = false;
  let mut acc = copy_of(this);
  for other in others {
    let (intersected, res) = intersect(&acc, other);
    exist_intersection |= intersected;
    acc = res;
  }
  (exist_intersection, acc)
}

/// Smallest range covering `this` and `other`.
///
/// The flag is `true` if both ranges intersect or are adjacent. The envelope is computed even when the flag is `false`, in which case it also covers the gap between the two ranges.
pub fn union<R>(this: &R, other: &R) -> (bool, R) where
 R: Range,
 R::Item: PartialEq
{
  let intersected = is_intersected(this, other);
  let (this_start, this_end) = this.de_range();
  let (other_start, other_end) = other.de_range();
  let successive = intersected || this_start == other_end || this_end == other_start;
  let start = if this.is_after_point(&other_start) { other_start } else { this_start };
  let end = if this.is_before_point(&other_end) { other_end } else { this_end };
  (successive, R::new(start, end))
}

/// Folds `union` over `others` starting from `this`. The flag is `true` only if every step was successive. An empty `others` gives `(true, this)`.
pub fn union_others<R>(this: &R, others: &[R]) -> (bool, R) where
 R: Range,
 R::Item: PartialEq
{
  let mut all_successive = true;
  let mut acc = copy_of(this);
  for other in others {
    let (successive, res) = union(&acc, other);
    all_successive &= successive;
    acc = res;
  }
  (all_successive, acc)
}

/// Difference `this - other`, in at most two fragments.
///
/// * `other` strictly inside `this`: both fragments are non-empty, `[this.start, other.start)` and `[other.end, this.end)`.
/// * partial overlap, or `other` inside `this` with a shared endpoint: the remaining part is the first fragment, the second is `R::empty()`.
/// * no intersection: the first fragment is `this`.
/// * `this` equal to or inside `other`: both fragments are `R::empty()`.
pub fn except<R>(this: &R, other: &R) -> (R, R) where
 R: Range + Empty,
 R::Item: PartialEq
{
  if !is_intersected(this, other) {
    return (copy_of(this), R::empty());
  }
  if equal(this, other) || is_included(other, this) {
    return (R::empty(), R::empty());
  }
  let (this_start, this_end) = this.de_range();
  let (other_start, other_end) = other.de_range();
  if is_included(this, other) {
    let shared_start = this_start == other_start;
    let shared_end = this_end == other_end;
    if !shared_start && !shared_end {
      (R::new(this_start, other_start), R::new(other_end, this_end))
    }
    else if shared_start {
      (R::new(other_end, this_end), R::empty())
    }
    else {
      (R::new(this_start, other_start), R::empty())
    }
  }
  else if this.is_included_point(&other_start) {
    (R::new(this_start, other_start), R::empty())
  }
  else if this.is_included_point(&other_end) {
    (R::new(other_end, this_end), R::empty())
  }
  else {
    (R::empty(), R::empty())
  }
}

/// `true` if `this` ends at or before the start of `other`.
pub fn is_before<R: Range>(this: &R, other: &R) -> bool {
  let (other_start, _) = other.de_range();
  this.is_before_point(&other_start)
}

/// `true` if `this` starts strictly after the end of `other`.
///
/// This is not the mirror of `is_before`: `[3,5)` is before `[5,8)` but `[5,8)` is not after `[3,5)`.
pub fn is_after<R: Range>(this: &R, other: &R) -> bool {
  let (_, other_end) = other.de_range();
  this.is_after_point(&other_end)
}

/// Three-valued precedence: `True` if `this` is before `other`, `False` if it is after, `Unknown` otherwise (overlapping or touching on the wrong side).
pub fn precedence<R: Range>(this: &R, other: &R) -> SKleene {
  if is_before(this, other) {
    SKleene::True
  }
  else if is_after(this, other) {
    SKleene::False
  }
  else {
    SKleene::Unknown
  }
}

/// Renders `[start,end)` with `f` formatting each endpoint.
pub fn format_with<R, F>(r: &R, f: F) -> String where
 R: Range,
 F: Fn(&R::Item) -> String
{
  let (start, end) = r.de_range();
  format!("[{},{})", f(&start), f(&end))
}

/// Method syntax for the functions of this module, implemented for every range with a sentinel.
///
/// `union` clashes with `gcollections::ops::Union::union`; do not import both traits in the same scope.
pub trait RangeAlgebra : Range + Empty
{
  fn equal(&self, other: &Self) -> bool where Self::Item: PartialEq {
    equal(self, other)
  }

  fn is_point(&self) -> bool where Self::Item: PartialEq {
    is_point(self)
  }

  fn is_intersected(&self, other: &Self) -> bool where Self::Item: PartialEq {
    is_intersected(self, other)
  }

  fn includes(&self, inner: &Self) -> bool where Self::Item: PartialEq {
    is_included(self, inner)
  }

  fn intersect(&self, other: &Self) -> (bool, Self) where Self::Item: PartialEq {
    intersect(self, other)
  }

  fn intersect_others(&self, others: &[Self]) -> (bool, Self) where Self::Item: PartialEq {
    intersect_others(self, others)
  }

  fn union(&self, other: &Self) -> (bool, Self) where Self::Item: PartialEq {
    union(self, other)
  }

  fn union_others(&self, others: &[Self]) -> (bool, Self) where Self::Item: PartialEq {
    union_others(self, others)
  }

  fn except(&self, other: &Self) -> (Self, Self) where Self::Item: PartialEq {
    except(self, other)
  }

  fn is_before(&self, other: &Self) -> bool {
    is_before(self, other)
  }

  fn is_after(&self, other: &Self) -> bool {
    is_after(self, other)
  }

  fn precedence(&self, other: &Self) -> SKleene {
    precedence(self, other)
  }

  fn format_with<F>(&self, f: F) -> String where F: Fn(&Self::Item) -> String {
    format_with(self, f)
  }
}

impl<R: Range + Empty> RangeAlgebra for R {}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::number_range::NumberRange;

  fn r(start: i32, end: i32) -> NumberRange<i32> {
    NumberRange::new(start, end)
  }

  fn empty() -> NumberRange<i32> {
    NumberRange::empty()
  }

  // [0,3) [1,6) [3,5) [3,10) [11,15)
  fn fixtures() -> [NumberRange<i32>; 5] {
    [r(0, 3), r(1, 6), r(3, 5), r(3, 10), r(11, 15)]
  }

  #[test]
  fn equality_and_point() {
    assert!(equal(&r(1, 6), &r(6, 1)));
    assert!(!equal(&r(1, 6), &r(1, 5)));
    assert!(is_point(&r(4, 4)));
    assert!(is_point(&empty()));
    assert!(!is_point(&r(4, 5)));
  }

  #[test]
  fn intersected_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert!(!is_intersected(&r0, &r3));
    assert!(!is_intersected(&r3, &r0));
    assert!(is_intersected(&r1, &r2));
    assert!(is_intersected(&r2, &r1));
    assert!(is_intersected(&r1, &r3));
    assert!(!is_intersected(&r1, &r4));
    assert!(is_intersected(&r1, &r1));
  }

  #[test]
  fn included_test() {
    let [r0, r1, r2, r3, _] = fixtures();
    assert!(is_included(&r1, &r2));
    assert!(!is_included(&r2, &r1));
    assert!(is_included(&r3, &r2));
    assert!(is_included(&r1, &r1));
    assert!(is_included(&r1, &r(3, 6)));
    assert!(!is_included(&r0, &r3));
  }

  #[test]
  fn intersect_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert_eq!(intersect(&r1, &r2), (true, r(3, 5)));
    assert_eq!(intersect(&r2, &r1), (true, r(3, 5)));
    assert_eq!(intersect(&r1, &r3), (true, r(3, 6)));
    assert_eq!(intersect(&r3, &r1), (true, r(3, 6)));
    assert_eq!(intersect(&r1, &r4), (false, empty()));
    assert_eq!(intersect(&r0, &r3), (false, empty()));
    assert_eq!(intersect(&r1, &r1), (true, r1));
  }

  #[test]
  fn intersect_others_test() {
    let nrs = fixtures();
    let [_, r1, _, _, _] = nrs;
    assert_eq!(intersect_others(&r1, &nrs[..2]), (true, r(1, 3)));
    // The third step [1,3) * [3,5) fails and resets the accumulator.
    assert_eq!(intersect_others(&r1, &nrs[..3]), (true, empty()));
    assert_eq!(intersect_others(&r1, &[]), (false, empty()));
    assert_eq!(intersect_others(&r1, &[r(20, 30)]), (false, empty()));
  }

  #[test]
  fn union_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert_eq!(union(&r1, &r2), (true, r1));
    assert_eq!(union(&r1, &r3), (true, r(1, 10)));
    assert_eq!(union(&r0, &r3), (true, r(0, 10)));
    assert_eq!(union(&r3, &r0), (true, r(0, 10)));
    // The gap [6,11) is bridged but the flag reports it.
    assert_eq!(union(&r1, &r4), (false, r(1, 15)));
    assert_eq!(union(&r1, &r1), (true, r1));
  }

  #[test]
  fn union_others_test() {
    let nrs = fixtures();
    let [_, r1, _, _, _] = nrs;
    assert_eq!(union_others(&r1, &nrs), (false, r(0, 15)));
    assert_eq!(union_others(&r1, &nrs[..4]), (true, r(0, 10)));
    assert_eq!(union_others(&r1, &[]), (true, r1));
  }

  #[test]
  fn except_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert_eq!(except(&r1, &r1), (empty(), empty()));
    assert_eq!(except(&r1, &r2), (r(1, 3), r(5, 6)));
    assert_eq!(except(&r1, &r3), (r(1, 3), empty()));
    assert_eq!(except(&r1, &r4), (r1, empty()));
    assert_eq!(except(&r3, &r1), (r(6, 10), empty()));
    assert_eq!(except(&r3, &r2), (r(5, 10), empty()));
    assert_eq!(except(&r2, &r1), (empty(), empty()));
    assert_eq!(except(&r1, &r(3, 6)), (r(1, 3), empty()));
    assert_eq!(except(&r0, &r3), (r0, empty()));
  }

  #[test]
  fn before_after_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert!(r0.is_before(&r3));
    assert!(!r3.is_after(&r0));
    assert!(r4.is_after(&r1));
    assert!(!r1.is_before(&r2));
    assert!(!r2.is_after(&r1));
  }

  #[test]
  fn precedence_test() {
    let [r0, r1, r2, r3, r4] = fixtures();
    assert!(matches!(precedence(&r0, &r3), SKleene::True));
    assert!(matches!(precedence(&r4, &r1), SKleene::False));
    assert!(matches!(precedence(&r1, &r2), SKleene::Unknown));
    assert!(matches!(precedence(&r3, &r0), SKleene::Unknown));
  }

  #[test]
  fn format_test() {
    assert_eq!(format_with(&r(1, 6), |p| format!("{:02}", p)), "[01,06)");
    assert_eq!(r(1, 6).format_with(|p| p.to_string()), "[1,6)");
  }

  #[test]
  fn method_syntax() {
    let [r0, r1, r2, r3, _] = fixtures();
    assert!(r1.includes(&r2));
    assert!(!r0.is_intersected(&r3));
    assert_eq!(r1.intersect(&r2), intersect(&r1, &r2));
    assert_eq!(RangeAlgebra::union(&r0, &r3), (true, r(0, 10)));
    assert_eq!(r1.except(&r2), (r(1, 3), r(5, 6)));
    assert!(r(2, 2).is_point());
    assert!(r1.equal(&r(6, 1)));
  }
}
