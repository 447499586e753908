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

//! Half-open range over explicitly ordered points.
//!
//! Endpoints are only compared through [`Sequencable`](../ops/trait.Sequencable.html), which makes this range usable with types that do not provide ordering operators, or whose ordering operators do not express the intended sequence.

use crate::ops::{Range, Sequencable};
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeqRange<P>
{
  start: P,
  end: P
}

impl<P> SeqRange<P> where
 P: Sequencable + Clone
{
  /// Builds the range from two points in any order, the start always precedes or equals the end.
  pub fn new(p1: P, p2: P) -> SeqRange<P> {
    if p1.before_or_equal(&p2) {
      SeqRange { start: p1, end: p2 }
    } else {
      SeqRange { start: p2, end: p1 }
    }
  }

  pub fn start(&self) -> &P {
    &self.start
  }

  pub fn end(&self) -> &P {
    &self.end
  }
}

impl<P> Collection for SeqRange<P>
{
  type Item = P;
}

impl<P> Contains for SeqRange<P> where
 P: Sequencable + Clone
{
  fn contains(&self, value: &P) -> bool {
    self.start.before_or_equal(value) && self.end.after(value)
  }
}

impl<P> Range for SeqRange<P> where
 P: Sequencable + Clone
{
  fn new(start: P, end: P) -> SeqRange<P> {
    SeqRange::new(start, end)
  }

  fn de_range(&self) -> (P, P) {
    (self.start.clone(), self.end.clone())
  }

  fn is_before_point(&self, point: &P) -> bool {
    self.end.before_or_equal(point)
  }

  fn is_after_point(&self, point: &P) -> bool {
    self.start.after(point)
  }
}

impl<P> Empty for SeqRange<P> where
 P: Default
{
  fn empty() -> SeqRange<P> {
    SeqRange { start: P::default(), end: P::default() }
  }
}

range_ops_impl!(SeqRange, Sequencable + Clone + PartialEq + Default);
