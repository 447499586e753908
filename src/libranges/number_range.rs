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

//! Half-open range over natively ordered numbers.
//!
//! ```rust
//! use ranges::prelude::*;
//!
//! let floats = NumberRange::new(5.1, 1.1);
//! assert_eq!(floats.de_range(), (1.1, 5.1));
//! assert!(floats.contains(&1.1));
//! assert!(!floats.contains(&5.1));
//!
//! let parsed: NumberRange<i32> = "[1,43)".parse().unwrap();
//! assert_eq!(parsed, NumberRange::new(1, 43));
//! ```

use crate::ops::Range;
use crate::error::ParseRangeError;
use gcollections::kind::Collection;
use gcollections::ops::{Contains, Empty};
use std::str::FromStr;

/// `[start, end)` with `start <= end`. Points only need `<`, `<=` and `==`; floating points must not be NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberRange<P>
{
  start: P,
  end: P
}

impl<P> NumberRange<P> where
 P: PartialOrd + Copy
{
  pub fn new(p1: P, p2: P) -> NumberRange<P> {
    if p1 <= p2 {
      NumberRange { start: p1, end: p2 }
    } else {
      NumberRange { start: p2, end: p1 }
    }
  }

  pub fn start(&self) -> P {
    self.start
  }

  pub fn end(&self) -> P {
    self.end
  }
}

impl<P> Collection for NumberRange<P>
{
  type Item = P;
}

impl<P> Contains for NumberRange<P> where
 P: PartialOrd + Copy
{
  fn contains(&self, value: &P) -> bool {
    *value >= self.start && *value < self.end
  }
}

impl<P> Range for NumberRange<P> where
 P: PartialOrd + Copy
{
  fn new(start: P, end: P) -> NumberRange<P> {
    NumberRange::new(start, end)
  }

  fn de_range(&self) -> (P, P) {
    (self.start, self.end)
  }

  fn is_before_point(&self, point: &P) -> bool {
    *point >= self.end
  }

  fn is_after_point(&self, point: &P) -> bool {
    *point < self.start
  }
}

impl<P> Empty for NumberRange<P> where
 P: Default
{
  fn empty() -> NumberRange<P> {
    NumberRange { start: P::default(), end: P::default() }
  }
}

range_ops_impl!(NumberRange, PartialOrd + Copy + Default);

/// Parses the canonical form `[start,end)`, surrounding whitespace allowed.
impl<P> FromStr for NumberRange<P> where
 P: PartialOrd + Copy + FromStr
{
  type Err = ParseRangeError;

  fn from_str(s: &str) -> Result<NumberRange<P>, ParseRangeError> {
    let s = s.trim();
    let s = s.strip_prefix('[').ok_or(ParseRangeError::MissingOpening)?;
    let s = s.strip_suffix(')').ok_or(ParseRangeError::MissingClosing)?;
    let (start, end) = s.split_once(',').ok_or(ParseRangeError::MissingSeparator)?;
    let parse_point = |text: &str| {
      let text = text.trim();
      text.parse::<P>().map_err(|_| ParseRangeError::InvalidPoint(text.to_string()))
    };
    Ok(NumberRange::new(parse_point(start)?, parse_point(end)?))
  }
}
