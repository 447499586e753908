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

//! This library proposes a generic algebra over half-open ranges `[start, end)`. Any ordered point type (numbers, timestamps or custom types) can serve as endpoint: once a range type implements the handful of primitives of [`Range`](ops/trait.Range.html), it gets equality, intersection, union, difference, adjacency and ordering for free. A second part of the library defines a [cycle calculator](cycle/index.html) stepping a value (a point or a range) forward and backward by a fixed period.
//!
//! # Examples
//!
//! ```rust
//! use ranges::prelude::*;
//!
//! let a = NumberRange::new(1, 6);
//! let b = NumberRange::new(3, 5);
//! assert_eq!(a.intersect(&b), (true, NumberRange::new(3, 5)));
//! assert_eq!(a.except(&b), (NumberRange::new(1, 3), NumberRange::new(5, 6)));
//!
//! let mut weekly = number_calculator(12, CycleDescriptor::new(10, 1));
//! assert_eq!(weekly.next(), (1, 22));
//! assert_eq!(weekly.next(), (2, 32));
//! ```
//!
//! For more examples see the [algebra module](algebra/index.html) or the [cycle module](cycle/index.html).
//!
//! # References
//! * [Boost Interval Container Library](http://www.boost.org/doc/libs/1_57_0/libs/icl/doc/html/index.html)
//!

#[macro_use]
mod macros;

pub mod ops;
pub mod algebra;
pub mod number_range;
pub mod seq_range;
pub mod time_interval;
pub mod cycle;
pub mod error;

pub use crate::number_range::NumberRange;
pub use crate::seq_range::SeqRange;
pub use crate::time_interval::TimeInterval;
pub use crate::cycle::{CycleCalculator, CycleDescriptor};
pub use crate::error::ParseRangeError;

pub mod prelude {
  pub use gcollections::kind::Collection;
  pub use gcollections::ops::{Contains, Empty, Overlap};
  pub use crate::ops::{Range, Sequencable};
  pub use crate::algebra::RangeAlgebra;
  pub use crate::number_range::NumberRange;
  pub use crate::seq_range::SeqRange;
  pub use crate::time_interval::TimeInterval;
  pub use crate::cycle::*;
}
