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

//! Wall-clock time intervals `[from, to)`.
//!
//! A `TimeInterval` is a [`SeqRange`](../seq_range/struct.SeqRange.html) of `chrono` timestamps, so it gets the whole algebra. The sentinel interval is made of the Unix epoch.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeDelta, TimeZone, Utc};
//! use ranges::prelude::*;
//! use ranges::time_interval::{time_interval_to_string, time_interval_cycle};
//!
//! let t1 = Utc.with_ymd_and_hms(2022, 1, 3, 9, 0, 0).unwrap();
//! let meeting = TimeInterval::new(t1, t1 + TimeDelta::hours(2));
//! assert_eq!(time_interval_to_string(&meeting), "[2022-01-03 09:00:00,2022-01-03 11:00:00)");
//!
//! let mut weekly = CycleCalculator::new(meeting, CycleDescriptor::new(7, TimeDelta::days(1)), time_interval_cycle::<Utc>);
//! let (_, next_meeting) = weekly.next();
//! assert_eq!(time_interval_to_string(&next_meeting), "[2022-01-10 09:00:00,2022-01-10 11:00:00)");
//! ```

use crate::ops::Range;
use crate::algebra::format_with;
use crate::seq_range::SeqRange;
use crate::cycle::{CycleDescriptor, range_cycle};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use std::fmt::Display;

pub type TimeInterval<Tz = Utc> = SeqRange<DateTime<Tz>>;

/// Period of a time cycle: `count` times a duration.
pub type TimeCycle = CycleDescriptor<TimeDelta>;

/// Layout `YYYY-MM-DD hh:mm:ss`.
pub const TIME_LAYOUT_SECOND: &str = "%Y-%m-%d %H:%M:%S";

/// Formats both endpoints with [`TIME_LAYOUT_SECOND`].
pub fn time_interval_to_string<Tz>(interval: &TimeInterval<Tz>) -> String where
 Tz: TimeZone,
 Tz::Offset: Display
{
  format_time_interval(interval, TIME_LAYOUT_SECOND)
}

/// Formats both endpoints with a `chrono` `strftime` layout.
pub fn format_time_interval<Tz>(interval: &TimeInterval<Tz>, layout: &str) -> String where
 Tz: TimeZone,
 Tz::Offset: Display
{
  format_with(interval, |t| t.format(layout).to_string())
}

/// `origin + index * count * unit`.
///
/// # Panics
///
/// Panics if the shift overflows `TimeDelta` or the resulting timestamp is out of range.
pub fn time_point_cycle<Tz>(origin: &DateTime<Tz>, index: i32, cycle: &TimeCycle) -> DateTime<Tz> where
 Tz: TimeZone
{
  let shift = *cycle.unit() * index * cycle.count();
  origin.clone() + shift
}

/// [`time_point_cycle`] applied to both endpoints.
pub fn time_interval_cycle<Tz>(interval: &TimeInterval<Tz>, index: i32, cycle: &TimeCycle) -> TimeInterval<Tz> where
 Tz: TimeZone
{
  range_cycle::<TimeInterval<Tz>, TimeDelta, _>(time_point_cycle::<Tz>)(interval, index, cycle)
}

/// Builds an interval from two timestamps given in any order.
pub fn time_interval<Tz: TimeZone>(t1: DateTime<Tz>, t2: DateTime<Tz>) -> TimeInterval<Tz> {
  <TimeInterval<Tz> as Range>::new(t1, t2)
}
