// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#![macro_use]

// Implements the gcollections set operations, `Display` and serde support of a range type `$range<P>` on top of the algebra module. `$range<P>` must already implement `Range` and `Empty` under the bounds `$bound`.
macro_rules! range_ops_impl {
  ($range:ident, $($bound:tt)+) => {
    impl<P> ::gcollections::ops::Overlap for $range<P> where
     P: $($bound)+
    {
      fn overlap(&self, rhs: &$range<P>) -> bool {
        $crate::algebra::is_intersected(self, rhs)
      }
    }

    impl<P> ::gcollections::ops::Intersection for $range<P> where
     P: $($bound)+
    {
      type Output = Option<$range<P>>;

      fn intersection(&self, rhs: &$range<P>) -> Option<$range<P>> {
        match $crate::algebra::intersect(self, rhs) {
          (true, res) => Some(res),
          (false, _) => None
        }
      }
    }

    impl<P> ::gcollections::ops::Union for $range<P> where
     P: $($bound)+
    {
      type Output = Option<$range<P>>;

      fn union(&self, rhs: &$range<P>) -> Option<$range<P>> {
        match $crate::algebra::union(self, rhs) {
          (true, res) => Some(res),
          (false, _) => None
        }
      }
    }

    impl<P> ::gcollections::ops::Difference for $range<P> where
     P: $($bound)+
    {
      type Output = ($range<P>, $range<P>);

      fn difference(&self, rhs: &$range<P>) -> ($range<P>, $range<P>) {
        $crate::algebra::except(self, rhs)
      }
    }

    impl<P> ::std::fmt::Display for $range<P> where
     P: $($bound)+ + ::std::fmt::Display
    {
      fn fmt(&self, formatter: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
        let (start, end) = $crate::ops::Range::de_range(self);
        write!(formatter, "[{},{})", start, end)
      }
    }

    impl<P> ::serde::Serialize for $range<P> where
     P: $($bound)+ + ::serde::Serialize
    {
      fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where
       S: ::serde::Serializer
      {
        let bounds = $crate::ops::Range::de_range(self);
        ::serde::Serialize::serialize(&bounds, serializer)
      }
    }

    impl<'de, P> ::serde::Deserialize<'de> for $range<P> where
     P: $($bound)+ + ::serde::Deserialize<'de>
    {
      fn deserialize<D>(deserializer: D) -> Result<$range<P>, D::Error> where
       D: ::serde::Deserializer<'de>
      {
        let (start, end) = <(P, P) as ::serde::Deserialize<'de>>::deserialize(deserializer)?;
        Ok(<$range<P> as $crate::ops::Range>::new(start, end))
      }
    }
  }
}
