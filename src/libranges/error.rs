// Copyright 2015 Pierre Talbot (IRCAM)

// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use thiserror::Error;

/// Failure to read a range from its canonical form `[start,end)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRangeError
{
  #[error("missing opening bracket `[`")]
  MissingOpening,
  #[error("missing closing parenthesis `)`")]
  MissingClosing,
  #[error("missing `,` between the endpoints")]
  MissingSeparator,
  #[error("invalid endpoint `{0}`")]
  InvalidPoint(String)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn messages() {
    assert_eq!(ParseRangeError::MissingOpening.to_string(), "missing opening bracket `[`");
    assert_eq!(ParseRangeError::InvalidPoint("x".into()).to_string(), "invalid endpoint `x`");
  }
}
