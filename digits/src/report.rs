use crate::sum::DigitSum;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::fmt;

/// Everything the CLI prints about one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Report {
  pub input: i64,
  pub digit_sum: u32,
  pub digital_root: u32,
}

impl Report {
  #[inline]
  pub fn new(input: i64) -> Self {
    Self {
      input,
      digit_sum: input.digit_sum(),
      digital_root: input.digital_root(),
    }
  }

  #[cfg(feature = "serde")]
  #[inline]
  pub fn to_json(&self) -> serde_json::Result<String> {
    serde_json::to_string(self)
  }
}

impl From<i64> for Report {
  #[inline]
  fn from(input: i64) -> Self {
    Self::new(input)
  }
}

// plain output is just the digit sum
impl fmt::Display for Report {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.digit_sum)
  }
}
