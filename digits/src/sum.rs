use crate::error::{Error, Negative};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// TRAIT

/// Digit arithmetic over the base-10 representation of an integer.
///
/// The sign of a signed value is always discounted: digits are taken from
/// the absolute value, which is computed in the unsigned type of the same
/// width so that `MIN` is handled without overflow.
pub trait DigitSum: Copy {
  /// Sum of the decimal digits of `|self|`.
  fn digit_sum(self) -> u32;

  /// Repeated digit sum until a single digit remains.
  #[inline]
  fn digital_root(self) -> u32 {
    let mut root = self.digit_sum();
    while root >= 10 {
      root = root.digit_sum();
    }
    root
  }
}

macro_rules! impl_unsigned {
  ($($t:ty),+) => {
    $(
      impl DigitSum for $t {
        #[inline]
        fn digit_sum(self) -> u32 {
          let mut n = self;
          let mut sum = 0;
          while n > 0 {
            // a single digit always fits in u32
            sum += (n % 10) as u32;
            n /= 10;
          }
          sum
        }
      }
    )+
  };
}

macro_rules! impl_signed {
  ($($t:ty),+) => {
    $(
      impl DigitSum for $t {
        #[inline]
        fn digit_sum(self) -> u32 {
          self.unsigned_abs().digit_sum()
        }
      }
    )+
  };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_signed!(i8, i16, i32, i64, i128, isize);

// FREE FUNCTIONS

#[inline]
pub fn digit_sum(num: i64) -> u32 {
  num.digit_sum()
}

#[inline]
pub fn digital_root(num: i64) -> u32 {
  num.digital_root()
}

// SIGN POLICY

/// What to do with a negative input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SignPolicy {
  /// Sum the digits of the absolute value.
  #[default]
  Discount,
  /// Fail with [`ErrorKind::Negative`](crate::ErrorKind::Negative).
  Reject,
}

pub fn checked_digit_sum(num: i64, policy: SignPolicy) -> Result<u32, Error> {
  if num < 0 && policy == SignPolicy::Reject {
    return Err(Error::from(Negative).with_input(num.to_string()));
  }
  Ok(digit_sum(num))
}
