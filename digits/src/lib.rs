//! Digit sums and digital roots of integers.
//!
//! ```
//! assert_eq!(digits::digit_sum(54321), 15);
//! assert_eq!(digits::digit_sum(-123), 6);
//! assert_eq!(digits::digital_root(9999), 9);
//! ```

pub mod error;
pub mod parse;
pub mod report;
pub mod sum;

pub use error::{Error, ErrorKind};
pub use parse::parse_number;
pub use report::Report;
pub use sum::{checked_digit_sum, digit_sum, digital_root, DigitSum, SignPolicy};
