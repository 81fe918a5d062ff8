use std::error::Error as StdError;
use std::num::{IntErrorKind, ParseIntError};

// KIND

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ErrorKind {
  Empty,
  InvalidDigit,
  OutOfRange,
  Negative,
}

pub use ErrorKind::{Empty, InvalidDigit, Negative, OutOfRange};

impl std::fmt::Display for ErrorKind {
  #[inline]
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Empty => write!(f, "no number given"),
      InvalidDigit => write!(f, "not a decimal integer"),
      OutOfRange => write!(f, "number out of range ({} to {})", i64::MIN, i64::MAX),
      Negative => write!(f, "negative numbers are rejected"),
    }
  }
}

// TYPE

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug)]
pub struct Error {
  pub kind: ErrorKind,
  pub input: Option<String>,
  pub reason: Option<BoxError>,
}

impl Error {
  #[inline]
  pub fn new(kind: ErrorKind, reason: BoxError) -> Self {
    Self {
      kind,
      input: None,
      reason: Some(reason),
    }
  }

  /// Attaches the offending input text, shown in the error message.
  #[inline]
  pub fn with_input(mut self, input: impl Into<String>) -> Self {
    self.input = Some(input.into());
    self
  }

  #[inline]
  pub fn kind(&self) -> ErrorKind {
    self.kind
  }
}

impl From<ParseIntError> for Error {
  #[inline]
  fn from(e: ParseIntError) -> Self {
    let kind = match e.kind() {
      IntErrorKind::Empty => Empty,
      IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => OutOfRange,
      _ => InvalidDigit,
    };
    Error::new(kind, e.into())
  }
}

impl From<ErrorKind> for Error {
  #[inline]
  fn from(e: ErrorKind) -> Self {
    Self {
      kind: e,
      input: None,
      reason: None,
    }
  }
}

impl std::fmt::Display for Error {
  #[inline]
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if let Some(input) = &self.input {
      write!(f, "invalid input {input:?}: ")?;
    }
    // the reason is exposed through source(), not repeated here
    write!(f, "{}", self.kind)
  }
}

impl StdError for Error {
  fn source(&self) -> Option<&(dyn StdError + 'static)> {
    self.reason.as_deref().map(|e| e as &(dyn StdError + 'static))
  }
}
