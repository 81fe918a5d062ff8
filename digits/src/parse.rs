use crate::error::Error;

/// Parses a decimal integer, rejecting anything [`str::parse`] would not
/// accept once surrounding whitespace is trimmed.
///
/// ```
/// assert_eq!(digits::parse_number(" -42 ").unwrap(), -42);
/// assert_eq!(digits::parse_number("+7").unwrap(), 7);
/// assert!(digits::parse_number("1_000").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<i64, Error> {
  let trimmed = text.trim_matches(|c: char| c.is_ascii_whitespace());
  trimmed
    .parse::<i64>()
    .map_err(|e| Error::from(e).with_input(text))
}
