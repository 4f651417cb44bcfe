//! A regular-expression equality predicate over string payloads, usable as a
//! leaf comparator.
//!
//! The pattern is compiled on every call; a pattern that fails to compile
//! matches nothing.

use core::cmp::Ordering;
use regex::Regex;

/// Whether `subject` matches the regular expression `pattern`.

pub fn is_match(subject: &str, pattern: &str) -> bool {
  match Regex::new(pattern) {
    Ok(re) => re.is_match(subject),
    Err(_) => false,
  }
}

/// A comparator over `&str` leaves that treats the needle as a regular
/// expression: `Equal` when the element matches the needle pattern. The
/// non-equal result carries no ordering meaning.

pub fn match_cmp(pattern: &&str, subject: &&str) -> Ordering {
  if is_match(subject, pattern) {
    Ordering::Equal
  } else {
    Ordering::Less
  }
}
