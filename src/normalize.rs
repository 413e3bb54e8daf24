//! Annotation stripping
//!
//! An annotation is an opening parenthesis, one or more ASCII digits and a
//! closing parenthesis: `(7)`, `(123)`, `(007)`. Normalization removes every
//! annotation and leaves all other characters untouched, including
//! parenthesized text that is not purely numeric (`(abc)`, `(12a)`, `()`).
//!
//! Matches are found leftmost-first and never overlap, so `((1))` becomes `()`:
//! only the inner annotation is removed and the result is not re-scanned.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// Matches a single annotation. `[0-9]` rather than `\d` keeps non-ASCII
/// digits (e.g. `(٣)`) out of the match.
static ANNOTATION_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\([0-9]+\)").unwrap());

/// Remove every annotation from `text`.
///
/// Borrows the input when there is nothing to strip.
pub fn normalize(text: &str) -> Cow<'_, str> {
    ANNOTATION_REGEX.replace_all(text, "")
}

/// Number of annotations [`normalize`] would remove from `text`.
pub fn annotation_count(text: &str) -> usize {
    ANNOTATION_REGEX.find_iter(text).count()
}
