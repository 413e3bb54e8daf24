//! # prev-cmp
//!
//! Compares two text files for equality after stripping parenthesized numeric
//! annotations such as `(42)`. Useful for checking compiler or tool output
//! against a reference where only embedded counters, ids or line numbers drift.
//!
//! The library exposes the pieces the `prev-cmp` binary is built from:
//!
//! - [`normalize`](normalize::normalize) strips annotations from a text
//! - [`compare_texts`](compare::compare_texts) compares two in-memory texts
//! - [`compare`](compare::compare) loads two files and compares them
//! - [`logging`] sets up the stderr tracing subscriber used by the binary

pub mod compare;
pub mod error;
pub mod logging;
pub mod normalize;

pub use compare::{compare, compare_texts, SourceText, Verdict};
pub use error::CompareError;
pub use normalize::{annotation_count, normalize};
