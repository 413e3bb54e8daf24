//! File comparison
//!
//! This module provides [`SourceText`], a loaded input file, and the [`compare`]
//! entry point that loads two files, normalizes both and produces a [`Verdict`].
//!
//! # Example
//!
//! ```rust,no_run
//! use prev_cmp::compare::{compare, compare_texts, Verdict};
//!
//! assert_eq!(compare_texts("value(5)", "value(9)"), Verdict::Equal);
//!
//! let verdict = compare("expected.out", "actual.out")?;
//! println!("{}", verdict);
//! # Ok::<(), prev_cmp::CompareError>(())
//! ```

use crate::error::CompareError;
use crate::normalize::{annotation_count, normalize};
use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Outcome of comparing two normalized texts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verdict {
    Equal,
    Different,
}

impl Verdict {
    pub fn is_equal(self) -> bool {
        self == Verdict::Equal
    }
}

impl From<bool> for Verdict {
    fn from(equal: bool) -> Self {
        if equal {
            Verdict::Equal
        } else {
            Verdict::Different
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Equal => write!(f, "Equal"),
            Verdict::Different => write!(f, "Different"),
        }
    }
}

/// Text loaded from a file (or supplied directly) for comparison
#[derive(Debug, Clone)]
pub struct SourceText {
    path: Option<PathBuf>,
    content: String,
}

impl SourceText {
    /// Read the whole file at `path`.
    ///
    /// Line breaks and whitespace are kept exactly as stored. Content that is
    /// not valid UTF-8 is reported as a read error.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CompareError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CompareError::read(path, e))?;
        debug!(
            path = %path.display(),
            bytes = content.len(),
            annotations = annotation_count(&content),
            "loaded source"
        );
        Ok(SourceText {
            path: Some(path.to_path_buf()),
            content,
        })
    }

    pub fn from_string<S: Into<String>>(content: S) -> Self {
        SourceText {
            path: None,
            content: content.into(),
        }
    }

    /// Path the text was read from, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with every annotation removed
    pub fn normalized(&self) -> Cow<'_, str> {
        normalize(&self.content)
    }

    pub fn annotation_count(&self) -> usize {
        annotation_count(&self.content)
    }

    /// Compare against `other` after normalizing both sides
    pub fn compare_with(&self, other: &SourceText) -> Verdict {
        compare_texts(&self.content, &other.content)
    }
}

/// Compare two texts after normalizing both
pub fn compare_texts(a: &str, b: &str) -> Verdict {
    let a = normalize(a);
    let b = normalize(b);
    trace!(left = a.len(), right = b.len(), "normalized lengths");
    Verdict::from(a == b)
}

/// Load both files and compare their normalized contents.
///
/// `a` is read before `b`; the first read failure is returned.
pub fn compare<P: AsRef<Path>, Q: AsRef<Path>>(a: P, b: Q) -> Result<Verdict, CompareError> {
    let left = SourceText::from_path(a)?;
    let right = SourceText::from_path(b)?;
    let verdict = left.compare_with(&right);
    info!(%verdict, "compared files");
    Ok(verdict)
}
