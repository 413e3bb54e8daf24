//! Error types for file comparison

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Error that can occur while comparing files
#[derive(Debug)]
pub enum CompareError {
    /// The file could not be opened, read, or decoded as UTF-8
    Read { path: PathBuf, source: io::Error },
}

impl CompareError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        CompareError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path of the file that caused the error
    pub fn path(&self) -> &Path {
        match self {
            CompareError::Read { path, .. } => path,
        }
    }
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompareError::Read { path, source } => {
                write!(f, "cannot read {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for CompareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CompareError::Read { source, .. } => Some(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn display_names_the_path() {
        let err = CompareError::read(
            Path::new("missing.txt"),
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        assert_eq!(
            err.to_string(),
            "cannot read missing.txt: No such file or directory"
        );
        assert_eq!(err.path(), Path::new("missing.txt"));
    }

    #[test]
    fn exposes_the_io_error_as_source() {
        let err = CompareError::read(
            Path::new("a.txt"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let source = err
            .source()
            .and_then(|e| e.downcast_ref::<io::Error>())
            .expect("io error source");
        assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
    }
}
