use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Result type for generator operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(code(dct::read))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write '{path}'")]
    #[diagnostic(code(dct::write))]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{path}' does not contain the '{marker}' path segment")]
    #[diagnostic(
        code(dct::missing_marker),
        help("the selftests directory must live below a '{marker}' directory")
    )]
    MissingMarker { path: String, marker: String },
}

impl Error {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }

    /// Whether the error comes from the filesystem rather than the path layout.
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Read { .. } | Self::Write { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_marker_message() {
        let err = Error::MissingMarker {
            path: "/tmp/Selftests".to_string(),
            marker: "Sources/".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "'/tmp/Selftests' does not contain the 'Sources/' path segment"
        );
        assert!(!err.is_io());
    }

    #[test]
    fn test_io_errors_keep_path() {
        let err = Error::read(
            "/tmp/index",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );

        assert_eq!(err.to_string(), "failed to read '/tmp/index'");
        assert!(err.is_io());
    }
}
