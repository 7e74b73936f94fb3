//! Error types for packaging operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while preparing the layout or writing a package.
#[derive(Debug, Error)]
pub enum PackageError {
    /// The compiled component was not found where the build target puts it.
    #[error("DLL not found at {}", path.display())]
    MissingArtifact { path: PathBuf },

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Component config could not be read or is invalid.
    #[error("Invalid component config: {0}")]
    Config(String),

    /// A written package does not hold what was packed into it.
    #[error("Package verification failed: {0}")]
    Verification(String),
}

impl PackageError {
    /// Returns true if the error means the component has not been built yet.
    #[must_use]
    pub fn is_missing_artifact(&self) -> bool {
        matches!(self, Self::MissingArtifact { .. })
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;

    #[test]
    fn PackageError___missing_artifact___displays_path() {
        let err = PackageError::MissingArtifact {
            path: PathBuf::from("/ws/_result/x64_Release/bin/foo.dll"),
        };

        assert_eq!(
            err.to_string(),
            "DLL not found at /ws/_result/x64_Release/bin/foo.dll"
        );
        assert!(err.is_missing_artifact());
    }

    #[test]
    fn PackageError___from_io_error___converts() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: PackageError = io_err.into();

        assert!(matches!(err, PackageError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
        assert!(!err.is_missing_artifact());
    }

    #[test]
    fn PackageError___config___displays_message() {
        let err = PackageError::Config("name cannot be empty".to_string());

        assert_eq!(
            err.to_string(),
            "Invalid component config: name cannot be empty"
        );
    }

    #[test]
    fn PackageError___verification___displays_message() {
        let err = PackageError::Verification("expected 1 entry, found 2".to_string());

        assert_eq!(
            err.to_string(),
            "Package verification failed: expected 1 entry, found 2"
        );
    }
}
