//! Error types for the repository crate.
//!
//! This module defines [`RepositoryError`], the error type used throughout
//! the crate, along with a helper trait for error context. Absence of a
//! result is never an error here: a missing package comes back as `None`, an
//! empty listing as an empty vector. Errors are reserved for sources that
//! actually fail to answer.

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while querying a repository.
#[derive(Error, Diagnostic, Debug)]
pub enum RepositoryError {
    #[error("Error while {action}: {source}")]
    #[diagnostic(code(depot_repository::io))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(
        code(depot_repository::json),
        help("The package index may be corrupted or in an invalid format")
    )]
    JsonError(#[from] serde_json::Error),

    #[error("Repository '{name}' is unavailable: {reason}")]
    #[diagnostic(
        code(depot_repository::unavailable),
        help("Verify the repository is reachable and try again")
    )]
    Unavailable { name: String, reason: String },

    #[error("{0}")]
    #[diagnostic(code(depot_repository::custom))]
    Custom(String),
}

/// A specialized Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

/// Extension trait for adding context to I/O errors.
pub trait ErrorContext<T> {
    /// Adds context to an error, describing what action was being performed.
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: FnOnce() -> String;
}

impl<T> ErrorContext<T> for std::io::Result<T> {
    fn with_context<C>(self, context: C) -> Result<T>
    where
        C: FnOnce() -> String,
    {
        self.map_err(|err| {
            RepositoryError::IoError {
                action: context(),
                source: err,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RepositoryError::Unavailable {
            name: "mirror-a".to_string(),
            reason: "connection refused".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Repository 'mirror-a' is unavailable: connection refused"
        );

        let err = RepositoryError::Custom("bad index".to_string());
        assert_eq!(err.to_string(), "bad index");
    }

    #[test]
    fn test_io_error_context() {
        let result: std::io::Result<()> = Err(std::io::Error::other("denied"));
        let err = result
            .with_context(|| "reading package index".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Error while reading package index: denied");
    }
}
