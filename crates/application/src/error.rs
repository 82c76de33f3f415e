//! Application error types

use courier_domain::{DomainError, PathParseError};
use thiserror::Error;

use crate::ports::{EnvironmentError, LookupError};

/// A discovered path that does not exist in the destination document.
///
/// Discovery runs on the source and application on the destination, so the
/// two trees must be structurally aligned. This error reports where they
/// diverged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("destination does not match source at '{path}' (token {depth}): {reason}")]
pub struct MisalignedPath {
    /// The rendered path being applied.
    pub path: String,
    /// Index of the token that could not be followed.
    pub depth: usize,
    /// What was found instead.
    pub reason: String,
}

/// Errors raised while resolving placeholders into a destination document.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// A discovered placeholder path could not be parsed.
    #[error("invalid placeholder path: {0}")]
    Path(#[from] PathParseError),

    /// Source and destination diverged.
    #[error("internal error: {0}")]
    Misaligned(#[from] MisalignedPath),

    /// The cross-document lookup capability failed.
    #[error("getValueOf \"{key}\" from \"{document}\" failed: {source}")]
    Lookup {
        /// Requested key.
        key: String,
        /// Requested document name.
        document: String,
        /// Underlying failure.
        #[source]
        source: LookupError,
    },
}

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Placeholder resolution failed.
    #[error("template error: {0}")]
    Template(#[from] TemplateError),

    /// The environment could not be loaded.
    #[error("environment error: {0}")]
    Environment(#[from] EnvironmentError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
