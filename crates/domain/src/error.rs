//! Domain error types

use thiserror::Error;

/// Errors raised while turning a rendered path string back into access tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// The path string was empty.
    #[error("path should not be empty")]
    Empty,

    /// A `->` delimited segment was empty after trimming.
    #[error("invalid format: empty key at position {position} in '{path}'")]
    EmptySegment {
        /// The offending path string.
        path: String,
        /// 1-based position of the empty segment.
        position: usize,
    },
}

/// Domain-level validation errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An environment name is invalid or empty.
    #[error("invalid environment name: {0}")]
    InvalidEnvironmentName(String),
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
