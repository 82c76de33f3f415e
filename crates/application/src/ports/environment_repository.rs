//! Environment source port
//!
//! Defines the interface for loading the variable table of an environment.

use courier_domain::environment::Environment;

/// Errors that can occur while loading an environment.
#[derive(Debug, thiserror::Error)]
pub enum EnvironmentError {
    /// Environment not found.
    #[error("Environment not found: {0}")]
    NotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment file could not be parsed.
    #[error("Invalid environment file {file}: {reason}")]
    Syntax {
        /// File being parsed.
        file: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid environment name.
    #[error("Invalid environment: {0}")]
    Invalid(String),
}

/// Loads environments by name.
pub trait EnvironmentRepository: Send + Sync {
    /// Loads an environment by name, already layered over the global
    /// environment.
    ///
    /// # Errors
    /// Returns `EnvironmentError::NotFound` if the named environment doesn't
    /// exist.
    fn load(&self, name: &str) -> Result<Environment, EnvironmentError>;
}
