//! Courier Domain - Core document types
//!
//! This crate defines the document model shared by the template engine and
//! its loaders. All types here are pure Rust with no I/O dependencies.

pub mod document;
pub mod environment;
pub mod error;

pub use document::{AccessToken, Document, DocumentPath, Mapping};
pub use environment::{Environment, GLOBAL_ENVIRONMENT, VariableTable};
pub use error::{DomainError, DomainResult, PathParseError};
