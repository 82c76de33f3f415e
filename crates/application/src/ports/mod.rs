//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the template engine and external
//! systems. Each port is a trait implemented by adapters in the
//! infrastructure layer.

mod document_lookup;
mod environment_repository;

pub use document_lookup::{
    DocumentLookup, DocumentSource, LookupError, SourceLookup, extract_value,
};
pub use environment_repository::{EnvironmentError, EnvironmentRepository};
