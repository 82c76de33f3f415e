//! Serialization for request documents.
//!
//! Documents are read from JSON or YAML into [`courier_domain::Document`] and
//! written back with:
//! - 2-space indentation (JSON)
//! - A trailing newline
//! - Mapping keys in the order they were read

mod formats;

pub use formats::*;
