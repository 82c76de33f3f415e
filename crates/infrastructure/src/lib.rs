//! Courier Infrastructure - File-backed adapters
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer:
//! - Reading request documents from YAML and JSON files
//! - Loading `.env` environments layered over `global.env`
//! - Resolving `getValueOf` lookups against documents on disk

pub mod documents;
pub mod environment;
pub mod lookup;
pub mod serialization;

pub use documents::{
    DOCUMENT_EXTENSIONS, DocumentError, DocumentFormat, find_matching_files, find_unique_file,
    load_document,
};
pub use environment::{FileEnvironmentLoader, parse_env};
pub use lookup::FileDocumentLookup;
pub use serialization::{
    SerializationError, from_json_str, from_yaml_str, to_json_pretty, to_yaml_string,
};
