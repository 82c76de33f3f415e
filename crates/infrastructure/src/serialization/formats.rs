//! JSON and YAML conversion helpers for request documents.

use courier_domain::Document;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for serialization operations.
#[derive(Debug, thiserror::Error)]
pub enum SerializationError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// JSON deserialization failed.
    #[error("JSON deserialization failed: {0}")]
    Deserialize(serde_json::Error),

    /// YAML parsing or emitting failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Serializes a value to pretty JSON.
///
/// Output format:
/// - 2-space indentation
/// - Trailing newline
/// - Mapping keys in document order
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    let mut json = String::from_utf8(buffer)?;
    json.push('\n');
    Ok(json)
}

/// Serializes a value to YAML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, SerializationError> {
    Ok(serde_yaml::to_string(value)?)
}

/// Parses a JSON document.
///
/// # Errors
///
/// Returns an error if the JSON is invalid.
pub fn from_json_str(json: &str) -> Result<Document, SerializationError> {
    serde_json::from_str::<serde_json::Value>(json)
        .map(Document::from)
        .map_err(SerializationError::Deserialize)
}

/// Parses a YAML document. An empty input yields `Document::Null`.
///
/// # Errors
///
/// Returns an error if the YAML is invalid.
pub fn from_yaml_str(yaml: &str) -> Result<Document, SerializationError> {
    Ok(serde_yaml::from_str::<serde_yaml::Value>(yaml).map(Document::from)?)
}
