//! Request document tree
//!
//! A [`Document`] is the in-memory form of a parsed YAML or JSON request
//! definition. The same type is used for the raw (placeholder-bearing) source
//! and for the destination that receives resolved values.

mod path;

pub use path::{AccessToken, DocumentPath, SEGMENT_SEPARATOR};

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Mapping node: string keys to child documents, insertion ordered.
pub type Mapping = IndexMap<String, Document>;

/// GraphQL variables are case-sensitive, so this key is never lowercased.
const CASE_SENSITIVE_KEY: &str = "variables";

/// A tree of mappings, sequences and scalars.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// String-keyed mapping.
    Mapping(Mapping),
    /// Ordered sequence.
    Sequence(Vec<Document>),
    /// String scalar (placeholders live here).
    String(String),
    /// Numeric scalar.
    Number(serde_json::Number),
    /// Boolean scalar.
    Bool(bool),
    /// Null scalar.
    #[default]
    Null,
}

impl Document {
    /// Returns a short name for the node kind, used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::String(_) => "string",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Null => "null",
        }
    }

    /// Returns the string value if this is a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the mapping if this node is one.
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the mapping mutably if this node is one.
    pub const fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a direct child of a mapping node.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Self> {
        self.as_mapping().and_then(|map| map.get(key))
    }

    /// Looks up a node by access tokens, returning `None` on any mismatch.
    #[must_use]
    pub fn pointer(&self, path: &DocumentPath) -> Option<&Self> {
        path.tokens()
            .iter()
            .try_fold(self, |node, token| match (token, node) {
                (AccessToken::Key(key), Self::Mapping(map)) => map.get(key),
                (AccessToken::Index(idx), Self::Sequence(items)) => items.get(*idx),
                _ => None,
            })
    }

    /// Returns a copy with every mapping key lowercased.
    ///
    /// The value under a `variables` key is kept verbatim. Sequences are
    /// not descended into.
    #[must_use]
    pub fn lowercase_keys(&self) -> Self {
        match self {
            Self::Mapping(map) => Self::Mapping(
                map.iter()
                    .map(|(key, value)| {
                        if key == CASE_SENSITIVE_KEY {
                            (key.clone(), value.clone())
                        } else {
                            (key.to_lowercase(), value.lowercase_keys())
                        }
                    })
                    .collect(),
            ),
            other => other.clone(),
        }
    }
}

/// Stringification used when comparing a destination string against a
/// candidate value: strings verbatim, containers as compact JSON.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Null => f.write_str("null"),
            Self::Mapping(_) | Self::Sequence(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for Document {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Document {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<u64> for Document {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl From<f64> for Document {
    /// Non-finite floats have no JSON form and are kept as their text.
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map_or_else(|| Self::String(value.to_string()), Self::Number)
    }
}

impl From<Mapping> for Document {
    fn from(value: Mapping) -> Self {
        Self::Mapping(value)
    }
}

impl From<Vec<Self>> for Document {
    fn from(value: Vec<Self>) -> Self {
        Self::Sequence(value)
    }
}

impl From<serde_json::Value> for Document {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => yaml_number(&n),
            Value::String(s) => Self::String(s),
            Value::Sequence(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Mapping(map) => Self::Mapping(
                map.into_iter()
                    .map(|(k, v)| (yaml_key(k), Self::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => Self::from(tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Document {
    if let Some(i) = n.as_i64() {
        Document::from(i)
    } else if let Some(u) = n.as_u64() {
        Document::from(u)
    } else {
        n.as_f64()
            .map_or_else(|| Document::String(n.to_string()), Document::from)
    }
}

/// YAML allows non-string keys (`200: ok`); they are stringified.
fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        other => Document::from(other).to_string(),
    }
}
