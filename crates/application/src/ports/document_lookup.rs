//! Cross-document lookup port
//!
//! `{{ getValueOf key document }}` placeholders are resolved through a
//! [`DocumentLookup`]. The engine never reads files itself; adapters in the
//! infrastructure layer provide a [`DocumentSource`] and [`SourceLookup`]
//! turns it into a lookup.

use courier_domain::{AccessToken, Document, DocumentPath};

/// Errors a lookup capability can report.
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No document with the requested name exists.
    #[error("document not found: {0}")]
    DocumentNotFound(String),

    /// The document exists but holds no value at the requested key.
    #[error("key '{key}' not found in '{document}'")]
    KeyNotFound {
        /// Requested key.
        key: String,
        /// Document that was searched.
        document: String,
    },

    /// The document could not be read or parsed.
    #[error("{0}")]
    Source(String),
}

/// Resolves `(key, document)` pairs to values.
///
/// Implemented for any `Fn(&str, &str) -> Result<Document, LookupError>`.
pub trait DocumentLookup {
    /// Returns the value stored under `key` in the document named `document`.
    ///
    /// # Errors
    /// Returns a `LookupError` if the document or key cannot be found.
    fn lookup(&self, key: &str, document: &str) -> Result<Document, LookupError>;
}

impl<F> DocumentLookup for F
where
    F: Fn(&str, &str) -> Result<Document, LookupError>,
{
    fn lookup(&self, key: &str, document: &str) -> Result<Document, LookupError> {
        self(key, document)
    }
}

/// Loads whole documents by name.
pub trait DocumentSource {
    /// Loads the document registered under `name`.
    ///
    /// # Errors
    /// Returns `LookupError::DocumentNotFound` if there is no such document.
    fn load(&self, name: &str) -> Result<Document, LookupError>;
}

/// Adapts a [`DocumentSource`] into a [`DocumentLookup`] by extracting the
/// key from the loaded document with [`extract_value`].
#[derive(Debug, Clone)]
pub struct SourceLookup<S> {
    source: S,
}

impl<S: DocumentSource> SourceLookup<S> {
    /// Wraps a document source.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: DocumentSource> DocumentLookup for SourceLookup<S> {
    fn lookup(&self, key: &str, document: &str) -> Result<Document, LookupError> {
        let loaded = self.source.load(document)?;
        extract_value(&loaded, key)
            .cloned()
            .ok_or_else(|| LookupError::KeyNotFound {
                key: key.to_string(),
                document: document.to_string(),
            })
    }
}

/// Finds the value addressed by `key` inside `document`.
///
/// A key naming a top-level entry verbatim wins. Otherwise the key is read as
/// a dot-separated path whose segments may carry `[i]` suffixes, e.g.
/// `data.items[0].id`.
#[must_use]
pub fn extract_value<'a>(document: &'a Document, key: &str) -> Option<&'a Document> {
    if let Some(direct) = document.get(key) {
        return Some(direct);
    }

    let path = key_path(key)?;
    document.pointer(&path)
}

fn key_path(key: &str) -> Option<DocumentPath> {
    if key.is_empty() {
        return None;
    }

    let mut path = DocumentPath::new();
    for segment in key.split('.') {
        let (name, mut rest) = segment
            .find('[')
            .map_or((segment, ""), |i| segment.split_at(i));

        if !name.is_empty() {
            path.push(AccessToken::key(name));
        } else if rest.is_empty() {
            return None;
        }

        while !rest.is_empty() {
            let inner = rest.strip_prefix('[')?;
            let close = inner.find(']')?;
            let idx = inner[..close].parse::<usize>().ok()?;
            path.push(AccessToken::Index(idx));
            rest = &inner[close + 1..];
        }
    }

    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct InMemorySource(Document);

    impl DocumentSource for InMemorySource {
        fn load(&self, name: &str) -> Result<Document, LookupError> {
            if name == "auth.yaml" {
                Ok(self.0.clone())
            } else {
                Err(LookupError::DocumentNotFound(name.to_string()))
            }
        }
    }

    fn auth_response() -> Document {
        Document::from(json!({
            "access_token": "tok-1",
            "data.raw": "literal",
            "data": {"user": {"id": 99}, "roles": [{"name": "admin"}, {"name": "dev"}]},
            "matrix": [[1, 2], [3, 4]]
        }))
    }

    #[test]
    fn test_extract_top_level_key() {
        let doc = auth_response();
        assert_eq!(extract_value(&doc, "access_token"), Some(&Document::from("tok-1")));
    }

    #[test]
    fn test_extract_verbatim_key_wins_over_path() {
        let doc = auth_response();
        assert_eq!(extract_value(&doc, "data.raw"), Some(&Document::from("literal")));
    }

    #[test]
    fn test_extract_nested_path() {
        let doc = auth_response();
        assert_eq!(extract_value(&doc, "data.user.id"), Some(&Document::from(99_i64)));
        assert_eq!(
            extract_value(&doc, "data.roles[1].name"),
            Some(&Document::from("dev"))
        );
        assert_eq!(extract_value(&doc, "matrix[1][0]"), Some(&Document::from(3_i64)));
    }

    #[test]
    fn test_extract_missing_or_malformed() {
        let doc = auth_response();
        assert_eq!(extract_value(&doc, ""), None);
        assert_eq!(extract_value(&doc, "data.missing"), None);
        assert_eq!(extract_value(&doc, "data.roles[9].name"), None);
        assert_eq!(extract_value(&doc, "data.roles[x]"), None);
        assert_eq!(extract_value(&doc, "data..user"), None);
    }

    #[test]
    fn test_source_lookup_resolves_key() {
        let lookup = SourceLookup::new(InMemorySource(auth_response()));
        assert_eq!(
            lookup.lookup("access_token", "auth.yaml"),
            Ok(Document::from("tok-1"))
        );
    }

    #[test]
    fn test_source_lookup_reports_missing_key() {
        let lookup = SourceLookup::new(InMemorySource(auth_response()));
        assert_eq!(
            lookup.lookup("refresh_token", "auth.yaml"),
            Err(LookupError::KeyNotFound {
                key: "refresh_token".to_string(),
                document: "auth.yaml".to_string(),
            })
        );
    }

    #[test]
    fn test_source_lookup_reports_missing_document() {
        let lookup = SourceLookup::new(InMemorySource(auth_response()));
        assert_eq!(
            lookup.lookup("access_token", "other.yaml"),
            Err(LookupError::DocumentNotFound("other.yaml".to_string()))
        );
    }

    #[test]
    fn test_closure_is_a_lookup() {
        let lookup = |key: &str, document: &str| -> Result<Document, LookupError> {
            Ok(Document::from(format!("{document}:{key}")))
        };
        assert_eq!(lookup.lookup("k", "d"), Ok(Document::from("d:k")));
    }
}
