//! File-backed cross-document lookup.

use std::path::PathBuf;

use courier_application::ports::{DocumentSource, LookupError, SourceLookup};
use courier_domain::Document;
use tracing::debug;

use crate::documents::{DocumentError, find_unique_file, load_document};

/// Loads documents by base name from anywhere under a project root.
///
/// The name must identify exactly one file; see
/// [`find_matching_files`](crate::documents::find_matching_files) for how
/// names are matched.
#[derive(Debug, Clone)]
pub struct FileDocumentLookup {
    root: PathBuf,
}

impl FileDocumentLookup {
    /// Creates a lookup rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Wraps this source into a lookup usable by the template engine.
    #[must_use]
    pub const fn into_lookup(self) -> SourceLookup<Self> {
        SourceLookup::new(self)
    }
}

impl DocumentSource for FileDocumentLookup {
    fn load(&self, name: &str) -> Result<Document, LookupError> {
        let path = find_unique_file(name, &self.root).map_err(|e| match e {
            DocumentError::NoMatch { name, .. } => LookupError::DocumentNotFound(name),
            other => LookupError::Source(other.to_string()),
        })?;

        debug!(name, path = %path.display(), "resolved document for lookup");
        load_document(&path).map_err(|e| LookupError::Source(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use courier_application::ports::DocumentLookup;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn project() -> TempDir {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("auth")).unwrap();
        fs::write(
            dir.path().join("auth/login.yaml"),
            "access_token: tok-1\ndata:\n  user:\n    id: 99\n  roles: [admin, dev]\n",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_loads_document_by_base_name() {
        let dir = project();
        let source = FileDocumentLookup::new(dir.path());

        let doc = source.load("Login").unwrap();
        assert_eq!(doc.get("access_token"), Some(&Document::from("tok-1")));
    }

    #[test]
    fn test_lookup_extracts_keys() {
        let dir = project();
        let lookup = FileDocumentLookup::new(dir.path()).into_lookup();

        assert_eq!(
            lookup.lookup("access_token", "login.yaml").unwrap(),
            Document::from("tok-1")
        );
        assert_eq!(
            lookup.lookup("data.user.id", "login").unwrap(),
            Document::from(99_i64)
        );
        assert_eq!(
            lookup.lookup("data.roles[1]", "login").unwrap(),
            Document::from("dev")
        );
    }

    #[test]
    fn test_missing_document_and_key() {
        let dir = project();
        let lookup = FileDocumentLookup::new(dir.path()).into_lookup();

        assert_eq!(
            lookup.lookup("x", "missing").unwrap_err(),
            LookupError::DocumentNotFound("missing".to_string())
        );
        assert_eq!(
            lookup.lookup("nope", "login").unwrap_err(),
            LookupError::KeyNotFound {
                key: "nope".to_string(),
                document: "login".to_string(),
            }
        );
    }

    #[test]
    fn test_ambiguous_name_is_an_error() {
        let dir = project();
        fs::write(dir.path().join("login.json"), "{}").unwrap();
        let source = FileDocumentLookup::new(dir.path());

        match source.load("login").unwrap_err() {
            LookupError::Source(message) => assert!(message.contains("ambiguous")),
            other => panic!("expected ambiguity error, got {other:?}"),
        }
    }
}
