//! Request document files.
//!
//! Documents live anywhere under a project root as `.yaml`, `.yml` or
//! `.json` files and are referred to by base name, case-insensitively:
//! `getValueOf token Login` finds `auth/login.yaml`.

use std::fs;
use std::path::{Path, PathBuf};

use courier_domain::Document;
use tracing::debug;
use walkdir::WalkDir;

use crate::serialization::{SerializationError, from_json_str, from_yaml_str};

/// Extensions recognised as request documents.
pub const DOCUMENT_EXTENSIONS: [&str; 3] = [".yaml", ".yml", ".json"];

/// Errors raised while locating or reading document files.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    /// Name to search for was empty.
    #[error("file name to match can't be empty")]
    EmptyName,

    /// No file under the root matches the name.
    #[error("no files with matching name '{name}' found in '{}'", root.display())]
    NoMatch {
        /// Name that was searched for.
        name: String,
        /// Directory that was searched.
        root: PathBuf,
    },

    /// More than one file under the root matches the name.
    #[error(
        "'{name}' is ambiguous, it matches {} files: {}",
        matches.len(),
        display_paths(matches)
    )]
    Ambiguous {
        /// Name that was searched for.
        name: String,
        /// Every matching file.
        matches: Vec<PathBuf>,
    },

    /// The file extension is not one of the supported formats.
    #[error("unsupported document format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Reading a file or walking a directory failed.
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be parsed.
    #[error("failed to parse '{}': {source}", path.display())]
    Parse {
        /// File being parsed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: SerializationError,
    },
}

/// On-disk document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// `.json`
    Json,
    /// `.yaml` or `.yml`
    Yaml,
}

impl DocumentFormat {
    /// Determines the format from a path's extension, ignoring case.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parses `content` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid in this format.
    pub fn parse(self, content: &str) -> Result<Document, SerializationError> {
        match self {
            Self::Json => from_json_str(content),
            Self::Yaml => from_yaml_str(content),
        }
    }
}

/// Reads and parses a document file, choosing the parser by extension.
///
/// # Errors
///
/// - `DocumentError::UnsupportedFormat` for other extensions
/// - `DocumentError::Io` if the file cannot be read
/// - `DocumentError::Parse` if the content is malformed
pub fn load_document(path: &Path) -> Result<Document, DocumentError> {
    let format = DocumentFormat::from_path(path)
        .ok_or_else(|| DocumentError::UnsupportedFormat(path.to_path_buf()))?;

    let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), ?format, "loading document");
    format.parse(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lowercased base name of a document file name, or `None` if the name does
/// not carry a supported extension.
fn document_base_name(file_name: &str) -> Option<String> {
    let lower = file_name.to_lowercase();
    DOCUMENT_EXTENSIONS
        .iter()
        .find_map(|ext| lower.strip_suffix(ext))
        .map(str::to_string)
}

/// Finds every document under `root` whose base name matches `name`.
///
/// The comparison ignores case and any supported extension on either side,
/// so `Login`, `login.yaml` and `LOGIN.json` all match `auth/login.yml`.
/// Hidden directories are searched too. Results are sorted by path.
///
/// # Errors
///
/// - `DocumentError::EmptyName` if `name` is empty
/// - `DocumentError::Io` if `root` itself cannot be read
/// - `DocumentError::NoMatch` if nothing matches
///
/// Entries below the root that cannot be read, such as symlink loops or
/// directories without permission, are skipped.
pub fn find_matching_files(name: &str, root: &Path) -> Result<Vec<PathBuf>, DocumentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DocumentError::EmptyName);
    }

    let wanted = document_base_name(name).unwrap_or_else(|| name.to_lowercase());

    let mut matches = Vec::new();
    for entry in WalkDir::new(root).follow_links(true) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => {
                return Err(DocumentError::Io {
                    path: root.to_path_buf(),
                    source: e.into(),
                });
            }
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy();
        if document_base_name(&file_name).is_some_and(|base| base == wanted) {
            matches.push(entry.into_path());
        }
    }

    if matches.is_empty() {
        return Err(DocumentError::NoMatch {
            name: name.to_string(),
            root: root.to_path_buf(),
        });
    }

    matches.sort();
    debug!(name, count = matches.len(), "matched document files");
    Ok(matches)
}

/// Finds the single document under `root` whose base name matches `name`.
///
/// # Errors
///
/// Same as [`find_matching_files`], plus `DocumentError::Ambiguous` if more
/// than one file matches.
pub fn find_unique_file(name: &str, root: &Path) -> Result<PathBuf, DocumentError> {
    let mut matches = find_matching_files(name, root)?;
    if matches.len() > 1 {
        return Err(DocumentError::Ambiguous {
            name: name.trim().to_string(),
            matches,
        });
    }

    matches.pop().ok_or_else(|| DocumentError::NoMatch {
        name: name.trim().to_string(),
        root: root.to_path_buf(),
    })
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|path| path.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn write(dir: &Path, relative: &str, content: &str) -> PathBuf {
        let path = dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_document_format_from_path() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("a/b.JSON")),
            Some(DocumentFormat::Json)
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("b.yml")),
            Some(DocumentFormat::Yaml)
        );
        assert_eq!(DocumentFormat::from_path(Path::new("b.toml")), None);
        assert_eq!(DocumentFormat::from_path(Path::new("b")), None);
    }

    #[test]
    fn test_document_base_name() {
        assert_eq!(document_base_name("Login.YAML"), Some("login".to_string()));
        assert_eq!(document_base_name("data.json"), Some("data".to_string()));
        assert_eq!(document_base_name("notes.txt"), None);
    }

    #[test]
    fn test_load_yaml_and_json() {
        let dir = TempDir::new().unwrap();
        let yaml = write(dir.path(), "req.yaml", "url: http://x\ncount: 3\n");
        let json = write(dir.path(), "req.json", r#"{"url": "http://x", "count": 3}"#);

        let from_yaml = load_document(&yaml).unwrap();
        let from_json = load_document(&json).unwrap();

        assert_eq!(from_yaml, from_json);
        assert_eq!(from_yaml.get("count"), Some(&Document::from(3_i64)));
    }

    #[test]
    fn test_load_unsupported_and_missing() {
        let dir = TempDir::new().unwrap();
        let txt = write(dir.path(), "notes.txt", "hello");

        assert!(matches!(
            load_document(&txt),
            Err(DocumentError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            load_document(&dir.path().join("missing.yaml")),
            Err(DocumentError::Io { .. })
        ));
    }

    #[test]
    fn test_load_malformed() {
        let dir = TempDir::new().unwrap();
        let bad = write(dir.path(), "bad.json", "{ nope");

        assert!(matches!(
            load_document(&bad),
            Err(DocumentError::Parse { .. })
        ));
    }

    #[test]
    fn test_find_matching_files_is_recursive_and_case_insensitive() {
        let dir = TempDir::new().unwrap();
        let nested = write(dir.path(), "auth/Login.yaml", "a: 1");
        let hidden = write(dir.path(), ".private/login.json", "{}");
        write(dir.path(), "auth/logout.yaml", "a: 1");
        write(dir.path(), "login.txt", "nope");

        let found = find_matching_files("LOGIN.yml", dir.path()).unwrap();

        let mut expected = vec![nested, hidden];
        expected.sort();
        assert_eq!(found, expected);
    }

    #[test]
    fn test_find_unique_file() {
        let dir = TempDir::new().unwrap();
        let only = write(dir.path(), "requests/Users.yaml", "a: 1");
        write(dir.path(), "a/login.yaml", "a: 1");
        write(dir.path(), "b/login.json", "{}");

        assert_eq!(find_unique_file("users", dir.path()).unwrap(), only);

        match find_unique_file("login", dir.path()).unwrap_err() {
            DocumentError::Ambiguous { name, matches } => {
                assert_eq!(name, "login");
                assert_eq!(matches.len(), 2);
            }
            other => panic!("expected ambiguity, got {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_loop_is_skipped() {
        let dir = TempDir::new().unwrap();
        let wanted = write(dir.path(), "auth/login.yaml", "a: 1");
        std::os::unix::fs::symlink(dir.path(), dir.path().join("auth/loop")).unwrap();

        let found = find_matching_files("login", dir.path()).unwrap();
        assert_eq!(found, vec![wanted]);
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            find_matching_files("login", &dir.path().join("absent")),
            Err(DocumentError::Io { .. })
        ));
    }

    #[test]
    fn test_find_matching_files_errors() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "a.yaml", "a: 1");

        assert!(matches!(
            find_matching_files("  ", dir.path()),
            Err(DocumentError::EmptyName)
        ));
        assert!(matches!(
            find_matching_files("b", dir.path()),
            Err(DocumentError::NoMatch { .. })
        ));
    }
}
