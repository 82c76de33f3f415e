//! Placeholder discovery
//!
//! Walks a raw document and records every placeholder leaf together with
//! the rendered path leading to it. The resulting [`Catalogue`] is an
//! unordered set: sibling order follows the mapping's iteration order and
//! callers must not rely on it.

use courier_domain::document::{Document, Mapping, SEGMENT_SEPARATOR};
use tracing::trace;

use super::grammar::{Placeholder, classify};

/// A `{{ .identifier }}` leaf and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotReferenceSite {
    /// Rendered path (`a -> b[0] -> c`).
    pub path: String,
    /// Variable name.
    pub identifier: String,
    /// The leaf text as written.
    pub placeholder: String,
}

/// A `{{ getValueOf key document }}` leaf and where it was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupSite {
    /// Rendered path (`a -> b[0] -> c`).
    pub path: String,
    /// Key to read from the other document.
    pub key: String,
    /// Name of the other document.
    pub document: String,
    /// The leaf text as written.
    pub placeholder: String,
}

/// Every resolvable placeholder in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    /// Variable table references.
    pub dot_references: Vec<DotReferenceSite>,
    /// Cross-document lookups.
    pub lookups: Vec<LookupSite>,
}

impl Catalogue {
    /// Total number of discovered placeholders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dot_references.len() + self.lookups.len()
    }

    /// Returns true if no placeholder was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dot_references.is_empty() && self.lookups.is_empty()
    }

    fn record(&mut self, path: &str, leaf: &str) {
        match classify(leaf) {
            Placeholder::DotReference { identifier } => {
                trace!(path, identifier = %identifier, "found variable reference");
                self.dot_references.push(DotReferenceSite {
                    path: path.to_string(),
                    identifier,
                    placeholder: leaf.to_string(),
                });
            }
            Placeholder::CrossDocLookup { key, document } => {
                trace!(path, key = %key, document = %document, "found cross-document lookup");
                self.lookups.push(LookupSite {
                    path: path.to_string(),
                    key,
                    document,
                    placeholder: leaf.to_string(),
                });
            }
            Placeholder::Invalid | Placeholder::NotAPlaceholder => {}
        }
    }
}

/// Finds every placeholder in `document`.
///
/// Only string leaves held by a mapping are candidates: mapping values are
/// followed as `parent -> key`, sequence elements that are mappings as
/// `key[idx]`. Other sequence elements are not scanned. A document whose
/// root is not a mapping has no placeholders.
#[must_use]
pub fn discover(document: &Document) -> Catalogue {
    let mut catalogue = Catalogue::default();
    visit_string_leaves(document, |path, leaf| catalogue.record(path, leaf));
    catalogue
}

/// Calls `visitor` with the rendered path and text of every string leaf that
/// [`discover`] would consider.
pub fn visit_string_leaves<F>(document: &Document, mut visitor: F)
where
    F: FnMut(&str, &str),
{
    if let Document::Mapping(map) = document {
        walk_mapping(map, None, &mut visitor);
    }
}

fn walk_mapping<F>(map: &Mapping, parent: Option<&str>, visitor: &mut F)
where
    F: FnMut(&str, &str),
{
    for (key, value) in map {
        let current = match parent {
            Some(parent) => format!("{parent}{SEGMENT_SEPARATOR}{key}"),
            None => key.clone(),
        };

        match value {
            Document::String(leaf) => visitor(&current, leaf),
            Document::Mapping(child) => walk_mapping(child, Some(&current), visitor),
            Document::Sequence(items) => {
                for (idx, item) in items.iter().enumerate() {
                    if let Document::Mapping(child) = item {
                        walk_mapping(child, Some(&format!("{current}[{idx}]")), visitor);
                    }
                }
            }
            Document::Number(_) | Document::Bool(_) | Document::Null => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sorted_paths(catalogue: &Catalogue) -> Vec<String> {
        let mut paths: Vec<String> = catalogue
            .dot_references
            .iter()
            .map(|s| s.path.clone())
            .chain(catalogue.lookups.iter().map(|s| s.path.clone()))
            .collect();
        paths.sort();
        paths
    }

    #[test]
    fn test_discovers_nested_mapping_leaf() {
        let doc = Document::from(json!({"h": {"auth": "{{ .token }}"}}));
        let catalogue = discover(&doc);

        assert_eq!(
            catalogue.dot_references,
            vec![DotReferenceSite {
                path: "h -> auth".to_string(),
                identifier: "token".to_string(),
                placeholder: "{{ .token }}".to_string(),
            }]
        );
        assert!(catalogue.lookups.is_empty());
    }

    #[test]
    fn test_discovers_sequence_of_mappings() {
        let doc = Document::from(json!({
            "items": [{"v": "{{ .x }}"}, {"v": "plain"}, {"w": {"deep": "{{ .y }}"}}]
        }));
        let catalogue = discover(&doc);

        assert_eq!(
            sorted_paths(&catalogue),
            vec!["items[0] -> v", "items[2] -> w -> deep"]
        );
    }

    #[test]
    fn test_discovers_lookups() {
        let doc = Document::from(json!({
            "headers": {"Authorization": "{{ getValueOf \"token\" 'auth.yaml' }}"}
        }));
        let catalogue = discover(&doc);

        assert_eq!(
            catalogue.lookups,
            vec![LookupSite {
                path: "headers -> Authorization".to_string(),
                key: "token".to_string(),
                document: "auth.yaml".to_string(),
                placeholder: "{{ getValueOf \"token\" 'auth.yaml' }}".to_string(),
            }]
        );
    }

    #[test]
    fn test_each_placeholder_found_exactly_once() {
        let doc = Document::from(json!({
            "url": "{{ .base }}",
            "a": {"b": {"c": "{{ .c }}", "d": "{{ getValueOf k doc }}"}},
            "list": [{"e": "{{ .e }}"}, {"e": "{{ .e }}"}],
            "misc": {"n": 1, "t": true, "z": null, "s": "{{ nope }}"}
        }));
        let catalogue = discover(&doc);

        assert_eq!(catalogue.len(), 5);
        assert_eq!(
            sorted_paths(&catalogue),
            vec![
                "a -> b -> c",
                "a -> b -> d",
                "list[0] -> e",
                "list[1] -> e",
                "url",
            ]
        );
    }

    #[test]
    fn test_sequence_scalars_are_not_scanned() {
        let doc = Document::from(json!({
            "tags": ["{{ .a }}", ["{{ .b }}"], {"ok": "{{ .c }}"}]
        }));
        let catalogue = discover(&doc);

        assert_eq!(sorted_paths(&catalogue), vec!["tags[2] -> ok"]);
    }

    #[test]
    fn test_non_mapping_root_has_no_placeholders() {
        assert!(discover(&Document::from("{{ .a }}")).is_empty());
        assert!(discover(&Document::from(json!([{"a": "{{ .a }}"}]))).is_empty());
    }

    #[test]
    fn test_empty_root_key_renders_empty_path() {
        let doc = Document::from(json!({"": "{{ .a }}"}));
        let catalogue = discover(&doc);
        assert_eq!(catalogue.dot_references[0].path, "");
    }

    #[test]
    fn test_visit_string_leaves_sees_all_mapping_strings() {
        let doc = Document::from(json!({"a": "x", "b": {"c": "y"}, "n": 1}));
        let mut seen = Vec::new();
        visit_string_leaves(&doc, |path, leaf| seen.push(format!("{path}={leaf}")));
        seen.sort();
        assert_eq!(seen, vec!["a=x", "b -> c=y"]);
    }
}
