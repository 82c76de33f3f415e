//! Placeholder grammar for `{{ ... }}` leaves
//!
//! A leaf string is a placeholder only when the whole (trimmed) string is
//! wrapped in exactly two braces on each side. Two expressions are
//! understood inside:
//!
//! - `{{ .identifier }}` - reference into the variable table
//! - `{{ getValueOf key document }}` - value from another document

/// Keyword introducing a cross-document lookup.
pub const LOOKUP_KEYWORD: &str = "getValueOf";

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Classification of a single leaf string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placeholder {
    /// `{{ .identifier }}`
    DotReference {
        /// Variable name, without the leading dot.
        identifier: String,
    },

    /// `{{ getValueOf key document }}`
    CrossDocLookup {
        /// Key to read, quotes stripped.
        key: String,
        /// Document to read it from, quotes stripped.
        document: String,
    },

    /// Delimited, but the expression inside is not understood.
    Invalid,

    /// Not wrapped in `{{ }}` at all.
    NotAPlaceholder,
}

/// Classifies a leaf string.
///
/// # Examples
///
/// ```
/// use courier_application::template::{Placeholder, classify};
///
/// assert_eq!(
///     classify("{{ .user }}"),
///     Placeholder::DotReference { identifier: "user".to_string() }
/// );
/// assert_eq!(classify("{{  }}"), Placeholder::Invalid);
/// assert_eq!(classify("plain text"), Placeholder::NotAPlaceholder);
/// ```
#[must_use]
pub fn classify(leaf: &str) -> Placeholder {
    let Some(interior) = delimited_interior(leaf) else {
        return Placeholder::NotAPlaceholder;
    };

    if interior.is_empty() {
        return Placeholder::Invalid;
    }

    let tokens: Vec<&str> = interior.split(' ').collect();
    match tokens.as_slice() {
        [single] => single
            .strip_prefix('.')
            .map_or(Placeholder::Invalid, |identifier| Placeholder::DotReference {
                identifier: identifier.to_string(),
            }),
        [LOOKUP_KEYWORD, key, document] => Placeholder::CrossDocLookup {
            key: unquote(key).to_string(),
            document: unquote(document).to_string(),
        },
        _ => Placeholder::Invalid,
    }
}

/// Returns the trimmed text between the delimiters, or `None` if the leaf is
/// not delimited. A third adjacent brace on either side disqualifies it.
fn delimited_interior(leaf: &str) -> Option<&str> {
    let trimmed = leaf.trim();
    if trimmed.len() < OPEN.len() + CLOSE.len() {
        return None;
    }

    let inner = trimmed.strip_prefix(OPEN)?.strip_suffix(CLOSE)?;
    if inner.starts_with('{') || inner.ends_with('}') {
        return None;
    }

    Some(inner.trim())
}

fn unquote(token: &str) -> &str {
    token.trim_matches(|c| matches!(c, '"' | '\'' | '`'))
}
