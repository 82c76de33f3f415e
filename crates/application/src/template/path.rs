//! Parser for rendered document paths
//!
//! Turns `headers -> items[2] -> value` back into access tokens. This is the
//! inverse of `DocumentPath`'s `Display`.

use courier_domain::{AccessToken, DocumentPath, PathParseError};

const SEPARATOR: &str = "->";

/// Parses a rendered path string into access tokens.
///
/// # Errors
///
/// Returns `PathParseError::Empty` for an empty string and
/// `PathParseError::EmptySegment` if any `->` delimited segment is blank.
///
/// # Examples
///
/// ```
/// use courier_application::template::parse_path;
/// use courier_domain::AccessToken;
///
/// let path = parse_path("a -> b[2] -> c").unwrap();
/// assert_eq!(
///     path.tokens(),
///     &[
///         AccessToken::key("a"),
///         AccessToken::key("b"),
///         AccessToken::Index(2),
///         AccessToken::key("c"),
///     ]
/// );
/// ```
pub fn parse_path(path: &str) -> Result<DocumentPath, PathParseError> {
    if path.is_empty() {
        return Err(PathParseError::Empty);
    }

    let mut tokens = DocumentPath::new();
    for (i, segment) in path.split(SEPARATOR).enumerate() {
        let segment = segment.trim();
        if segment.is_empty() {
            return Err(PathParseError::EmptySegment {
                path: path.to_string(),
                position: i + 1,
            });
        }

        match parse_array_key(segment) {
            Some((name, index)) => {
                tokens.push(AccessToken::key(name));
                tokens.push(AccessToken::Index(index));
            }
            None => tokens.push(AccessToken::key(segment)),
        }
    }

    Ok(tokens)
}

/// Splits `name[idx]` into its parts. Anything else, including `[3]` with no
/// name, is treated as a plain key.
fn parse_array_key(segment: &str) -> Option<(&str, usize)> {
    let body = segment.strip_suffix(']')?;
    let open = body.rfind('[')?;
    let (name, index) = (&body[..open], &body[open + 1..]);

    if name.is_empty() || index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    index.parse().ok().map(|index| (name, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn keys(path: &DocumentPath) -> Vec<AccessToken> {
        path.tokens().to_vec()
    }

    #[test]
    fn test_parse_mixed_path() {
        let path = parse_path("a -> b[2] -> c").unwrap();
        assert_eq!(
            keys(&path),
            vec![
                AccessToken::key("a"),
                AccessToken::key("b"),
                AccessToken::Index(2),
                AccessToken::key("c"),
            ]
        );
    }

    #[test]
    fn test_parse_single_key() {
        let path = parse_path("url").unwrap();
        assert_eq!(keys(&path), vec![AccessToken::key("url")]);
    }

    #[test]
    fn test_parse_tolerates_missing_spaces() {
        let path = parse_path("a->b[0]->c").unwrap();
        assert_eq!(path.to_string(), "a -> b[0] -> c");
    }

    #[test]
    fn test_empty_path_fails() {
        assert_eq!(parse_path(""), Err(PathParseError::Empty));
    }

    #[test]
    fn test_empty_segment_fails() {
        assert_eq!(
            parse_path("a ->  -> c"),
            Err(PathParseError::EmptySegment {
                path: "a ->  -> c".to_string(),
                position: 2,
            })
        );
        assert!(matches!(
            parse_path("a -> "),
            Err(PathParseError::EmptySegment { position: 2, .. })
        ));
        assert!(matches!(
            parse_path("   "),
            Err(PathParseError::EmptySegment { position: 1, .. })
        ));
    }

    #[test]
    fn test_non_index_brackets_stay_in_key() {
        assert_eq!(keys(&parse_path("[3]").unwrap()), vec![AccessToken::key("[3]")]);
        assert_eq!(
            keys(&parse_path("filter[name]").unwrap()),
            vec![AccessToken::key("filter[name]")]
        );
        assert_eq!(keys(&parse_path("a[]").unwrap()), vec![AccessToken::key("a[]")]);
    }

    #[test]
    fn test_render_then_parse_is_identity() {
        let original: DocumentPath = vec![
            AccessToken::key("body"),
            AccessToken::key("items"),
            AccessToken::Index(10),
            AccessToken::key("id"),
        ]
        .into();
        assert_eq!(parse_path(&original.to_string()).unwrap(), original);
    }
}
