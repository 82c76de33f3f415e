//! Access tokens addressing a single location inside a [`Document`](super::Document).

use std::fmt;

/// Separator between rendered path segments.
pub const SEGMENT_SEPARATOR: &str = " -> ";

/// One step of a document path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AccessToken {
    /// Key of a mapping entry.
    Key(String),
    /// Index into a sequence.
    Index(usize),
}

impl AccessToken {
    /// Creates a mapping-key token.
    #[must_use]
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }
}

/// An ordered list of access tokens.
///
/// Renders in the `a -> b[2] -> c` handoff format: keys are joined by
/// ` -> ` and an index token is appended as `[i]` to the segment before it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DocumentPath {
    tokens: Vec<AccessToken>,
}

impl DocumentPath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Appends a token.
    pub fn push(&mut self, token: AccessToken) {
        self.tokens.push(token);
    }

    /// Returns the tokens in order.
    #[must_use]
    pub fn tokens(&self) -> &[AccessToken] {
        &self.tokens
    }

    /// Returns true if the path has no tokens.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl From<Vec<AccessToken>> for DocumentPath {
    fn from(tokens: Vec<AccessToken>) -> Self {
        Self { tokens }
    }
}

impl FromIterator<AccessToken> for DocumentPath {
    fn from_iter<I: IntoIterator<Item = AccessToken>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DocumentPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            match token {
                AccessToken::Key(key) => {
                    if i > 0 {
                        f.write_str(SEGMENT_SEPARATOR)?;
                    }
                    f.write_str(key)?;
                }
                AccessToken::Index(idx) => write!(f, "[{idx}]")?,
            }
        }
        Ok(())
    }
}
