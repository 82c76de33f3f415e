//! Writes resolved values into the destination document
//!
//! The destination is expected to have the same shape as the document the
//! path was discovered in. The applier never creates structure: a missing key,
//! an out-of-range index, or a node of the wrong kind is reported as
//! [`MisalignedPath`].

use courier_domain::{AccessToken, Document, DocumentPath};

use crate::error::MisalignedPath;

/// When a destination slot that currently holds a string may be replaced.
///
/// Non-string slots are always overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubstitutionPolicy {
    /// Replace when the string equals the stringified candidate (restoring the
    /// candidate's type after an upstream text render) or is still the
    /// unrendered placeholder.
    #[default]
    Restore,

    /// Replace only when the string equals the stringified candidate.
    Strict,
}

impl SubstitutionPolicy {
    /// Returns true if `current` may be replaced by the substitution.
    #[must_use]
    pub fn accepts(self, current: &str, substitution: &Substitution<'_>) -> bool {
        if current == substitution.candidate.to_string() {
            return true;
        }

        match self {
            Self::Restore => current == substitution.placeholder,
            Self::Strict => false,
        }
    }
}

/// A value to write and the placeholder text it replaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Substitution<'a> {
    /// Resolved value.
    pub candidate: Document,
    /// Placeholder as written in the source document.
    pub placeholder: &'a str,
}

impl<'a> Substitution<'a> {
    /// Creates a substitution.
    #[must_use]
    pub const fn new(candidate: Document, placeholder: &'a str) -> Self {
        Self {
            candidate,
            placeholder,
        }
    }
}

/// What happened at the addressed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// The slot now holds the candidate.
    Replaced,
    /// The slot held a string the policy refused to replace.
    Kept,
}

/// Writes `substitution` at `path` inside `destination`.
///
/// # Errors
///
/// Returns `MisalignedPath` if the path is empty or cannot be followed in
/// `destination`.
pub fn apply(
    path: &DocumentPath,
    destination: &mut Document,
    substitution: Substitution<'_>,
    policy: SubstitutionPolicy,
) -> Result<Applied, MisalignedPath> {
    let misaligned = |depth: usize, reason: String| MisalignedPath {
        path: path.to_string(),
        depth,
        reason,
    };

    let Some((last, parents)) = path.tokens().split_last() else {
        return Err(misaligned(0, "path is empty".to_string()));
    };

    let mut node = destination;
    for (depth, token) in parents.iter().enumerate() {
        node = step(node, token).map_err(|reason| misaligned(depth, reason))?;
    }

    let slot = step(node, last).map_err(|reason| misaligned(parents.len(), reason))?;
    if let Document::String(current) = &*slot
        && !policy.accepts(current, &substitution)
    {
        return Ok(Applied::Kept);
    }

    *slot = substitution.candidate;
    Ok(Applied::Replaced)
}

fn step<'d>(node: &'d mut Document, token: &AccessToken) -> Result<&'d mut Document, String> {
    match (token, node) {
        (AccessToken::Key(key), Document::Mapping(map)) => map
            .get_mut(key)
            .ok_or_else(|| format!("key '{key}' is missing")),
        (AccessToken::Index(idx), Document::Sequence(items)) => {
            let len = items.len();
            items
                .get_mut(*idx)
                .ok_or_else(|| format!("index {idx} is out of bounds for length {len}"))
        }
        (AccessToken::Key(key), other) => Err(format!(
            "expected a mapping for key '{key}', found {}",
            other.kind()
        )),
        (AccessToken::Index(idx), other) => Err(format!(
            "expected a sequence for index {idx}, found {}",
            other.kind()
        )),
    }
}
