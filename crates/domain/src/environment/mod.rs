//! Environment and variable domain types
//!
//! An environment is a named, flat key/value table. The `global` environment
//! is always loaded first; the selected environment is merged over it.

use crate::document::Document;
use crate::error::{DomainError, DomainResult};

/// Flat variable table consulted by `{{ .name }}` placeholders.
pub type VariableTable = indexmap::IndexMap<String, Document>;

/// Name of the environment every other environment is layered on.
pub const GLOBAL_ENVIRONMENT: &str = "global";

/// A named set of variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    /// Environment name, lowercased.
    pub name: String,

    /// Variables keyed by name.
    pub variables: VariableTable,
}

impl Environment {
    /// Creates an empty environment.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidEnvironmentName` if the name is blank or
    /// contains a path separator.
    pub fn new(name: impl AsRef<str>) -> DomainResult<Self> {
        let name = name.as_ref().trim();
        if name.is_empty() || name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(DomainError::InvalidEnvironmentName(name.to_string()));
        }

        Ok(Self {
            name: name.to_lowercase(),
            variables: VariableTable::new(),
        })
    }

    /// Creates the empty `global` environment.
    #[must_use]
    pub fn global() -> Self {
        Self {
            name: GLOBAL_ENVIRONMENT.to_string(),
            variables: VariableTable::new(),
        }
    }

    /// Returns true if this is the `global` environment.
    #[must_use]
    pub fn is_global(&self) -> bool {
        self.name == GLOBAL_ENVIRONMENT
    }

    /// Sets a variable, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Document>) {
        self.variables.insert(key.into(), value.into());
    }

    /// Gets a variable by name.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Document> {
        self.variables.get(key)
    }

    /// Layers `other` over this environment. Keys present in both take the
    /// value from `other`; the merged environment carries `other`'s name.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.variables.extend(other.variables);
        self.name = other.name;
        self
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }
}
