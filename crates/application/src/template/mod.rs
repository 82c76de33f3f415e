//! Placeholder resolution for request documents
//!
//! Request documents may carry whole-string placeholders in their leaves:
//!
//! - `{{ .name }}` - value of `name` in the variable table
//! - `{{ getValueOf key document }}` - value of `key` in another document
//!
//! Resolution runs in two passes. [`discover`] walks the raw source and
//! catalogues each placeholder with its rendered path (`a -> b[0] -> c`);
//! the engine then parses each path back into tokens with [`parse_path`] and
//! writes the resolved value into the destination with [`apply`].
//!
//! # Usage
//!
//! ```
//! use courier_application::ports::LookupError;
//! use courier_application::template::translate_type;
//! use courier_domain::{Document, Mapping, VariableTable};
//!
//! let mut headers = Mapping::new();
//! headers.insert("auth".to_string(), Document::from("{{ .token }}"));
//! let mut root = Mapping::new();
//! root.insert("h".to_string(), Document::Mapping(headers));
//! let source = Document::Mapping(root);
//!
//! let mut table = VariableTable::new();
//! table.insert("token".to_string(), Document::from("abc123"));
//!
//! let no_lookup = |_: &str, doc: &str| -> Result<Document, LookupError> {
//!     Err(LookupError::DocumentNotFound(doc.to_string()))
//! };
//!
//! let resolved = translate_type(&source, source.clone(), &table, &no_lookup).unwrap();
//! assert_eq!(
//!     resolved.get("h").and_then(|h| h.get("auth")),
//!     Some(&Document::from("abc123"))
//! );
//! ```

pub mod applier;
pub mod engine;
pub mod grammar;
pub mod path;
pub mod walker;

pub use applier::{Applied, Substitution, SubstitutionPolicy, apply};
pub use engine::{
    TranslateOptions, Translation, TranslationReport, TypeTranslator, translate_type,
};
pub use grammar::{LOOKUP_KEYWORD, Placeholder, classify};
pub use path::parse_path;
pub use walker::{Catalogue, DotReferenceSite, LookupSite, discover, visit_string_leaves};
