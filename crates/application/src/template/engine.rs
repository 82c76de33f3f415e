//! Placeholder resolution engine
//!
//! Discovers placeholders in a raw source document and writes their resolved
//! values into a structurally identical destination document.

use courier_domain::{Document, DocumentPath, VariableTable};
use tracing::{debug, warn};

use super::applier::{Applied, Substitution, SubstitutionPolicy, apply};
use super::path::parse_path;
use super::walker::discover;
use crate::error::TemplateError;
use crate::ports::DocumentLookup;

/// Options controlling a translation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslateOptions {
    /// Guard applied to destination slots holding strings.
    pub policy: SubstitutionPolicy,
}

impl TranslateOptions {
    /// Options using the strict guard.
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            policy: SubstitutionPolicy::Strict,
        }
    }
}

/// Counts of what happened to each discovered placeholder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranslationReport {
    /// Slots that now hold the resolved value.
    pub replaced: usize,
    /// Slots whose string the guard refused to replace.
    pub kept: usize,
    /// Variable references absent from the table.
    pub missing: usize,
}

impl TranslationReport {
    /// Returns true if every placeholder was written.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.kept == 0 && self.missing == 0
    }
}

/// Result of a translation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    /// The destination with resolved values written in.
    pub document: Document,
    /// What happened to each placeholder.
    pub report: TranslationReport,
}

/// Resolves placeholders from a source document into a destination document.
///
/// The translator holds no state between calls.
#[derive(Debug, Clone, Default)]
pub struct TypeTranslator {
    options: TranslateOptions,
}

impl TypeTranslator {
    /// Creates a translator with the given options.
    #[must_use]
    pub const fn new(options: TranslateOptions) -> Self {
        Self { options }
    }

    /// Resolves every placeholder of `source` into `destination` and returns
    /// the mutated destination.
    ///
    /// # Errors
    ///
    /// See [`TypeTranslator::translate_in_place`].
    pub fn translate<L>(
        &self,
        source: &Document,
        mut destination: Document,
        table: &VariableTable,
        lookup: &L,
    ) -> Result<Translation, TemplateError>
    where
        L: DocumentLookup + ?Sized,
    {
        let report = self.translate_in_place(source, &mut destination, table, lookup)?;
        Ok(Translation {
            document: destination,
            report,
        })
    }

    /// Resolves every placeholder of `source` into `destination`.
    ///
    /// Variable references missing from `table` are skipped and leave the
    /// destination untouched. Lookups are always invoked.
    ///
    /// # Errors
    ///
    /// - `TemplateError::Path` if a discovered path cannot be parsed
    /// - `TemplateError::Misaligned` if `destination` lacks a discovered path
    /// - `TemplateError::Lookup` if the lookup capability fails
    ///
    /// `destination` may be partially updated when an error is returned.
    pub fn translate_in_place<L>(
        &self,
        source: &Document,
        destination: &mut Document,
        table: &VariableTable,
        lookup: &L,
    ) -> Result<TranslationReport, TemplateError>
    where
        L: DocumentLookup + ?Sized,
    {
        let catalogue = discover(source);
        let mut report = TranslationReport::default();
        if catalogue.is_empty() {
            debug!("no placeholders found");
            return Ok(report);
        }

        debug!(
            total = catalogue.len(),
            references = catalogue.dot_references.len(),
            lookups = catalogue.lookups.len(),
            "discovered placeholders"
        );

        for site in &catalogue.dot_references {
            let path = parse_path(&site.path)?;
            if path.is_empty() {
                continue;
            }

            let Some(value) = table.get(&site.identifier) else {
                debug!(path = %site.path, identifier = %site.identifier, "variable not set, leaving as is");
                report.missing += 1;
                continue;
            };

            let substitution = Substitution::new(value.clone(), &site.placeholder);
            self.write(&path, destination, substitution, &mut report)?;
        }

        for site in &catalogue.lookups {
            let path = parse_path(&site.path)?;
            if path.is_empty() {
                continue;
            }

            let value = lookup
                .lookup(&site.key, &site.document)
                .map_err(|source| TemplateError::Lookup {
                    key: site.key.clone(),
                    document: site.document.clone(),
                    source,
                })?;

            let substitution = Substitution::new(value, &site.placeholder);
            self.write(&path, destination, substitution, &mut report)?;
        }

        Ok(report)
    }

    fn write(
        &self,
        path: &DocumentPath,
        destination: &mut Document,
        substitution: Substitution<'_>,
        report: &mut TranslationReport,
    ) -> Result<(), TemplateError> {
        match apply(path, destination, substitution, self.options.policy)? {
            Applied::Replaced => report.replaced += 1,
            Applied::Kept => {
                warn!(path = %path, "destination value differs from resolved value, keeping it");
                report.kept += 1;
            }
        }
        Ok(())
    }
}

/// Resolves placeholders with default options and returns the destination.
///
/// # Errors
///
/// See [`TypeTranslator::translate_in_place`].
pub fn translate_type<L>(
    source: &Document,
    destination: Document,
    table: &VariableTable,
    lookup: &L,
) -> Result<Document, TemplateError>
where
    L: DocumentLookup + ?Sized,
{
    TypeTranslator::default()
        .translate(source, destination, table, lookup)
        .map(|translation| translation.document)
}
