//! Render request use case.

use courier_domain::{Document, Environment};
use tracing::info;

use crate::ApplicationResult;
use crate::ports::{DocumentLookup, EnvironmentRepository};
use crate::template::{TranslateOptions, TranslationReport, TypeTranslator};

/// Input for rendering a request document.
#[derive(Debug, Clone)]
pub struct RenderRequestInput {
    /// Environment whose variables resolve `{{ .name }}` references.
    pub environment: String,
    /// The raw, placeholder-bearing document.
    pub source: Document,
    /// A pre-rendered copy of `source` to restore types in. When `None`, the
    /// source itself is used and placeholders are replaced directly.
    pub destination: Option<Document>,
    /// Lowercase mapping keys of the result (except under `variables`).
    pub lowercase_keys: bool,
}

impl RenderRequestInput {
    /// Creates an input that resolves `source` against `environment`.
    #[must_use]
    pub fn new(environment: impl Into<String>, source: Document) -> Self {
        Self {
            environment: environment.into(),
            source,
            destination: None,
            lowercase_keys: false,
        }
    }
}

/// Output from rendering a request document.
#[derive(Debug, Clone)]
pub struct RenderRequestOutput {
    /// The resolved document.
    pub document: Document,
    /// What happened to each placeholder.
    pub report: TranslationReport,
    /// Name of the environment that was used.
    pub environment: String,
}

/// Use case for resolving a request document against an environment.
pub struct RenderRequest<E, L> {
    environments: E,
    lookup: L,
    translator: TypeTranslator,
}

impl<E: EnvironmentRepository, L: DocumentLookup> RenderRequest<E, L> {
    /// Creates a new `RenderRequest` use case.
    #[must_use]
    pub const fn new(environments: E, lookup: L, options: TranslateOptions) -> Self {
        Self {
            environments,
            lookup,
            translator: TypeTranslator::new(options),
        }
    }

    /// Loads the environment and resolves every placeholder of the source.
    ///
    /// # Errors
    /// - Returns error if the environment name is invalid
    /// - Returns error if the environment cannot be loaded
    /// - Returns error if placeholder resolution fails
    pub fn execute(&self, input: RenderRequestInput) -> ApplicationResult<RenderRequestOutput> {
        let requested = Environment::new(&input.environment)?;
        let environment = self.environments.load(&requested.name)?;
        let destination = input.destination.unwrap_or_else(|| input.source.clone());

        let translation = self.translator.translate(
            &input.source,
            destination,
            &environment.variables,
            &self.lookup,
        )?;

        info!(
            environment = %environment.name,
            replaced = translation.report.replaced,
            kept = translation.report.kept,
            missing = translation.report.missing,
            "rendered request"
        );

        let document = if input.lowercase_keys {
            translation.document.lowercase_keys()
        } else {
            translation.document
        };

        Ok(RenderRequestOutput {
            document,
            report: translation.report,
            environment: environment.name,
        })
    }
}
