//! Courier Application - Template engine, ports and use cases
//!
//! This crate defines the application layer with:
//! - The placeholder resolution engine (`template`)
//! - Port traits (interfaces for external dependencies)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod template;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult, MisalignedPath, TemplateError};
pub use ports::{
    DocumentLookup, DocumentSource, EnvironmentError, EnvironmentRepository, LookupError,
    SourceLookup,
};
pub use template::{TranslateOptions, Translation, TranslationReport, TypeTranslator, translate_type};
pub use use_cases::{RenderRequest, RenderRequestInput, RenderRequestOutput};
