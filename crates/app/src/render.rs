//! The `render` command.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use courier_application::{RenderRequest, RenderRequestInput, TranslateOptions};
use courier_infrastructure::{
    DocumentFormat, FileDocumentLookup, FileEnvironmentLoader, find_unique_file, load_document,
    to_json_pretty, to_yaml_string,
};
use tracing::{info, warn};

use crate::cli::{OutputFormat, RenderArgs};

/// Path of the request file: `--file-path` as given, or the single file
/// under the root matching `--file`.
fn request_path(args: &RenderArgs) -> Result<PathBuf> {
    match (&args.file_path, &args.file) {
        (Some(path), _) => Ok(path.clone()),
        (None, Some(name)) => find_unique_file(name, &args.root)
            .with_context(|| format!("failed to find request file '{name}'")),
        (None, None) => bail!("a request file is required (--file or --file-path)"),
    }
}

/// Renders the request file described by `args` and returns the serialized
/// result.
pub fn render(args: &RenderArgs) -> Result<String> {
    let path = request_path(args)?;
    info!(file = %path.display(), env = %args.env, "rendering request");

    let source = load_document(&path)
        .with_context(|| format!("failed to load request file {}", path.display()))?;

    let destination = args
        .rendered
        .as_deref()
        .map(load_document)
        .transpose()
        .context("failed to load rendered copy")?;

    let options = if args.strict {
        TranslateOptions::strict()
    } else {
        TranslateOptions::default()
    };

    let use_case = RenderRequest::new(
        FileEnvironmentLoader::new(&args.root),
        FileDocumentLookup::new(&args.root).into_lookup(),
        options,
    );

    let mut input = RenderRequestInput::new(&args.env, source);
    input.destination = destination;
    input.lowercase_keys = args.lowercase_keys;

    let output = use_case
        .execute(input)
        .with_context(|| format!("failed to render {}", path.display()))?;

    if !output.report.is_complete() {
        warn!(
            kept = output.report.kept,
            missing = output.report.missing,
            "some placeholders were left unresolved"
        );
    }

    let format = args.format.unwrap_or_else(|| {
        match DocumentFormat::from_path(&path) {
            Some(DocumentFormat::Json) => OutputFormat::Json,
            _ => OutputFormat::Yaml,
        }
    });

    let rendered = match format {
        OutputFormat::Json => to_json_pretty(&output.document)?,
        OutputFormat::Yaml => to_yaml_string(&output.document)?,
    };
    Ok(rendered)
}
