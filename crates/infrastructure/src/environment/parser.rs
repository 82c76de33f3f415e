//! `.env` file parsing.

use std::io::Read;

use courier_application::ports::EnvironmentError;
use courier_domain::{Document, VariableTable};

/// Parses `KEY=VALUE` lines into a variable table.
///
/// Syntax follows `dotenvy` (comments, `export ` prefixes, quoting and
/// `${VAR}` expansion) without touching the process environment. Values are
/// typed by inference: `true`/`false` become booleans, integers and finite
/// floats become numbers, everything else stays a string. Later keys replace
/// earlier ones.
///
/// # Errors
///
/// Returns `EnvironmentError::Syntax` naming `file` and the offending line
/// or `EnvironmentError::Io` if the reader fails.
pub fn parse_env<R: Read>(reader: R, file: &str) -> Result<VariableTable, EnvironmentError> {
    let mut table = VariableTable::new();

    for item in dotenvy::from_read_iter(reader) {
        let (key, value) = item.map_err(|e| match e {
            dotenvy::Error::LineParse(line, position) => EnvironmentError::Syntax {
                file: file.to_string(),
                reason: format!("cannot parse '{line}' at position {position}"),
            },
            dotenvy::Error::Io(err) => EnvironmentError::Io(err),
            other => EnvironmentError::Syntax {
                file: file.to_string(),
                reason: other.to_string(),
            },
        })?;

        table.insert(key, infer_value(&value));
    }

    Ok(table)
}

/// Types a raw `.env` value.
#[must_use]
pub fn infer_value(raw: &str) -> Document {
    match raw {
        "true" => return Document::Bool(true),
        "false" => return Document::Bool(false),
        _ => {}
    }

    if let Ok(int) = raw.parse::<i64>() {
        return Document::from(int);
    }
    if let Ok(uint) = raw.parse::<u64>() {
        return Document::from(uint);
    }
    if raw.contains(['.', 'e', 'E'])
        && let Ok(float) = raw.parse::<f64>()
        && float.is_finite()
    {
        return Document::from(float);
    }

    Document::from(raw)
}
