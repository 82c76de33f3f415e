//! File-based environment loader.
//!
//! Environments are stored as `.env` files in the `env/` directory of the
//! project root.

use std::fs::{self, File};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use courier_application::ports::{EnvironmentError, EnvironmentRepository};
use courier_domain::{Environment, GLOBAL_ENVIRONMENT, VariableTable};
use tracing::debug;

use super::parser::parse_env;

/// Directory under the project root holding environment files.
pub const ENV_DIR: &str = "env";

/// Extension of environment files.
pub const ENV_EXTENSION: &str = "env";

/// File-based environment loader.
///
/// Loads environments from:
/// ```text
/// project/
///   env/
///     global.env
///     staging.env
///     prod.env
/// ```
///
/// Every environment is layered over `global.env`; keys in the named file
/// win.
#[derive(Debug, Clone)]
pub struct FileEnvironmentLoader {
    root: PathBuf,
}

impl FileEnvironmentLoader {
    /// Creates a loader for the project at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the environments directory.
    #[must_use]
    pub fn env_dir(&self) -> PathBuf {
        self.root.join(ENV_DIR)
    }

    /// Finds the file for environment `name`, matching the file stem without
    /// regard to case. An exact `<name>.env` wins over other spellings.
    /// `Ok(None)` if there is no such file or no `env/` directory.
    fn environment_file(&self, name: &str) -> Result<Option<PathBuf>, EnvironmentError> {
        let env_dir = self.env_dir();
        let entries = match fs::read_dir(&env_dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(EnvironmentError::Io(e)),
        };

        let mut candidates = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }

            let is_env = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case(ENV_EXTENSION));
            if is_env
                && let Some(stem) = path.file_stem()
                && stem.to_string_lossy().to_lowercase() == name
            {
                candidates.push(path);
            }
        }

        let exact = env_dir.join(format!("{name}.{ENV_EXTENSION}"));
        if candidates.contains(&exact) {
            return Ok(Some(exact));
        }

        candidates.sort();
        Ok(candidates.into_iter().next())
    }

    fn read_table(path: &Path) -> Result<VariableTable, EnvironmentError> {
        debug!(path = %path.display(), "reading environment file");
        let file = File::open(path)?;
        parse_env(file, &path.display().to_string())
    }
}

impl EnvironmentRepository for FileEnvironmentLoader {
    fn load(&self, name: &str) -> Result<Environment, EnvironmentError> {
        let requested =
            Environment::new(name).map_err(|e| EnvironmentError::Invalid(e.to_string()))?;

        let mut global = Environment::global();
        if let Some(path) = self.environment_file(GLOBAL_ENVIRONMENT)? {
            global.variables = Self::read_table(&path)?;
        }

        if requested.is_global() {
            return Ok(global);
        }

        let Some(path) = self.environment_file(&requested.name)? else {
            return Err(EnvironmentError::NotFound(requested.name));
        };

        Ok(global.merge(Environment {
            variables: Self::read_table(&path)?,
            ..requested
        }))
    }
}
