//! Environment files.
//!
//! An environment is a `.env` file under `env/`. `global.env` is always read
//! first and the selected environment is merged over it.

mod loader;
mod parser;

pub use loader::{ENV_DIR, ENV_EXTENSION, FileEnvironmentLoader};
pub use parser::{infer_value, parse_env};
