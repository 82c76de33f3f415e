//! CLI argument parsing for courier

use std::path::PathBuf;

use clap::{ArgGroup, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "courier")]
#[command(author, version, about = "Resolve typed placeholders in request files", long_about = None)]
pub struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every placeholder of a request file and print the result
    Render(RenderArgs),

    /// Print the version
    Version,
}

#[derive(clap::Args, Debug, Clone)]
#[command(group(ArgGroup::new("request").required(true).args(["file", "file_path"])))]
pub struct RenderArgs {
    /// Name of the request file to render, searched under the root
    /// (case-insensitive, extension optional)
    #[arg(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Path of the request file to render (.yaml, .yml or .json)
    #[arg(long = "file-path", visible_alias = "fp")]
    pub file_path: Option<PathBuf>,

    /// Previously rendered copy of the request whose slots are rewritten
    /// with typed values instead of the request itself
    #[arg(long, value_name = "PATH")]
    pub rendered: Option<PathBuf>,

    /// Environment layered over env/global.env
    #[arg(short, long, env = "COURIER_ENV", default_value = "global")]
    pub env: String,

    /// Project root holding env/ and lookup documents
    #[arg(short, long, env = "COURIER_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Output format (defaults to the format of the request file)
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Lowercase mapping keys, except inside `variables`
    #[arg(long)]
    pub lowercase_keys: bool,

    /// Only replace strings that already equal the rendered value
    #[arg(long)]
    pub strict: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render_args(args: &[&str]) -> RenderArgs {
        let cli = Cli::try_parse_from(args).unwrap();
        match cli.command {
            Command::Render(args) => args,
            Command::Version => panic!("expected render"),
        }
    }

    #[test]
    fn test_render_defaults() {
        let args = render_args(&["courier", "render", "--file", "Users"]);

        assert_eq!(args.file.as_deref(), Some("Users"));
        assert_eq!(args.file_path, None);
        assert_eq!(args.rendered, None);
        assert_eq!(args.root, PathBuf::from("."));
        assert_eq!(args.format, None);
        assert!(!args.lowercase_keys);
        assert!(!args.strict);
    }

    #[test]
    fn test_render_flags() {
        let args = render_args(&[
            "courier",
            "render",
            "--fp",
            "requests/users.json",
            "--rendered",
            "out/users.json",
            "--env",
            "prod",
            "--root",
            "/srv/api",
            "--format",
            "yaml",
            "--lowercase-keys",
            "--strict",
        ]);

        assert_eq!(args.file, None);
        assert_eq!(args.file_path, Some(PathBuf::from("requests/users.json")));
        assert_eq!(args.rendered, Some(PathBuf::from("out/users.json")));
        assert_eq!(args.env, "prod");
        assert_eq!(args.root, PathBuf::from("/srv/api"));
        assert_eq!(args.format, Some(OutputFormat::Yaml));
        assert!(args.lowercase_keys);
        assert!(args.strict);
    }

    #[test]
    fn test_render_requires_file() {
        assert!(Cli::try_parse_from(["courier", "render"]).is_err());
    }

    #[test]
    fn test_file_name_and_path_conflict() {
        let result = Cli::try_parse_from([
            "courier",
            "render",
            "-f",
            "users",
            "--file-path",
            "users.yaml",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_version_and_debug() {
        let cli = Cli::try_parse_from(["courier", "version", "--debug"]).unwrap();
        assert!(cli.debug);
        assert!(matches!(cli.command, Command::Version));
    }
}
