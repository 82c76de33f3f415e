//! Courier - Main Entry Point
//!
//! Loads a request file, resolves its placeholders against the selected
//! environment and prints the typed result to stdout. Logs go to stderr.

mod cli;
mod render;

use std::io::Write;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Command::Render(args) => {
            let rendered = render::render(&args)?;
            std::io::stdout().lock().write_all(rendered.as_bytes())?;
        }
        Command::Version => {
            println!("courier {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
