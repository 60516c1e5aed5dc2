// ABOUTME: Entry point for the cloudimage CLI application.
// ABOUTME: Parses arguments and dispatches to appropriate command handlers.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use cloudimage::config::{self, Config};
use cloudimage::error::Result;
use cloudimage::normalize::StatusRegistry;
use cloudimage::output::{Output, OutputMode};
use std::env;
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber based on verbose flag
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Normal
    };
    let output = Output::new(mode);

    if let Err(e) = run(cli, &output) {
        output.error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let cwd = env::current_dir()?;

    match cli.command {
        Commands::Init { force } => {
            config::init_config(&cwd, force)?;
            output.success(&format!("Created {}", config::CONFIG_FILENAME));
            Ok(())
        }
        Commands::Normalize { provider, raw } => {
            let registry = load_registry(cli.config.as_deref(), &cwd)?;
            commands::normalize(&registry, &provider, &raw, output)
        }
        Commands::Tables { provider } => {
            let registry = load_registry(cli.config.as_deref(), &cwd)?;
            commands::tables(&registry, provider.as_deref(), output)
        }
        Commands::Inspect { file } => {
            let registry = load_registry(cli.config.as_deref(), &cwd)?;
            commands::inspect(&registry, &file, output)
        }
    }
}

/// Built-in tables plus whatever the explicit or discovered config adds.
fn load_registry(path: Option<&Path>, cwd: &Path) -> Result<StatusRegistry> {
    let config = match path {
        Some(path) => Config::load(path)?,
        None => Config::discover_or_default(cwd)?,
    };
    config.registry()
}
