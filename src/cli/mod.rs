//! Command-line entry point for clickup-mcp
//!
//! Resolves the startup configuration, installs logging at the configured
//! level and publishes the record for the rest of the process.

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use serde_json::json;
use tracing::{debug, info, trace};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::sources::capture_args;
use crate::config::tokenizer::tokenize;
use crate::config::{self, EnvironmentSnapshot, LogLevel, Provenance, ResolvedConfig};

const ENV_HELP: &str = "\
Configuration overrides:
      --env <KEY=VALUE>  Override a configuration variable, repeatable
                         (e.g. --env CLICKUP_TEAM_ID=123 or --env=PORT=8000)";

/// MCP server for the ClickUp task-management API
#[derive(Parser, Debug, Default)]
#[command(name = "clickup-mcp")]
#[command(author, version, about, long_about = None)]
#[command(after_help = ENV_HELP)]
pub struct Cli {
    /// Print the resolved configuration and its sources as JSON
    #[arg(long)]
    pub print_config: bool,
}

impl Cli {
    /// Parse the binary's own flags without ever failing startup.
    ///
    /// Takes the arguments left over after `--env` pairs were tokenized, so
    /// clap never sees an override. A command line clap rejects still
    /// resolves; only `--help` and `--version` exit here.
    fn parse_lenient(remainder: &[String]) -> Self {
        match Cli::try_parse_from(remainder) {
            Ok(cli) => cli,
            Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                err.exit()
            }
            Err(_) => Cli { print_config: remainder.iter().any(|a| a == "--print-config") },
        }
    }
}

pub fn run() -> Result<()> {
    let args = capture_args();
    let env = EnvironmentSnapshot::capture();
    let tokenized = tokenize(&args);
    let cli = Cli::parse_lenient(&tokenized.remainder);

    let (resolved, provenance) = config::resolve_tokenized(&tokenized, &env)?;

    init_logging(resolved.log_level());
    log_provenance(&provenance);

    let resolved = config::install(resolved);
    log_startup(resolved);

    if cli.print_config {
        let report = json!({ "config": resolved, "provenance": provenance });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}

/// Install the stderr subscriber. `RUST_LOG` directives still apply on top of
/// the configured level.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::from_default_env().add_directive(level.as_tracing_level().into());
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}

fn log_provenance(provenance: &Provenance) {
    for origin in &provenance.fields {
        debug!(
            field = ?origin.field,
            source = %origin.source,
            variable = origin.name.unwrap_or("-"),
            "configuration value resolved"
        );
    }
    for skipped in &provenance.skipped_arguments {
        trace!("ignored argument: {}", skipped);
    }
}

fn log_startup(config: &ResolvedConfig) {
    info!(
        "Configuration: port={}, sse={}, oauth={}, document_support={}, disabled_tools={}, log_level={}",
        config.port(),
        config.enable_sse(),
        config.enable_oauth(),
        config.document_support(),
        config.disabled_tools().len(),
        config.log_level()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(items: &[&str]) -> Cli {
        Cli::parse_lenient(&tokenize(items).remainder)
    }

    #[test]
    fn print_flag_survives_env_pairs() {
        assert!(parse(&["clickup-mcp", "--env", "PORT=1", "--print-config"]).print_config);
        assert!(parse(&["clickup-mcp", "--env=PORT=1", "--print-config"]).print_config);
    }

    #[test]
    fn print_flag_after_bare_env_is_not_swallowed() {
        let items = ["clickup-mcp", "--env", "--print-config"];
        assert!(parse(&items).print_config);
        assert!(tokenize(&items).arguments.is_empty());
    }

    #[test]
    fn unknown_flags_do_not_fail() {
        assert!(parse(&["clickup-mcp", "--transport", "sse", "--print-config"]).print_config);
    }

    #[test]
    fn trailing_env_flag_does_not_fail() {
        assert!(!parse(&["clickup-mcp", "--env"]).print_config);
    }
}
