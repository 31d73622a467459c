//! Startup configuration resolution
//!
//! Resolves the server configuration from `--env KEY=VALUE` pairs, the process
//! environment and built-in defaults with precedence CLI > Env > Defaults.
//!
//! The pipeline is linear: tokenize the arguments, collapse aliases in each
//! source, merge by precedence, then coerce and validate into a
//! [`ResolvedConfig`]. Inputs are snapshots passed in by the caller; nothing
//! here reads the live process environment.

pub mod aliases;
pub mod coerce;
pub mod merge;
pub mod resolved;
pub mod sources;
pub mod tokenizer;
pub mod validate;

use once_cell::sync::OnceCell;
use serde::Serialize;

pub use aliases::Field;
pub use coerce::LogLevel;
pub use merge::FieldOrigin;
pub use resolved::ResolvedConfig;
pub use sources::{EnvironmentSnapshot, Source};
pub use tokenizer::{SkippedToken, Tokenized};
pub use validate::ConfigError;

use aliases::{normalize_cli, normalize_env};
use coerce::{parse_flag, parse_inverted_flag, parse_tool_list};
use merge::merge;
use tokenizer::tokenize;
use validate::validate_required;

/// Where each field's value came from, plus any `--env` tokens that were skipped.
///
/// Holds variable names and sources only, never values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Provenance {
    pub fields: Vec<FieldOrigin>,
    pub skipped_arguments: Vec<String>,
}

/// Resolve the configuration, discarding the provenance report.
pub fn resolve<S: AsRef<str>>(
    args: &[S],
    env: &EnvironmentSnapshot,
) -> Result<ResolvedConfig, ConfigError> {
    resolve_with_provenance(args, env).map(|(config, _)| config)
}

/// Resolve the configuration and report which source supplied each field.
pub fn resolve_with_provenance<S: AsRef<str>>(
    args: &[S],
    env: &EnvironmentSnapshot,
) -> Result<(ResolvedConfig, Provenance), ConfigError> {
    resolve_tokenized(&tokenize(args), env)
}

/// Resolve from arguments the caller has already tokenized.
pub fn resolve_tokenized(
    tokenized: &Tokenized,
    env: &EnvironmentSnapshot,
) -> Result<(ResolvedConfig, Provenance), ConfigError> {
    let cli = normalize_cli(&tokenized.to_map());
    let env = normalize_env(env);
    let merged = merge(&cli, &env);

    let text = |field: Field| merged.raw(field).unwrap_or("");

    let enable_oauth = parse_flag(merged.raw(Field::EnableOauth));
    validate_required(enable_oauth, text)?;

    let config = ResolvedConfig {
        api_key: text(Field::ApiKey).to_string(),
        team_id: text(Field::TeamId).to_string(),
        enable_sponsor_message: parse_inverted_flag(merged.raw(Field::SponsorMessage)),
        document_support: text(Field::DocumentSupport).to_string(),
        log_level: LogLevel::parse_lenient(merged.raw(Field::LogLevel)),
        disabled_tools: parse_tool_list(merged.raw(Field::DisabledTools)),
        enable_sse: parse_flag(merged.raw(Field::EnableSse)),
        enable_oauth,
        port: text(Field::Port).to_string(),
    };

    let provenance = Provenance {
        fields: merged.origins().collect(),
        skipped_arguments: tokenized.skipped.iter().map(ToString::to_string).collect(),
    };

    Ok((config, provenance))
}

static INSTALLED: OnceCell<ResolvedConfig> = OnceCell::new();

/// Publish the configuration for the rest of the process.
///
/// The first call wins; later calls return the record already installed.
pub fn install(config: ResolvedConfig) -> &'static ResolvedConfig {
    INSTALLED.get_or_init(|| config)
}

/// The installed configuration, if startup has reached that point.
pub fn current() -> Option<&'static ResolvedConfig> {
    INSTALLED.get()
}
