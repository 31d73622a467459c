//! Canonical fields and their accepted variable names
//!
//! Every configuration field has one canonical variable name and may accept
//! legacy names. The names form a synonym group scanned in declared order;
//! the first non-empty value wins. The table is the same for `--env` pairs
//! and for the process environment.

use serde::Serialize;
use std::collections::BTreeMap;

use super::sources::EnvironmentSnapshot;

/// Env var: ClickUp API key.
pub const ENV_API_KEY: &str = "CLICKUP_API_KEY";
/// Env var: ClickUp team (workspace) id.
pub const ENV_TEAM_ID: &str = "CLICKUP_TEAM_ID";
/// Env var: sponsor notice toggle (environment only).
pub const ENV_SPONSOR_MESSAGE: &str = "ENABLE_SPONSOR_MESSAGE";
/// Env var: document tool support.
pub const ENV_DOCUMENT_SUPPORT: &str = "DOCUMENT_SUPPORT";
/// Env var: document tool support (legacy alias).
pub const ENV_DOCUMENT_SUPPORT_ALIAS_MODEL: &str = "DOCUMENT_MODEL";
/// Env var: document tool support (legacy alias).
pub const ENV_DOCUMENT_SUPPORT_ALIAS_MODULE: &str = "DOCUMENT_MODULE";
/// Env var: log verbosity threshold.
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Env var: comma-separated tool names to hide.
pub const ENV_DISABLED_TOOLS: &str = "DISABLED_TOOLS";
/// Env var: comma-separated tool names to hide (legacy alias).
pub const ENV_DISABLED_TOOLS_ALIAS: &str = "DISABLED_COMMANDS";
/// Env var: SSE transport toggle.
pub const ENV_ENABLE_SSE: &str = "ENABLE_SSE";
/// Env var: OAuth mode toggle.
pub const ENV_ENABLE_OAUTH: &str = "ENABLE_OAUTH";
/// Env var: listening port.
pub const ENV_PORT: &str = "PORT";

/// A canonical configuration field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    ApiKey,
    TeamId,
    SponsorMessage,
    DocumentSupport,
    LogLevel,
    DisabledTools,
    EnableSse,
    EnableOauth,
    Port,
}

impl Field {
    /// All fields in canonical order.
    pub const ALL: [Field; 9] = [
        Field::ApiKey,
        Field::TeamId,
        Field::SponsorMessage,
        Field::DocumentSupport,
        Field::LogLevel,
        Field::DisabledTools,
        Field::EnableSse,
        Field::EnableOauth,
        Field::Port,
    ];

    /// Accepted names, primary first.
    pub fn names(self) -> &'static [&'static str] {
        SYNONYMS
            .iter()
            .find(|(field, _)| *field == self)
            .map(|(_, names)| *names)
            .unwrap_or(&[])
    }

    /// The primary variable name, used in error messages and reports.
    pub fn canonical_name(self) -> &'static str {
        self.names().first().copied().unwrap_or("")
    }

    /// Whether `--env` pairs may set this field.
    pub fn cli_overridable(self) -> bool {
        !matches!(self, Field::SponsorMessage)
    }
}

/// Synonym groups: canonical field to accepted names in scan order.
///
/// Adding an alias is a data change here and nowhere else.
pub static SYNONYMS: &[(Field, &[&str])] = &[
    (Field::ApiKey, &[ENV_API_KEY]),
    (Field::TeamId, &[ENV_TEAM_ID]),
    (Field::SponsorMessage, &[ENV_SPONSOR_MESSAGE]),
    (
        Field::DocumentSupport,
        &[ENV_DOCUMENT_SUPPORT, ENV_DOCUMENT_SUPPORT_ALIAS_MODEL, ENV_DOCUMENT_SUPPORT_ALIAS_MODULE],
    ),
    (Field::LogLevel, &[ENV_LOG_LEVEL]),
    (Field::DisabledTools, &[ENV_DISABLED_TOOLS, ENV_DISABLED_TOOLS_ALIAS]),
    (Field::EnableSse, &[ENV_ENABLE_SSE]),
    (Field::EnableOauth, &[ENV_ENABLE_OAUTH]),
    (Field::Port, &[ENV_PORT]),
];

/// Whether `key` is accepted after `--env`.
pub fn is_cli_key(key: &str) -> bool {
    SYNONYMS
        .iter()
        .filter(|(field, _)| field.cli_overridable())
        .any(|(_, names)| names.contains(&key))
}

/// A value picked out of a synonym group, with the name that supplied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedValue {
    pub name: &'static str,
    pub value: String,
}

/// Field values from one source, synonyms already collapsed.
pub type Normalized = BTreeMap<Field, NamedValue>;

/// Collapse a source into canonical fields.
///
/// `lookup` answers "what value does this source hold for this name". Empty
/// values count as absent, so a blank primary name falls through to its
/// aliases.
pub fn normalize<'a, F>(fields: impl IntoIterator<Item = Field>, lookup: F) -> Normalized
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = Normalized::new();
    for field in fields {
        let hit = field
            .names()
            .iter()
            .find_map(|&name| lookup(name).filter(|v| !v.is_empty()).map(|v| (name, v)));
        if let Some((name, value)) = hit {
            out.insert(field, NamedValue { name, value: value.to_string() });
        }
    }
    out
}

/// Normalize tokenized `--env` pairs. Environment-only fields are skipped.
pub fn normalize_cli(pairs: &BTreeMap<String, String>) -> Normalized {
    normalize(Field::ALL.into_iter().filter(|f| f.cli_overridable()), |name| {
        pairs.get(name).map(String::as_str)
    })
}

/// Normalize the environment snapshot.
pub fn normalize_env(env: &EnvironmentSnapshot) -> Normalized {
    normalize(Field::ALL, |name| env.get(name))
}
