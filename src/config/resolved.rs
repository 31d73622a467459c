//! The resolved, immutable server configuration

use serde::{Serialize, Serializer};

use super::coerce::LogLevel;

/// Placeholder printed instead of a configured API key.
pub const REDACTED: &str = "***";

/// Fully typed configuration, built once at startup and shared read-only.
///
/// `Debug` and `Serialize` never expose the API key.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    #[serde(serialize_with = "redact")]
    pub(crate) api_key: String,
    pub(crate) team_id: String,
    pub(crate) enable_sponsor_message: bool,
    /// Kept as the raw string; consumers compare against exact values.
    pub(crate) document_support: String,
    pub(crate) log_level: LogLevel,
    pub(crate) disabled_tools: Vec<String>,
    pub(crate) enable_sse: bool,
    pub(crate) enable_oauth: bool,
    pub(crate) port: String,
}

impl ResolvedConfig {
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn team_id(&self) -> &str {
        &self.team_id
    }

    pub fn enable_sponsor_message(&self) -> bool {
        self.enable_sponsor_message
    }

    pub fn document_support(&self) -> &str {
        &self.document_support
    }

    /// `document_support == "true"`.
    pub fn document_support_enabled(&self) -> bool {
        self.document_support == "true"
    }

    pub fn log_level(&self) -> LogLevel {
        self.log_level
    }

    pub fn disabled_tools(&self) -> &[String] {
        &self.disabled_tools
    }

    pub fn is_tool_enabled(&self, name: &str) -> bool {
        !self.disabled_tools.iter().any(|t| t == name)
    }

    pub fn enable_sse(&self) -> bool {
        self.enable_sse
    }

    pub fn enable_oauth(&self) -> bool {
        self.enable_oauth
    }

    /// API key and team id must be configured statically.
    pub fn requires_static_credentials(&self) -> bool {
        !self.enable_oauth
    }

    pub fn port(&self) -> &str {
        &self.port
    }
}

fn redacted(secret: &str) -> &'static str {
    if secret.is_empty() {
        ""
    } else {
        REDACTED
    }
}

fn redact<S: Serializer>(secret: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(redacted(secret))
}

impl std::fmt::Debug for ResolvedConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedConfig")
            .field("api_key", &redacted(&self.api_key))
            .field("team_id", &self.team_id)
            .field("enable_sponsor_message", &self.enable_sponsor_message)
            .field("document_support", &self.document_support)
            .field("log_level", &self.log_level)
            .field("disabled_tools", &self.disabled_tools)
            .field("enable_sse", &self.enable_sse)
            .field("enable_oauth", &self.enable_oauth)
            .field("port", &self.port)
            .finish()
    }
}
