//! Raw string to typed value conversions
//!
//! Every conversion here is total. Unrecognized input falls back to a
//! documented default instead of failing startup.

use serde::{Serialize, Serializer};

/// Log verbosity threshold, least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    #[default]
    Error,
}

/// Level names in declaration order, matched case-insensitively.
/// Anything else maps to [`LOG_LEVEL_FALLBACK`].
const LOG_LEVELS: [(LogLevel, &str); 5] = [
    (LogLevel::Trace, "TRACE"),
    (LogLevel::Debug, "DEBUG"),
    (LogLevel::Info, "INFO"),
    (LogLevel::Warn, "WARN"),
    (LogLevel::Error, "ERROR"),
];

/// Level used for unknown or missing input. Least verbose, not least severe.
pub const LOG_LEVEL_FALLBACK: LogLevel = LogLevel::Error;

impl LogLevel {
    /// Case-insensitive lookup with the fallback for anything unrecognized.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|raw| {
            LOG_LEVELS
                .iter()
                .find(|(_, name)| name.eq_ignore_ascii_case(raw))
                .map(|(level, _)| *level)
        })
        .unwrap_or(LOG_LEVEL_FALLBACK)
    }

    pub fn as_str(self) -> &'static str {
        LOG_LEVELS[self as usize].1
    }

    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for LogLevel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// `true` only for the exact string `"true"`.
pub fn parse_flag(raw: Option<&str>) -> bool {
    raw == Some("true")
}

/// Inverted flag: `false` only for the exact string `"false"`.
pub fn parse_inverted_flag(raw: Option<&str>) -> bool {
    raw != Some("false")
}

/// Split a comma-separated tool list, trimming whitespace and discarding
/// empty segments. Order and duplicates are preserved.
pub fn parse_tool_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(|part| part.to_string())
            .collect::<Vec<_>>()
    })
    .unwrap_or_default()
}
