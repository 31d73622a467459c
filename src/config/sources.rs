//! Configuration sources and the environment snapshot

use serde::{Serialize, Serializer};
use std::collections::BTreeMap;
use std::ffi::OsString;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cli,
    Env,
    Default,
}

impl Source {
    pub fn as_str(self) -> &'static str {
        match self {
            Source::Cli => "cli",
            Source::Env => "env",
            Source::Default => "default",
        }
    }
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Source {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Capture the process arguments.
pub fn capture_args() -> Vec<String> {
    args_from_os(std::env::args_os())
}

/// Convert raw arguments to strings, replacing invalid UTF-8 sequences.
///
/// Arguments are converted lossily rather than dropped so that an `--env`
/// flag keeps its position relative to the token after it.
pub fn args_from_os<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| arg.into_string().unwrap_or_else(|raw| raw.to_string_lossy().into_owned()))
        .collect()
}

/// Process environment captured once at startup.
///
/// Resolution only ever reads from a snapshot, never from the live
/// environment, so checking a variable twice cannot give two answers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Capture the current process environment.
    ///
    /// Entries whose name or value is not valid UTF-8 are dropped.
    pub fn capture() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    pub fn from_os_vars<I>(vars: I) -> Self
    where
        I: IntoIterator<Item = (OsString, OsString)>,
    {
        let vars = vars
            .into_iter()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for EnvironmentSnapshot
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}
