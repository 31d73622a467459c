//! `--env KEY=VALUE` argument scanning
//!
//! The scan is lenient: unknown keys and malformed tokens are skipped and
//! reported as notes, never as errors. A missing pair means "not supplied".

use std::collections::BTreeMap;

use super::aliases::is_cli_key;

/// Flag marker preceding each pair.
pub const ENV_FLAG: &str = "--env";

/// One `KEY=VALUE` pair taken from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawArgument {
    pub key: String,
    pub value: String,
}

/// Why a token after `--env` was not used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkippedToken {
    /// `--env` was the last argument.
    MissingPair,
    /// The token after `--env` had no `=`.
    NoSeparator(String),
    /// The key is not one this server understands.
    UnknownKey(String),
}

impl std::fmt::Display for SkippedToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkippedToken::MissingPair => write!(f, "{ENV_FLAG} without a following KEY=VALUE"),
            SkippedToken::NoSeparator(token) => {
                write!(f, "{ENV_FLAG} {token:?} has no '=' separator")
            }
            SkippedToken::UnknownKey(key) => write!(f, "unknown key {key:?} after {ENV_FLAG}"),
        }
    }
}

/// Result of scanning the argument list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    /// Recognized pairs in command-line order.
    pub arguments: Vec<RawArgument>,
    pub skipped: Vec<SkippedToken>,
    /// Arguments that are not part of an `--env` pair, in order.
    pub remainder: Vec<String>,
}

impl Tokenized {
    /// Key to value, the last occurrence of a key winning.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.arguments.iter().map(|arg| (arg.key.clone(), arg.value.clone())).collect()
    }

    fn take_pair(&mut self, token: &str) -> bool {
        let Some((key, value)) = token.split_once('=') else {
            self.skipped.push(SkippedToken::NoSeparator(token.to_string()));
            return false;
        };
        if is_cli_key(key) {
            self.arguments.push(RawArgument { key: key.to_string(), value: value.to_string() });
        } else {
            self.skipped.push(SkippedToken::UnknownKey(key.to_string()));
        }
        true
    }
}

/// Scan `args` for `--env KEY=VALUE` and `--env=KEY=VALUE` pairs.
///
/// The value is everything after the first `=`, so values may contain `=`.
/// When the token after `--env` has no `=` it is not consumed and is examined
/// again as an ordinary argument.
pub fn tokenize<S: AsRef<str>>(args: &[S]) -> Tokenized {
    let mut out = Tokenized::default();
    let mut i = 0;

    while i < args.len() {
        let arg: &str = args[i].as_ref();

        let attached = arg.strip_prefix(ENV_FLAG).and_then(|rest| rest.strip_prefix('='));
        if let Some(attached) = attached {
            out.take_pair(attached);
            i += 1;
            continue;
        }

        if arg != ENV_FLAG {
            out.remainder.push(arg.to_string());
            i += 1;
            continue;
        }

        let Some(next) = args.get(i + 1) else {
            out.skipped.push(SkippedToken::MissingPair);
            break;
        };

        let token: &str = next.as_ref();
        i += if out.take_pair(token) { 2 } else { 1 };
    }

    out
}
