//! clickup-mcp: startup configuration for the ClickUp MCP server
//!
//! Resolves server settings from `--env KEY=VALUE` arguments, the process
//! environment and built-in defaults into one immutable [`ResolvedConfig`].

pub mod cli;
pub mod config;

pub use config::{resolve, resolve_with_provenance, ConfigError, LogLevel, ResolvedConfig};
