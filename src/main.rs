//! clickup-mcp: MCP server for the ClickUp API
//!
//! Resolves the server configuration once at startup and publishes it to the
//! rest of the process.

use anyhow::Result;

fn main() -> Result<()> {
    clickup_mcp::cli::run()
}
