//! Daemon entry point for the textbook MCP server.
//!
//! Loads configuration from the environment, reads the three textbook data
//! files, and serves the MCP protocol over stdio or streamable HTTP.

mod config;

use std::sync::Arc;

use textbook_core::load;
use textbook_mcp::server::{self, McpHttpServerConfig};
use tracing_subscriber::EnvFilter;

use crate::config::TextbookConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = TextbookConfig::from_args()?;
    let textbook = Arc::new(load::load_textbook(&config.paths)?);

    if config.enable_http {
        let http_config = McpHttpServerConfig::new(config.mcp_http_addr)
            .with_stateful_mode(config.http_stateful)
            .with_sse_keep_alive(Some(config.sse_keep_alive))
            .with_sse_retry(Some(config.sse_retry));
        server::serve_streamable_http(textbook, http_config).await?;
    } else {
        server::serve_stdio(textbook).await?;
    }
    Ok(())
}
