//! Binary crate for the `mcp-tw-weather` server.
//!
//! This crate focuses on:
//! - Parsing CLI arguments and interactive configuration
//! - Serving the MCP tool surface over stdio or streamable HTTP
//!
//! Logs go to stderr; stdout carries the stdio protocol stream.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod http;
mod server;
mod stdio;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cwa_weather_core=info,mcp_tw_weather=info".into()),
        )
        .with_target(false)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
