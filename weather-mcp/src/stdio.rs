//! Newline-delimited MCP over stdin/stdout.

use rmcp::ServiceExt;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::server::WeatherMcp;

pub async fn serve(server: WeatherMcp) -> anyhow::Result<()> {
    tracing::info!("MCP server starting in stdio mode");

    let (stdin, stdout) = rmcp::transport::stdio();
    run(server, stdin, stdout).await
}

/// Serves one session on the given byte streams until the peer goes away.
pub async fn run<R, W>(server: WeatherMcp, reader: R, writer: W) -> anyhow::Result<()>
where
    R: AsyncRead + Send + Unpin + 'static,
    W: AsyncWrite + Send + Unpin + 'static,
{
    let running = server.serve((reader, writer)).await?;
    let reason = running.waiting().await?;

    tracing::info!(?reason, "stdio session closed");
    Ok(())
}
