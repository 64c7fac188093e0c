//! `rc-mcp-gen serve`

use anyhow::Result;
use tracing::info;

use rc_mcp_gen::core::{Config, McpServer, TransportService};

pub async fn run(config: Config) -> Result<()> {
    info!("Starting {} v{}", config.server.name, config.server.version);

    let transport = TransportService::new(config.transport.clone());
    let server = McpServer::new(config)?;

    info!("Server initialized");
    transport.run(server).await?;

    info!("Server shutting down");
    Ok(())
}
