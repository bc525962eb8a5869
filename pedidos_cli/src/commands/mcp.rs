//! MCP server command implementation.

use std::sync::Arc;

use log::info;
use pedidos_core::{DbConfig, PgOrderStore};
use pedidos_mcp::PedidosMcpServer;

use crate::errors::CliError;

/// Start the MCP server on stdio.
pub fn serve(config: &DbConfig) -> Result<(), CliError> {
    let rt = super::runtime()?;

    let server = PedidosMcpServer::new(Arc::new(PgOrderStore::new(config)));
    info!(
        "Serving {} tools over stdio, database {}",
        server.tools().len(),
        config.target()
    );

    // Blocks until the host closes the connection
    rt.block_on(server.serve_stdio())
        .map_err(|e| CliError::ServerError(e.to_string()))?;

    info!("MCP connection closed");
    Ok(())
}
