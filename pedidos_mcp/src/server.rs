//! Core MCP server implementation for Pedidos.

use std::sync::Arc;

use log::debug;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt, handler::server::wrapper::Parameters,
    model::*, tool, tool_handler, tool_router, transport::stdio,
};

use pedidos_core::OrderStore;

use crate::tools::{self, CrearParams, EstadoPorIdParams, ListarPorEstadoParams};

/// Name the server reports to hosts during initialization.
pub const SERVER_NAME: &str = "mcp-pedidos";

/// Error type for MCP server operations.
#[derive(Debug)]
pub enum ServerError {
    /// MCP protocol or transport error
    Mcp(String),
}

impl std::fmt::Display for ServerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerError::Mcp(msg) => write!(f, "MCP error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

/// MCP server for the order tools.
///
/// Holds no state besides the store handle: every tool call is an
/// independent request against the database.
#[derive(Clone)]
pub struct PedidosMcpServer {
    store: Arc<dyn OrderStore>,
    tool_router: rmcp::handler::server::router::tool::ToolRouter<PedidosMcpServer>,
}

#[tool_router]
impl PedidosMcpServer {
    /// Create a new MCP server backed by the given order store.
    pub fn new(store: Arc<dyn OrderStore>) -> Self {
        Self {
            store,
            tool_router: Self::tool_router(),
        }
    }

    /// The tools this server registers, in the form advertised to hosts.
    pub fn tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }

    #[tool(description = "Get an order and its current status by order ID. \
        Returns id, cliente, monto, estado, fecha_pedido and found=true, \
        or an error with found=false when the order does not exist.")]
    async fn pedidos_estado_por_id(
        &self,
        Parameters(params): Parameters<EstadoPorIdParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: pedidos_estado_por_id, id={}", params.id);
        tools::estado_por_id::execute(self.store.as_ref(), &params).await
    }

    #[tool(description = "Create a new order for a customer. \
        The order starts in status 'pendiente' dated today. \
        Returns success, the new id, the stored fields and a confirmation message.")]
    async fn pedidos_crear(
        &self,
        Parameters(params): Parameters<CrearParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!(
            "Tool: pedidos_crear, cliente={}, monto={}",
            params.cliente, params.monto
        );
        tools::crear::execute(self.store.as_ref(), &params).await
    }

    #[tool(description = "List all orders with a given status, newest first. \
        Status defaults to 'pendiente'; other usual values are 'procesando', 'completado' and 'cancelado'. \
        Returns an empty list when no order matches.")]
    async fn pedidos_listar_por_estado(
        &self,
        Parameters(params): Parameters<ListarPorEstadoParams>,
    ) -> Result<CallToolResult, McpError> {
        debug!("Tool: pedidos_listar_por_estado, estado={}", params.estado);
        tools::listar_por_estado::execute(self.store.as_ref(), &params).await
    }

    /// Serve MCP over stdio (stdin/stdout).
    ///
    /// This method blocks until the connection is closed.
    pub async fn serve_stdio(self) -> Result<(), ServerError> {
        debug!("Starting MCP server on stdio");
        let service = self
            .serve(stdio())
            .await
            .map_err(|e| ServerError::Mcp(format!("Failed to start server: {}", e)))?;
        service
            .waiting()
            .await
            .map_err(|e| ServerError::Mcp(format!("Server error: {}", e)))?;
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for PedidosMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Implementation::from_build_env()
            },
            instructions: Some(
                "Pedidos MCP server. Use the tools to look up an order by ID, \
                 create a new order, or list orders by status."
                    .into(),
            ),
        }
    }
}
