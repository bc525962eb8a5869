//! Listing-by-status tool implementation.

use log::error;
use pedidos_core::OrderStore;
use pedidos_core::order::ESTADO_PENDIENTE;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::records::{self, ToolFailure};

/// Parameters for the pedidos_listar_por_estado tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct ListarPorEstadoParams {
    /// Status to filter by, matched exactly. Conventional values are
    /// "pendiente", "procesando", "completado" and "cancelado".
    #[serde(default = "default_estado")]
    pub estado: String,
}

fn default_estado() -> String {
    ESTADO_PENDIENTE.to_string()
}

impl Default for ListarPorEstadoParams {
    fn default() -> Self {
        Self {
            estado: default_estado(),
        }
    }
}

/// Execute the listing tool.
///
/// Returns a JSON array of orders, newest first. An empty array means no
/// order has the requested status; failures come back as a single
/// top-level `{"error": ...}` record.
pub async fn execute(
    store: &dyn OrderStore,
    params: &ListarPorEstadoParams,
) -> Result<CallToolResult, McpError> {
    match store.list_by_status(&params.estado).await {
        Ok(orders) => records::success(&orders),
        Err(e) => {
            error!("Error in pedidos_listar_por_estado: {}", e);
            records::failure(&ToolFailure {
                error: e.to_string(),
            })
        }
    }
}
