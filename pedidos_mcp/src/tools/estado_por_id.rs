//! Order lookup tool implementation.

use log::error;
use pedidos_core::OrderStore;
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::records::{self, FoundOrder, LookupFailure};

/// Parameters for the pedidos_estado_por_id tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct EstadoPorIdParams {
    /// Identifier of the order to look up.
    pub id: i64,
}

/// Execute the lookup tool.
///
/// Returns the order with `found: true`, or an error record with
/// `found: false` when the order does not exist or the database fails.
pub async fn execute(
    store: &dyn OrderStore,
    params: &EstadoPorIdParams,
) -> Result<CallToolResult, McpError> {
    match store.find_by_id(params.id).await {
        Ok(Some(order)) => records::success(&FoundOrder {
            order: &order,
            found: true,
        }),
        Ok(None) => records::failure(&LookupFailure {
            error: format!("Pedido con ID {} no encontrado", params.id),
            found: false,
        }),
        Err(e) => {
            error!("Error in pedidos_estado_por_id: {}", e);
            records::failure(&LookupFailure {
                error: e.to_string(),
                found: false,
            })
        }
    }
}
