//! Order creation tool implementation.

use log::{error, warn};
use pedidos_core::{NewOrder, OrderStore};
use rmcp::ErrorData as McpError;
use rmcp::model::CallToolResult;
use rmcp::schemars;

use super::records::{self, CreateFailure, CreatedOrder};

/// Parameters for the pedidos_crear tool.
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct CrearParams {
    /// Customer name. Must not be empty.
    pub cliente: String,
    /// Order amount.
    pub monto: f64,
}

/// Execute the creation tool.
///
/// Inserts a pending order dated today and returns the stored row together
/// with its new identifier.
pub async fn execute(
    store: &dyn OrderStore,
    params: &CrearParams,
) -> Result<CallToolResult, McpError> {
    let new_order = match NewOrder::from_f64(params.cliente.as_str(), params.monto) {
        Ok(new_order) => new_order,
        Err(e) => {
            warn!("Rejected pedidos_crear input: {}", e);
            return records::failure(&CreateFailure {
                success: false,
                error: e.to_string(),
            });
        }
    };

    match store.create(&new_order).await {
        Ok(order) => records::success(&CreatedOrder {
            success: true,
            mensaje: format!("Pedido #{} creado exitosamente", order.id),
            order: &order,
        }),
        Err(e) => {
            error!("Error in pedidos_crear: {}", e);
            records::failure(&CreateFailure {
                success: false,
                error: e.to_string(),
            })
        }
    }
}
