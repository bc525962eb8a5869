//! Response records shared by the tools.

use pedidos_core::Order;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Lookup answer for an existing order.
#[derive(Serialize)]
pub struct FoundOrder<'a> {
    #[serde(flatten)]
    pub order: &'a Order,
    pub found: bool,
}

/// Lookup answer when there is no order to show.
#[derive(Serialize)]
pub struct LookupFailure {
    pub error: String,
    pub found: bool,
}

#[derive(Serialize)]
pub struct CreatedOrder<'a> {
    pub success: bool,
    #[serde(flatten)]
    pub order: &'a Order,
    pub mensaje: String,
}

#[derive(Serialize)]
pub struct CreateFailure {
    pub success: bool,
    pub error: String,
}

/// Top-level error record.
#[derive(Serialize)]
pub struct ToolFailure {
    pub error: String,
}

/// Wrap a record as a successful tool result.
pub fn success<T: Serialize>(record: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::success(vec![Content::json(record)?]))
}

/// Wrap a record as a failed tool result.
pub fn failure<T: Serialize>(record: &T) -> Result<CallToolResult, McpError> {
    Ok(CallToolResult::error(vec![Content::json(record)?]))
}
