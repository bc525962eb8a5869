//! Shared test helpers for pedidos_mcp tests.

#![allow(dead_code)]

use chrono::NaiveDate;
use pedidos_core::{MemoryOrderStore, Order};
use rmcp::model::{CallToolResult, RawContent};
use rust_decimal::Decimal;
use serde_json::Value;

/// Extract the text content from a CallToolResult.
pub fn get_text(result: &CallToolResult) -> String {
    assert_eq!(result.content.len(), 1, "Expected exactly one content item");
    match &result.content[0].raw {
        RawContent::Text(text_content) => text_content.text.clone(),
        _ => panic!("Expected text content"),
    }
}

/// Parse the JSON record carried by a CallToolResult.
pub fn get_json(result: &CallToolResult) -> Value {
    serde_json::from_str(&get_text(result)).expect("Expected a JSON record")
}

/// Check if the result is a success.
pub fn is_success(result: &CallToolResult) -> bool {
    result.is_error == Some(false)
}

/// Check if the result is an error.
pub fn is_error(result: &CallToolResult) -> bool {
    result.is_error == Some(true)
}

/// Build an order dated in January 2025.
pub fn order(id: i64, cliente: &str, monto: Decimal, estado: &str, day: u32) -> Order {
    Order {
        id,
        cliente: cliente.to_string(),
        monto,
        estado: estado.to_string(),
        fecha_pedido: NaiveDate::from_ymd_opt(2025, 1, day).expect("Invalid test date"),
    }
}

/// Create a store seeded with the given orders.
pub fn create_store(orders: Vec<Order>) -> MemoryOrderStore {
    MemoryOrderStore::with_orders(orders)
}
