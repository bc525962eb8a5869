use std::fmt;

use pedidos_core::{InvalidOrder, StoreError};

/// Defines the errors a CLI command can end with.
#[derive(Debug)]
pub enum CliError {
    RuntimeError(String),
    ServerError(String),
    StoreError(StoreError),
    InputError(InvalidOrder),
    NotFound(i64),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::RuntimeError(msg) => write!(f, "Failed to create async runtime: {}", msg),
            CliError::ServerError(msg) => write!(f, "MCP server failed: {}", msg),
            CliError::StoreError(err) => write!(f, "{}", err),
            CliError::InputError(err) => write!(f, "Invalid order: {}", err),
            CliError::NotFound(id) => write!(f, "Order #{} not found", id),
        }
    }
}

impl std::error::Error for CliError {}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        CliError::StoreError(err)
    }
}

impl From<InvalidOrder> for CliError {
    fn from(err: InvalidOrder) -> Self {
        CliError::InputError(err)
    }
}
