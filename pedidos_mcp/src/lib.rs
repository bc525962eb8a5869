//! MCP server for Pedidos.
//!
//! This crate provides an MCP (Model Context Protocol) server that exposes
//! order lookup, creation and listing as tools to a host process over stdio.

mod server;
pub mod tools;

pub use server::{PedidosMcpServer, SERVER_NAME, ServerError};
