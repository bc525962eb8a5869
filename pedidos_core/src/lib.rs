//! Core data structures and database access for Pedidos.
//!
//! Pedidos exposes a small order-management surface (lookup, creation and
//! listing by status) on top of a PostgreSQL `pedidos` table. This crate holds
//! the order model, the database configuration and the [`OrderStore`] seam
//! that the MCP server and the CLI are written against.

pub mod config;
pub mod order;
pub mod store;

pub use config::DbConfig;
pub use order::{InvalidOrder, NewOrder, Order, StatusSummary};
pub use store::{MemoryOrderStore, OrderStore, PgOrderStore, StoreError};
