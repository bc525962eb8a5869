//! Order persistence.
//!
//! [`OrderStore`] is the seam between the tools and the database: one method
//! per SQL statement, each an independent request with no state carried
//! between calls.

mod memory;
mod postgres;
mod store_errors;

pub use memory::MemoryOrderStore;
pub use postgres::PgOrderStore;
pub use store_errors::StoreError;

use async_trait::async_trait;

use crate::order::{NewOrder, Order, StatusSummary};

/// Access to the `pedidos` table.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Fetch a single order by its identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError>;

    /// Insert a new pending order dated today and return the stored row.
    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError>;

    /// All orders with exactly the given status, newest first.
    async fn list_by_status(&self, estado: &str) -> Result<Vec<Order>, StoreError>;

    /// Order count and amount total per status, sorted by status.
    async fn summarize_by_status(&self) -> Result<Vec<StatusSummary>, StoreError>;
}
