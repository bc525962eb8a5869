//! In-process order store.
//!
//! Mirrors the behaviour of the PostgreSQL store closely enough to exercise
//! the tool layer without a database, including simulated outages.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use tokio::sync::Mutex;

use super::{OrderStore, StoreError};
use crate::order::{ESTADO_PENDIENTE, NewOrder, Order, StatusSummary};

struct MemoryState {
    orders: Vec<Order>,
    next_id: i64,
    outage: Option<String>,
}

impl MemoryState {
    fn check_available(&self) -> Result<(), StoreError> {
        match &self.outage {
            Some(message) => Err(StoreError::Connection(message.clone())),
            None => Ok(()),
        }
    }
}

/// Order store held entirely in memory.
pub struct MemoryOrderStore {
    state: Mutex<MemoryState>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::with_orders(Vec::new())
    }

    /// Create a store seeded with existing orders.
    ///
    /// New identifiers continue after the largest seeded one.
    pub fn with_orders(orders: Vec<Order>) -> Self {
        let next_id = orders.iter().map(|o| o.id).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(MemoryState {
                orders,
                next_id,
                outage: None,
            }),
        }
    }

    /// Create a store that fails every call with a connection error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                orders: Vec::new(),
                next_id: 1,
                outage: Some(message.into()),
            }),
        }
    }

    /// Start (`Some`) or end (`None`) a simulated database outage.
    pub async fn set_outage(&self, message: Option<String>) {
        self.state.lock().await.outage = message;
    }

    /// Date assigned to new orders, like `CURRENT_DATE` on the server.
    fn today() -> NaiveDate {
        Local::now().date_naive()
    }
}

impl Default for MemoryOrderStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OrderStore for MemoryOrderStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        let state = self.state.lock().await;
        state.check_available()?;

        Ok(state.orders.iter().find(|o| o.id == id).cloned())
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let mut state = self.state.lock().await;
        state.check_available()?;

        let created = Order {
            id: state.next_id,
            cliente: order.cliente.clone(),
            monto: order.monto,
            estado: ESTADO_PENDIENTE.to_string(),
            fecha_pedido: Self::today(),
        };
        state.next_id += 1;
        state.orders.push(created.clone());

        Ok(created)
    }

    async fn list_by_status(&self, estado: &str) -> Result<Vec<Order>, StoreError> {
        let state = self.state.lock().await;
        state.check_available()?;

        let mut matching: Vec<Order> = state
            .orders
            .iter()
            .filter(|o| o.estado == estado)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            b.fecha_pedido
                .cmp(&a.fecha_pedido)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matching)
    }

    async fn summarize_by_status(&self) -> Result<Vec<StatusSummary>, StoreError> {
        let state = self.state.lock().await;
        state.check_available()?;

        let mut totals: BTreeMap<&str, (i64, Decimal)> = BTreeMap::new();
        for order in &state.orders {
            let entry = totals
                .entry(order.estado.as_str())
                .or_insert((0, Decimal::ZERO));
            entry.0 += 1;
            entry.1 += order.monto;
        }

        Ok(totals
            .into_iter()
            .map(|(estado, (cantidad, total))| StatusSummary {
                estado: estado.to_string(),
                cantidad,
                total,
            })
            .collect())
    }
}
