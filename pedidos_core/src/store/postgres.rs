//! PostgreSQL-backed order store.

use async_trait::async_trait;
use log::{debug, warn};
use sqlx::postgres::{PgConnectOptions, PgConnection, PgRow};
use sqlx::{Connection, Row};

use super::{OrderStore, StoreError};
use crate::config::DbConfig;
use crate::order::{ESTADO_PENDIENTE, NewOrder, Order, StatusSummary};

// `id` is a SERIAL (int4) column; it is widened so it always decodes as i64.
const SELECT_BY_ID: &str = r"
    SELECT id::BIGINT AS id, cliente, monto, estado, fecha_pedido
    FROM pedidos
    WHERE id = $1
";

const INSERT_ORDER: &str = r"
    INSERT INTO pedidos (cliente, monto, estado, fecha_pedido)
    VALUES ($1, $2, $3, CURRENT_DATE)
    RETURNING id::BIGINT AS id, cliente, monto, estado, fecha_pedido
";

const SELECT_BY_STATUS: &str = r"
    SELECT id::BIGINT AS id, cliente, monto, estado, fecha_pedido
    FROM pedidos
    WHERE estado = $1
    ORDER BY fecha_pedido DESC, id DESC
";

const SUMMARIZE_BY_STATUS: &str = r"
    SELECT estado, COUNT(*) AS cantidad, COALESCE(SUM(monto), 0) AS total
    FROM pedidos
    GROUP BY estado
    ORDER BY estado
";

/// Order store that opens one PostgreSQL connection per call.
///
/// There is no pool: every operation connects, runs a single statement and
/// closes the connection again, whether the statement succeeded or not.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    options: PgConnectOptions,
}

impl PgOrderStore {
    pub fn new(config: &DbConfig) -> Self {
        debug!("Order store targets {}", config.target());
        Self {
            options: config.connect_options(),
        }
    }

    async fn connect(&self) -> Result<PgConnection, StoreError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| StoreError::Connection(e.to_string()))
    }
}

/// Close a connection, logging instead of failing if the goodbye is lost.
async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        warn!("Failed to close database connection cleanly: {}", e);
    }
}

fn row_to_order(row: &PgRow) -> Result<Order, StoreError> {
    Ok(Order {
        id: row.try_get("id")?,
        cliente: row.try_get("cliente")?,
        monto: row.try_get("monto")?,
        estado: row.try_get("estado")?,
        fecha_pedido: row.try_get("fecha_pedido")?,
    })
}

fn row_to_summary(row: &PgRow) -> Result<StatusSummary, StoreError> {
    Ok(StatusSummary {
        estado: row.try_get("estado")?,
        cantidad: row.try_get("cantidad")?,
        total: row.try_get("total")?,
    })
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn find_by_id(&self, id: i64) -> Result<Option<Order>, StoreError> {
        let mut conn = self.connect().await?;
        let row = sqlx::query(SELECT_BY_ID)
            .bind(id)
            .fetch_optional(&mut conn)
            .await;
        release(conn).await;

        row?.as_ref().map(row_to_order).transpose()
    }

    async fn create(&self, order: &NewOrder) -> Result<Order, StoreError> {
        let mut conn = self.connect().await?;
        // Runs outside an explicit transaction, so it commits on its own.
        let row = sqlx::query(INSERT_ORDER)
            .bind(&order.cliente)
            .bind(order.monto)
            .bind(ESTADO_PENDIENTE)
            .fetch_one(&mut conn)
            .await;
        release(conn).await;

        let created = row_to_order(&row?)?;
        debug!("Inserted order #{}", created.id);
        Ok(created)
    }

    async fn list_by_status(&self, estado: &str) -> Result<Vec<Order>, StoreError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(SELECT_BY_STATUS)
            .bind(estado)
            .fetch_all(&mut conn)
            .await;
        release(conn).await;

        rows?.iter().map(row_to_order).collect()
    }

    async fn summarize_by_status(&self) -> Result<Vec<StatusSummary>, StoreError> {
        let mut conn = self.connect().await?;
        let rows = sqlx::query(SUMMARIZE_BY_STATUS).fetch_all(&mut conn).await;
        release(conn).await;

        rows?.iter().map(row_to_summary).collect()
    }
}
