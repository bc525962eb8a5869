//! Tests for the PostgreSQL order store.
//!
//! The tests marked `#[ignore]` need a reachable database configured through
//! the usual `PG_HOST`, `PG_PORT`, `PG_DB`, `PG_USER` and `PG_PASSWORD`
//! variables. Run them with `cargo test -p pedidos_core -- --ignored`.

use pedidos_core::order::ESTADO_PENDIENTE;
use pedidos_core::{DbConfig, NewOrder, OrderStore, PgOrderStore, StoreError};

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use sqlx::{Connection, PgConnection, Row};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// A configuration pointing at a port nothing listens on.
    fn unreachable_config() -> DbConfig {
        DbConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            ..DbConfig::default()
        }
    }

    fn env_config() -> DbConfig {
        let defaults = DbConfig::default();
        DbConfig {
            host: std::env::var("PG_HOST").unwrap_or(defaults.host),
            port: std::env::var("PG_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            database: std::env::var("PG_DB").unwrap_or(defaults.database),
            user: std::env::var("PG_USER").unwrap_or(defaults.user),
            password: std::env::var("PG_PASSWORD").unwrap_or(defaults.password),
        }
    }

    /// Make sure the `pedidos` table exists in the test database.
    async fn ensure_table(config: &DbConfig) {
        let mut conn = PgConnection::connect_with(&config.connect_options())
            .await
            .expect("Failed to connect to test database");
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS pedidos (
                id           SERIAL PRIMARY KEY,
                cliente      TEXT NOT NULL,
                monto        NUMERIC(12, 2) NOT NULL,
                estado       TEXT NOT NULL,
                fecha_pedido DATE NOT NULL DEFAULT CURRENT_DATE
            )
            ",
        )
        .execute(&mut conn)
        .await
        .expect("Failed to create pedidos table");
        conn.close().await.expect("Failed to close connection");
    }

    #[tokio::test]
    async fn test_unreachable_database_is_connection_error() {
        init_logging();
        let store = PgOrderStore::new(&unreachable_config());

        assert_matches!(
            store.find_by_id(1).await,
            Err(StoreError::Connection(msg)) if !msg.is_empty()
        );
        assert_matches!(
            store.create(&NewOrder::new("X", dec!(100.00)).unwrap()).await,
            Err(StoreError::Connection(msg)) if !msg.is_empty()
        );
        assert_matches!(
            store.list_by_status(ESTADO_PENDIENTE).await,
            Err(StoreError::Connection(msg)) if !msg.is_empty()
        );
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_create_then_find_round_trip() {
        init_logging();
        let config = env_config();
        ensure_table(&config).await;
        let store = PgOrderStore::new(&config);

        let created = store
            .create(&NewOrder::new("X", dec!(100.00)).unwrap())
            .await
            .unwrap();
        let found = store.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found.estado, ESTADO_PENDIENTE);
        assert_eq!(found.cliente, "X");
        assert_eq!(found.monto, dec!(100.00));
        assert_eq!(found, created);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_create_issues_increasing_ids() {
        init_logging();
        let config = env_config();
        ensure_table(&config).await;
        let store = PgOrderStore::new(&config);

        let first = store
            .create(&NewOrder::new("Primero", dec!(1)).unwrap())
            .await
            .unwrap();
        let second = store
            .create(&NewOrder::new("Segundo", dec!(2)).unwrap())
            .await
            .unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_missing_id_and_unknown_status() {
        init_logging();
        let config = env_config();
        ensure_table(&config).await;
        let store = PgOrderStore::new(&config);

        assert_eq!(store.find_by_id(-1).await.unwrap(), None);
        assert!(
            store
                .list_by_status("estado-que-no-existe")
                .await
                .unwrap()
                .is_empty()
        );
    }

    /// Insert an order with an explicit date, returning its id.
    async fn insert_dated(config: &DbConfig, estado: &str, fecha_pedido: NaiveDate) -> i64 {
        let mut conn = PgConnection::connect_with(&config.connect_options())
            .await
            .expect("Failed to connect to test database");
        let row = sqlx::query(
            "INSERT INTO pedidos (cliente, monto, estado, fecha_pedido) \
             VALUES ($1, $2, $3, $4) RETURNING id::BIGINT AS id",
        )
        .bind("Orden")
        .bind(dec!(10.00))
        .bind(estado)
        .bind(fecha_pedido)
        .fetch_one(&mut conn)
        .await
        .expect("Failed to insert dated order");
        conn.close().await.expect("Failed to close connection");
        row.try_get("id").expect("Failed to read inserted id")
    }

    /// A status no other test writes, so each run only sees its own rows.
    fn unique_estado() -> String {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        format!("orden-{}", nanos)
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_list_by_status_is_newest_first() {
        init_logging();
        let config = env_config();
        ensure_table(&config).await;
        let store = PgOrderStore::new(&config);
        let estado = unique_estado();
        let older = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let newer = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

        let first_newer = insert_dated(&config, &estado, newer).await;
        let oldest = insert_dated(&config, &estado, older).await;
        let second_newer = insert_dated(&config, &estado, newer).await;

        let listed = store.list_by_status(&estado).await.unwrap();
        let ids: Vec<i64> = listed.iter().map(|o| o.id).collect();

        assert_eq!(ids, vec![second_newer, first_newer, oldest]);
        assert_eq!(listed[0].fecha_pedido, newer);
        assert_eq!(listed[2].fecha_pedido, older);
    }

    #[tokio::test]
    #[ignore = "requires a running PostgreSQL"]
    async fn test_summarize_counts_every_order() {
        init_logging();
        let config = env_config();
        ensure_table(&config).await;
        let store = PgOrderStore::new(&config);

        store
            .create(&NewOrder::new("Resumen", dec!(5)).unwrap())
            .await
            .unwrap();
        let summary = store.summarize_by_status().await.unwrap();

        let pending = summary
            .iter()
            .find(|s| s.estado == ESTADO_PENDIENTE)
            .expect("pending orders should be summarized");
        assert!(pending.cantidad >= 1);
    }
}
