//! Check command: verifies the database connection and summarizes orders.

use pedidos_core::{DbConfig, Order, OrderStore, PgOrderStore, StatusSummary, StoreError};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Order looked up to exercise the single-row select.
const SAMPLE_ORDER_ID: i64 = 1;

/// What the check read back from the store.
#[derive(Debug)]
struct CheckReport {
    summary: Vec<StatusSummary>,
    sample: Option<Order>,
}

/// Run the per-status aggregate and the by-id lookup the tools rely on.
async fn inspect(store: &dyn OrderStore) -> Result<CheckReport, StoreError> {
    let summary = store.summarize_by_status().await?;
    let sample = store.find_by_id(SAMPLE_ORDER_ID).await?;
    Ok(CheckReport { summary, sample })
}

/// Connect to the database and report order counts and totals per status.
pub fn check(config: &DbConfig, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header(&format!("Checking database {}", config.target()));
    let store = PgOrderStore::new(config);

    let report = super::runtime()?.block_on(inspect(&store)).map_err(|e| {
        ui::error_with_details("Database check failed", &e.to_string());
        CliError::from(e)
    })?;

    let total: i64 = report.summary.iter().map(|s| s.cantidad).sum();
    ui::success(&format!(
        "Connection OK. {} orders in {} statuses",
        total,
        report.summary.len()
    ));

    match output_format {
        OutputFormat::Pretty => {
            ui::pretty_output_summary(&report.summary);
            match &report.sample {
                Some(order) => {
                    ui::success(&format!("Lookup OK. Order #{}:", SAMPLE_ORDER_ID));
                    ui::pretty_output_order(order);
                }
                None => ui::success(&format!(
                    "Lookup OK. Order #{} does not exist",
                    SAMPLE_ORDER_ID
                )),
            }
        }
        OutputFormat::Json => ui::json_output(&serde_json::json!({
            "summary": report.summary,
            "sample": report.sample,
        })),
    }

    Ok(())
}
