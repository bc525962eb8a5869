use pedidos_core::{DbConfig, OrderStore, PgOrderStore};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Lists orders with the given status, newest first.
pub fn list_orders(
    config: &DbConfig,
    estado: &str,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Listing orders by status");
    let store = PgOrderStore::new(config);

    let orders = super::runtime()?
        .block_on(store.list_by_status(estado))
        .map_err(|e| {
            ui::error_with_details("Failed to list orders", &e.to_string());
            CliError::from(e)
        })?;

    ui::success(&format!(
        "Found {} orders with status '{}'",
        orders.len(),
        estado
    ));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_order_list(&orders),
        OutputFormat::Json => ui::json_output(&orders),
    }

    Ok(())
}
