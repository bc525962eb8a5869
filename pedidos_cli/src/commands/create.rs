use pedidos_core::{DbConfig, NewOrder, OrderStore, PgOrderStore};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Creates a new pending order.
pub fn create_order(
    config: &DbConfig,
    cliente: &str,
    monto: f64,
    output_format: OutputFormat,
) -> Result<(), CliError> {
    ui::header("Creating order");

    let new_order = NewOrder::from_f64(cliente, monto).map_err(|e| {
        ui::error(&e.to_string());
        CliError::from(e)
    })?;

    let store = PgOrderStore::new(config);
    let order = super::runtime()?
        .block_on(store.create(&new_order))
        .map_err(|e| {
            ui::error_with_details("Failed to create order", &e.to_string());
            CliError::from(e)
        })?;

    ui::success(&format!("Pedido #{} creado exitosamente", order.id));

    match output_format {
        OutputFormat::Pretty => ui::pretty_output_order(&order),
        OutputFormat::Json => ui::json_output(&order),
    }

    Ok(())
}
