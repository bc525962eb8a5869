use pedidos_core::{DbConfig, OrderStore, PgOrderStore};

use crate::errors::CliError;
use crate::ui::{self, OutputFormat};

/// Gets a single order by its ID.
pub fn get_order(config: &DbConfig, id: i64, output_format: OutputFormat) -> Result<(), CliError> {
    ui::header("Getting order by ID");
    let store = PgOrderStore::new(config);

    let order = super::runtime()?
        .block_on(store.find_by_id(id))
        .map_err(|e| {
            ui::error_with_details("Failed to look up order", &e.to_string());
            CliError::from(e)
        })?;

    match order {
        Some(order) => {
            ui::success(&format!("Found order #{}", order.id));
            match output_format {
                OutputFormat::Pretty => ui::pretty_output_order(&order),
                OutputFormat::Json => ui::json_output(&order),
            }
            Ok(())
        }
        None => {
            ui::error(&format!("Order #{} not found", id));
            Err(CliError::NotFound(id))
        }
    }
}
