mod check;
mod create;
mod get;
mod list;
mod mcp;

pub use check::check;
pub use create::create_order;
pub use get::get_order;
pub use list::list_orders;
pub use mcp::serve;

use tokio::runtime::Runtime;

use crate::errors::CliError;

/// Build the single-threaded runtime the commands run on.
fn runtime() -> Result<Runtime, CliError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::RuntimeError(e.to_string()))
}
