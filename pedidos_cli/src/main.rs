mod cli;
mod commands;
mod errors;
mod logging;
mod ui;

use std::process::ExitCode;

use clap::Parser;
use log::{debug, error, info};

use cli::{PedidosCli, PedidosCliCommand};

fn main() -> ExitCode {
    // Loaded before parsing so env-backed arguments can come from .env.
    let dotenv = dotenvy::dotenv();
    let cli = PedidosCli::parse();

    logging::initialize_logging(&cli.log_file, cli.verbose);
    match dotenv {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) => debug!("No .env file loaded: {}", e),
    }

    let cwd = std::env::current_dir()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "<unknown>".to_string());
    info!("Pedidos starting. CWD={}", cwd);

    let config = cli.database.to_config();
    debug!("Database settings: {:?}", config);

    let result = match cli.command.unwrap_or(PedidosCliCommand::Mcp) {
        PedidosCliCommand::Mcp => commands::serve(&config),
        PedidosCliCommand::Check => commands::check(&config, cli.format),
        PedidosCliCommand::Get { id } => commands::get_order(&config, id, cli.format),
        PedidosCliCommand::List { estado } => commands::list_orders(&config, &estado, cli.format),
        PedidosCliCommand::Create { cliente, monto } => {
            commands::create_order(&config, &cliente, monto, cli.format)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Fatal error: {}", e);
            ExitCode::FAILURE
        }
    }
}
