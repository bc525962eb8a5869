use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use pedidos_core::DbConfig;
use pedidos_core::config::{
    DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_PASSWORD, DEFAULT_PORT, DEFAULT_USER,
};
use pedidos_core::order::ESTADO_PENDIENTE;

use super::ui::OutputFormat;

/// Defines the top-level interface for the Pedidos CLI with clap.
#[derive(Parser, Debug)]
#[command(name = "pedidos")]
#[command(version, about = "Pedidos: order tools for MCP hosts, backed by PostgreSQL.")]
pub struct PedidosCli {
    #[command(flatten)]
    pub database: DatabaseArgs,

    /// File that diagnostics are appended to, in addition to stderr.
    #[arg(long, global = true, env = "PEDIDOS_LOG_FILE", default_value = "pedidos_mcp.log")]
    pub log_file: PathBuf,

    /// Enable verbose output?
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value_t = OutputFormat::default())]
    pub format: OutputFormat,

    /// Command to run. Serves MCP on stdio when omitted.
    #[command(subcommand)]
    pub command: Option<PedidosCliCommand>,
}

/// PostgreSQL connection settings.
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database host
    #[arg(long, global = true, env = "PG_HOST", default_value = DEFAULT_HOST)]
    pub pg_host: String,

    /// Database port
    #[arg(long, global = true, env = "PG_PORT", default_value_t = DEFAULT_PORT)]
    pub pg_port: u16,

    /// Database name
    #[arg(long, global = true, env = "PG_DB", default_value = DEFAULT_DATABASE)]
    pub pg_db: String,

    /// Database user
    #[arg(long, global = true, env = "PG_USER", default_value = DEFAULT_USER)]
    pub pg_user: String,

    /// Database password
    #[arg(
        long,
        global = true,
        env = "PG_PASSWORD",
        default_value = DEFAULT_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub pg_password: String,
}

impl DatabaseArgs {
    pub fn to_config(&self) -> DbConfig {
        DbConfig {
            host: self.pg_host.clone(),
            port: self.pg_port,
            database: self.pg_db.clone(),
            user: self.pg_user.clone(),
            password: self.pg_password.clone(),
        }
    }
}

/// Defines the available subcommands of the Pedidos CLI.
#[derive(Subcommand, Debug, PartialEq)]
pub enum PedidosCliCommand {
    /// Serve the order tools over MCP on stdio.
    Mcp,
    /// Check the database connection and summarize orders by status.
    Check,
    /// Get an order by ID.
    Get {
        /// Order ID (e.g. 42)
        id: i64,
    },
    /// List orders with a status, newest first.
    List {
        /// Order status (e.g. pendiente, procesando, completado, cancelado)
        #[arg(short, long, default_value = ESTADO_PENDIENTE)]
        estado: String,
    },
    /// Create a new pending order.
    Create {
        /// Customer name
        cliente: String,
        /// Order amount
        #[arg(allow_negative_numbers = true)]
        monto: f64,
    },
}
