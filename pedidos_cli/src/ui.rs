//! Terminal output for the operator commands.
//!
//! Never used by the MCP server command: stdout belongs to the protocol there.

use std::fmt;

use clap::ValueEnum;
use console::style;
use rust_decimal::Decimal;
use serde::Serialize;

use pedidos_core::{Order, StatusSummary};

/// How command results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Pretty,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Pretty => write!(f, "pretty"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

pub fn header(msg: &str) {
    println!("{}", style(msg).bold().cyan());
}

pub fn success(msg: &str) {
    println!("{} {}", style("✓").green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", style("✗").red(), style(msg).red());
}

pub fn error_with_details(msg: &str, details: &str) {
    eprintln!("{} {}: {}", style("✗").red(), style(msg).red(), details);
}

pub fn json_output<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => error_with_details("Failed to serialize output", &e.to_string()),
    }
}

pub fn pretty_output_order(order: &Order) {
    println!("{}", format_order(order));
}

pub fn pretty_output_order_list(orders: &[Order]) {
    for (i, order) in orders.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", format_order(order));
    }
}

pub fn pretty_output_summary(summary: &[StatusSummary]) {
    for line in summary.iter().map(format_summary) {
        println!("{}", line);
    }
}

/// Multi-line rendering of one order.
pub fn format_order(order: &Order) -> String {
    format!(
        "{}\n  {} {}\n  {} {}\n  {} {}\n  {} {}",
        style(format!("Pedido #{}", order.id)).bold(),
        style("Cliente:").dim(),
        order.cliente,
        style("Monto:").dim(),
        format_amount(order.monto),
        style("Estado:").dim(),
        order.estado,
        style("Fecha:").dim(),
        order.fecha_pedido
    )
}

/// One summary line, e.g. `- pendiente: 3 pedidos, Total: $1,250.00`.
pub fn format_summary(summary: &StatusSummary) -> String {
    format!(
        "  - {}: {} pedidos, Total: {}",
        style(&summary.estado).bold(),
        summary.cantidad,
        format_amount(summary.total)
    )
}

/// Formats an amount as currency with two decimals and thousands separators.
pub fn format_amount(amount: Decimal) -> String {
    let rounded = format!("{:.2}", amount.abs().round_dp(2));
    let (whole, cents) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}${}.{}", sign, grouped, cents)
}
