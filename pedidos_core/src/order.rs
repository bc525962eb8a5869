//! The order entity and its companions.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Deserialize, Serialize};

/// Status given to every newly created order.
pub const ESTADO_PENDIENTE: &str = "pendiente";

/// A customer order as stored in the `pedidos` table.
///
/// Field names are kept as they appear in the table and in the tool
/// responses, so the struct serializes directly into the response records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub cliente: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub monto: Decimal,
    pub estado: String,
    pub fecha_pedido: NaiveDate,
}

/// The caller-provided fields of an order about to be created.
///
/// Status and date are assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
    pub cliente: String,
    pub monto: Decimal,
}

impl NewOrder {
    /// Validates the customer name and builds a new order.
    ///
    /// The amount is not range-checked; negative amounts are accepted.
    pub fn new(cliente: impl Into<String>, monto: Decimal) -> Result<Self, InvalidOrder> {
        let cliente = cliente.into();
        if cliente.trim().is_empty() {
            return Err(InvalidOrder::EmptyCustomer);
        }

        Ok(Self { cliente, monto })
    }

    /// Builds a new order from a floating point amount, as received over JSON.
    pub fn from_f64(cliente: impl Into<String>, monto: f64) -> Result<Self, InvalidOrder> {
        let monto = Decimal::from_f64(monto).ok_or(InvalidOrder::InvalidAmount(monto))?;
        Self::new(cliente, monto)
    }
}

/// Reasons a [`NewOrder`] can be rejected before reaching the store.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidOrder {
    EmptyCustomer,
    InvalidAmount(f64),
}

impl fmt::Display for InvalidOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidOrder::EmptyCustomer => write!(f, "Customer name (cliente) must not be empty"),
            InvalidOrder::InvalidAmount(monto) => {
                write!(f, "Amount (monto) {} is not a valid decimal value", monto)
            }
        }
    }
}

impl std::error::Error for InvalidOrder {}

/// Order count and amount total for one status.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub estado: String,
    pub cantidad: i64,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn order(id: i64, monto: Decimal) -> Order {
        Order {
            id,
            cliente: "Acme".to_string(),
            monto,
            estado: ESTADO_PENDIENTE.to_string(),
            fecha_pedido: NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        }
    }

    #[test]
    fn test_new_order_accepts_name_and_amount() {
        let new_order = NewOrder::new("Acme", dec!(100.00)).unwrap();
        assert_eq!(new_order.cliente, "Acme");
        assert_eq!(new_order.monto, dec!(100.00));
    }

    #[test]
    fn test_new_order_rejects_blank_customer() {
        assert_eq!(NewOrder::new("", dec!(1)), Err(InvalidOrder::EmptyCustomer));
        assert_eq!(
            NewOrder::new("   ", dec!(1)),
            Err(InvalidOrder::EmptyCustomer)
        );
    }

    #[test]
    fn test_new_order_accepts_negative_amount() {
        assert!(NewOrder::new("Acme", dec!(-5)).is_ok());
    }

    #[test]
    fn test_from_f64_converts_amount() {
        let new_order = NewOrder::from_f64("Acme", 1250.5).unwrap();
        assert_eq!(new_order.monto, dec!(1250.5));
    }

    #[test]
    fn test_from_f64_rejects_non_finite_amount() {
        assert!(matches!(
            NewOrder::from_f64("Acme", f64::NAN),
            Err(InvalidOrder::InvalidAmount(_))
        ));
        assert!(matches!(
            NewOrder::from_f64("Acme", f64::INFINITY),
            Err(InvalidOrder::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_order_serializes_with_table_field_names() {
        let json = serde_json::to_value(order(7, dec!(99.90))).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["cliente"], "Acme");
        assert_eq!(json["monto"], 99.9);
        assert_eq!(json["estado"], "pendiente");
        assert_eq!(json["fecha_pedido"], "2025-03-14");
    }
}
