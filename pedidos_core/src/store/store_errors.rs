//! Error types for order persistence.

use std::fmt;

/// Errors that can occur while talking to the order store.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreError {
    /// The database could not be reached or the connection broke.
    Connection(String),
    /// The statement was rejected or failed while executing.
    Query(String),
    /// A returned row did not have the expected shape.
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Connection(msg) => write!(f, "Database connection error: {}", msg),
            StoreError::Query(msg) => write!(f, "Query error: {}", msg),
            StoreError::Decode(msg) => write!(f, "Could not read order row: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed => StoreError::Connection(err.to_string()),
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::Decode(_) => StoreError::Decode(err.to_string()),
            _ => StoreError::Query(err.to_string()),
        }
    }
}
