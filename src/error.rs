//! Error types for mini_inventory

use thiserror::Error;

/// Unified error type for inventory operations
#[derive(Debug, Error)]
pub enum InventoryError {
    /// Stock quantity below zero, rejected before any write
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),
    /// Supplier id not present (strict mode only)
    #[error("Unknown supplier id: {0}")]
    UnknownSupplier(i64),
    /// Product id not present (strict mode only)
    #[error("Unknown product id: {0}")]
    UnknownProduct(i64),
    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to write CSV report
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    /// Failed to write JSON report
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// Unparseable interactive input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InventoryError {
    /// Whether the error is a rejected operation rather than a storage failure.
    ///
    /// Rejections leave the database untouched and callers may carry on.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            InventoryError::InvalidQuantity(_)
                | InventoryError::UnknownSupplier(_)
                | InventoryError::UnknownProduct(_)
                | InventoryError::InvalidInput(_)
        )
    }
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
