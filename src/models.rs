//! Row types for the inventory tables and query results

use serde::Serialize;

/// A row of the `suppliers` table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub contact: String,
    pub address: String,
}

/// A row of the `products` table
///
/// `price` is `None` when the stored value is NULL (a NaN price is written
/// as NULL by SQLite).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub supplier_id: i64,
    pub price: Option<f64>,
}

/// Product joined with its supplier and stock row.
///
/// `supplier_name` and `quantity` are `None` when the referenced supplier or
/// stock row does not exist, `price` when it is stored as NULL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductListing {
    pub product_id: i64,
    pub product_name: String,
    pub supplier_name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
}

/// Product whose stock is below the alert threshold
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LowStockItem {
    pub product_name: String,
    pub quantity: i64,
}

/// Discount joined with the product it applies to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiscountListing {
    pub product_name: String,
    pub discount_percent: i64,
}

/// One line of the exported inventory report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub product_id: i64,
    pub name: String,
    pub price: Option<f64>,
    pub quantity: i64,
}

/// Outcome of a stock update that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockUpdate {
    /// The stock row was overwritten
    Updated,
    /// No stock row exists for the product; nothing was written
    NoStockRow,
}
