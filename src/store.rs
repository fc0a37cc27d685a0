//! Inventory store: one owned SQLite connection plus the inventory operations
//!
//! The connection is opened once and closed when the store is dropped.
//! Each mutating operation commits on its own; `add_product` wraps its two
//! inserts in a single transaction.

use crate::database;
use crate::error::{InventoryError, Result};
use crate::models::{
    DiscountListing, LowStockItem, Product, ProductListing, ReportRow, StockUpdate, Supplier,
};
use crate::report::{self, ReportFormat};
use rusqlite::Connection;
use std::path::Path;

/// Quantity below which a product is reported by the low stock alert
pub const DEFAULT_LOW_STOCK_THRESHOLD: i64 = 5;

/// Store behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Reject unknown supplier/product ids instead of accepting them silently
    pub strict_references: bool,
}

/// Data-access handle for the suppliers, products, stock and discounts tables
pub struct InventoryStore {
    conn: Connection,
    config: StoreConfig,
}

impl InventoryStore {
    /// Open (or create) the database file at `path` and initialise the schema.
    ///
    /// The parent directory is created if it does not exist yet.
    pub fn open(path: impl AsRef<Path>, config: StoreConfig) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
                log::info!("Created directory: {}", parent.display());
            }
        }

        let conn = Connection::open(path)?;
        log::debug!("Opened database: {}", path.display());
        Self::with_connection(conn, config)
    }

    /// Open a throwaway in-memory database
    pub fn open_in_memory(config: StoreConfig) -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?, config)
    }

    fn with_connection(conn: Connection, config: StoreConfig) -> Result<Self> {
        database::init_schema(&conn)?;
        Ok(Self { conn, config })
    }

    /// Add a supplier and return its generated id
    pub fn add_supplier(
        &self,
        name: &str,
        city: &str,
        contact: &str,
        address: &str,
    ) -> Result<i64> {
        let id = database::insert_supplier(&self.conn, name, city, contact, address)?;
        log::info!("Added supplier {} ({})", id, name);
        Ok(id)
    }

    /// Add a product together with its initial stock row
    ///
    /// Both rows are written in one transaction. In strict mode the supplier
    /// must already exist.
    pub fn add_product(
        &mut self,
        name: &str,
        supplier_id: i64,
        price: f64,
        quantity: i64,
    ) -> Result<i64> {
        if self.config.strict_references && !database::supplier_exists(&self.conn, supplier_id)? {
            return Err(InventoryError::UnknownSupplier(supplier_id));
        }

        let tx = self.conn.transaction()?;
        let product_id = database::insert_product(&tx, name, supplier_id, price)?;
        database::insert_stock(&tx, product_id, quantity)?;
        tx.commit()?;

        log::info!(
            "Added product {} ({}) with {} in stock",
            product_id,
            name,
            quantity
        );
        Ok(product_id)
    }

    /// Overwrite the stock quantity of a product
    ///
    /// Negative quantities are rejected before touching the database. A
    /// product without a stock row is a silent no-op unless strict mode is on.
    pub fn update_stock(&self, product_id: i64, quantity: i64) -> Result<StockUpdate> {
        if quantity < 0 {
            return Err(InventoryError::InvalidQuantity(quantity));
        }
        if self.config.strict_references && !database::stock_row_exists(&self.conn, product_id)? {
            return Err(InventoryError::UnknownProduct(product_id));
        }

        let changed = database::set_stock_quantity(&self.conn, product_id, quantity)?;
        if changed == 0 {
            log::warn!("No stock row for product {}, nothing updated", product_id);
            return Ok(StockUpdate::NoStockRow);
        }

        log::info!("Stock for product {} set to {}", product_id, quantity);
        Ok(StockUpdate::Updated)
    }

    /// Every product with supplier name and quantity, missing joins as `None`
    pub fn list_products(&self) -> Result<Vec<ProductListing>> {
        Ok(database::get_product_listings(&self.conn)?)
    }

    /// Products whose name contains `pattern`
    pub fn search_products(&self, pattern: &str) -> Result<Vec<Product>> {
        Ok(database::search_products_by_name(&self.conn, pattern)?)
    }

    /// Products with a stock row whose quantity is below `threshold`
    pub fn low_stock_alert(&self, threshold: i64) -> Result<Vec<LowStockItem>> {
        Ok(database::get_low_stock(&self.conn, threshold)?)
    }

    /// Add a percentage discount for a product and return its id
    ///
    /// The percentage is not range-checked.
    pub fn add_discount(&self, discount_percent: i64, product_id: i64) -> Result<i64> {
        if self.config.strict_references && !database::product_exists(&self.conn, product_id)? {
            return Err(InventoryError::UnknownProduct(product_id));
        }

        let id = database::insert_discount(&self.conn, product_id, discount_percent)?;
        log::info!(
            "Added discount {} of {}% for product {}",
            id,
            discount_percent,
            product_id
        );
        Ok(id)
    }

    /// Discounts joined with their product name
    ///
    /// Discounts that point at a missing product are left out.
    pub fn list_discounts(&self) -> Result<Vec<DiscountListing>> {
        Ok(database::get_discount_listings(&self.conn)?)
    }

    /// Every supplier row, in table order
    pub fn list_suppliers(&self) -> Result<Vec<Supplier>> {
        Ok(database::get_suppliers(&self.conn)?)
    }

    /// Rows of the product/stock report
    pub fn report_rows(&self) -> Result<Vec<ReportRow>> {
        Ok(database::get_report_rows(&self.conn)?)
    }

    /// Write the product/stock report to `path`, replacing any existing file.
    ///
    /// Returns the number of rows written.
    pub fn export_report(&self, path: impl AsRef<Path>, format: ReportFormat) -> Result<usize> {
        let rows = self.report_rows()?;
        report::write_report(path.as_ref(), &rows, format)?;
        log::info!(
            "Exported {} rows to {}",
            rows.len(),
            path.as_ref().display()
        );
        Ok(rows.len())
    }
}
