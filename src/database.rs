//! SQL for the inventory tables
//!
//! Uses parameterized queries exclusively (no SQL string concatenation).
//! Functions take a plain `&Connection` so they can run inside a
//! `Transaction` as well; validation and commit boundaries live in the store.

use crate::models::{DiscountListing, LowStockItem, Product, ProductListing, ReportRow, Supplier};
use rusqlite::{params, Connection, OptionalExtension};

/// Result type for database operations
pub type DbResult<T> = rusqlite::Result<T>;

/// Initialize the database schema
///
/// Creates tables if they don't exist:
/// - `suppliers`: supplier name and contact details
/// - `products`: product catalog, `supplier_id` is not enforced
/// - `stock`: one quantity row per product
/// - `discounts`: any number of percentage discounts per product
pub fn init_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS suppliers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            city TEXT,
            contact TEXT,
            address TEXT
        );

        -- price is nullable: SQLite stores a NaN price as NULL
        CREATE TABLE IF NOT EXISTS products (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            supplier_id INTEGER,
            price REAL
        );

        CREATE TABLE IF NOT EXISTS stock (
            product_id INTEGER PRIMARY KEY,
            quantity INTEGER
        );

        CREATE TABLE IF NOT EXISTS discounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            product_id INTEGER,
            discount_on_item INTEGER
        );
        ",
    )?;

    log::debug!("Database schema initialized");
    Ok(())
}

/// Insert a supplier and return its generated id
pub fn insert_supplier(
    conn: &Connection,
    name: &str,
    city: &str,
    contact: &str,
    address: &str,
) -> DbResult<i64> {
    conn.execute(
        "INSERT INTO suppliers (name, city, contact, address) VALUES (?1, ?2, ?3, ?4)",
        params![name, city, contact, address],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert a product row (without stock) and return its generated id
pub fn insert_product(
    conn: &Connection,
    name: &str,
    supplier_id: i64,
    price: f64,
) -> DbResult<i64> {
    conn.execute(
        "INSERT INTO products (name, supplier_id, price) VALUES (?1, ?2, ?3)",
        params![name, supplier_id, price],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Insert the stock row for a product
pub fn insert_stock(conn: &Connection, product_id: i64, quantity: i64) -> DbResult<()> {
    conn.execute(
        "INSERT INTO stock (product_id, quantity) VALUES (?1, ?2)",
        params![product_id, quantity],
    )?;
    Ok(())
}

/// Overwrite a product's stock quantity
///
/// Returns the number of rows changed: 0 when the product has no stock row.
pub fn set_stock_quantity(conn: &Connection, product_id: i64, quantity: i64) -> DbResult<usize> {
    conn.execute(
        "UPDATE stock SET quantity = ?1 WHERE product_id = ?2",
        params![quantity, product_id],
    )
}

/// Insert a discount and return its generated id
pub fn insert_discount(
    conn: &Connection,
    product_id: i64,
    discount_percent: i64,
) -> DbResult<i64> {
    conn.execute(
        "INSERT INTO discounts (discount_on_item, product_id) VALUES (?1, ?2)",
        params![discount_percent, product_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn supplier_exists(conn: &Connection, supplier_id: i64) -> DbResult<bool> {
    row_exists(conn, "SELECT 1 FROM suppliers WHERE id = ?1", supplier_id)
}

pub fn product_exists(conn: &Connection, product_id: i64) -> DbResult<bool> {
    row_exists(conn, "SELECT 1 FROM products WHERE id = ?1", product_id)
}

pub fn stock_row_exists(conn: &Connection, product_id: i64) -> DbResult<bool> {
    row_exists(conn, "SELECT 1 FROM stock WHERE product_id = ?1", product_id)
}

fn row_exists(conn: &Connection, sql: &str, id: i64) -> DbResult<bool> {
    let found: Option<i64> = conn
        .query_row(sql, params![id], |row| row.get(0))
        .optional()?;
    Ok(found.is_some())
}

/// Get all suppliers in storage order
pub fn get_suppliers(conn: &Connection) -> DbResult<Vec<Supplier>> {
    let mut stmt = conn.prepare("SELECT id, name, city, contact, address FROM suppliers")?;
    let results: DbResult<Vec<Supplier>> = stmt
        .query_map([], |row| {
            Ok(Supplier {
                id: row.get(0)?,
                name: row.get(1)?,
                city: row.get(2)?,
                contact: row.get(3)?,
                address: row.get(4)?,
            })
        })?
        .collect();
    results
}

/// Get every product with its supplier name and stock quantity
///
/// Left joins keep products whose supplier or stock row is missing.
pub fn get_product_listings(conn: &Connection) -> DbResult<Vec<ProductListing>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.name, s.name, p.price, st.quantity
         FROM products p
         LEFT JOIN suppliers s ON p.supplier_id = s.id
         LEFT JOIN stock st ON p.id = st.product_id",
    )?;

    let results: DbResult<Vec<ProductListing>> = stmt
        .query_map([], |row| {
            Ok(ProductListing {
                product_id: row.get(0)?,
                product_name: row.get(1)?,
                supplier_name: row.get(2)?,
                price: row.get(3)?,
                quantity: row.get(4)?,
            })
        })?
        .collect();
    results
}

/// Search products by name (substring match with SQLite `LIKE` semantics)
///
/// `LIKE` is case-insensitive for ASCII, and `%` / `_` inside `query` still
/// act as wildcards.
pub fn search_products_by_name(conn: &Connection, query: &str) -> DbResult<Vec<Product>> {
    let pattern = format!("%{}%", query);
    let mut stmt =
        conn.prepare("SELECT id, name, supplier_id, price FROM products WHERE name LIKE ?1")?;

    let results: DbResult<Vec<Product>> = stmt
        .query_map(params![pattern], |row| {
            Ok(Product {
                id: row.get(0)?,
                name: row.get(1)?,
                supplier_id: row.get(2)?,
                price: row.get(3)?,
            })
        })?
        .collect();
    results
}

/// Get products whose quantity is strictly below `threshold`
///
/// Products without a stock row are not reported.
pub fn get_low_stock(conn: &Connection, threshold: i64) -> DbResult<Vec<LowStockItem>> {
    let mut stmt = conn.prepare(
        "SELECT p.name, st.quantity
         FROM stock st
         JOIN products p ON st.product_id = p.id
         WHERE st.quantity < ?1",
    )?;

    let results: DbResult<Vec<LowStockItem>> = stmt
        .query_map(params![threshold], |row| {
            Ok(LowStockItem {
                product_name: row.get(0)?,
                quantity: row.get(1)?,
            })
        })?
        .collect();
    results
}

/// Get discounts with the name of the product they apply to
///
/// Discounts pointing at a missing product are not reported.
pub fn get_discount_listings(conn: &Connection) -> DbResult<Vec<DiscountListing>> {
    let mut stmt = conn.prepare(
        "SELECT p.name, d.discount_on_item
         FROM discounts d
         JOIN products p ON d.product_id = p.id",
    )?;

    let results: DbResult<Vec<DiscountListing>> = stmt
        .query_map([], |row| {
            Ok(DiscountListing {
                product_name: row.get(0)?,
                discount_percent: row.get(1)?,
            })
        })?
        .collect();
    results
}

/// Get products that have a stock row, for the exported report
pub fn get_report_rows(conn: &Connection) -> DbResult<Vec<ReportRow>> {
    let mut stmt = conn.prepare(
        "SELECT p.id, p.name, p.price, st.quantity
         FROM products p
         JOIN stock st ON p.id = st.product_id",
    )?;

    let results: DbResult<Vec<ReportRow>> = stmt
        .query_map([], |row| {
            Ok(ReportRow {
                product_id: row.get(0)?,
                name: row.get(1)?,
                price: row.get(2)?,
                quantity: row.get(3)?,
            })
        })?
        .collect();
    results
}

/// Get total count of products in database
#[cfg(test)]
pub(crate) fn get_product_count(conn: &Connection) -> DbResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))
}

/// Get total count of stock rows in database
#[cfg(test)]
pub(crate) fn get_stock_count(conn: &Connection) -> DbResult<i64> {
    conn.query_row("SELECT COUNT(*) FROM stock", [], |row| row.get(0))
}
