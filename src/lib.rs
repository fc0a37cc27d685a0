//! Mini Inventory - suppliers, products, stock and discounts
//!
//! A single-user inventory tracker backed by a local SQLite file, with a
//! subcommand CLI and an interactive menu on top of [`InventoryStore`].

pub mod commands;
pub mod database;
pub mod error;
pub mod formatters;
pub mod menu;
pub mod models;
pub mod report;
pub mod store;

pub use commands::{execute, Operation};
pub use error::{InventoryError, Result};
pub use menu::Menu;
pub use models::{
    DiscountListing, LowStockItem, Product, ProductListing, ReportRow, StockUpdate, Supplier,
};
pub use report::{ReportFormat, DEFAULT_REPORT_FILE};
pub use store::{InventoryStore, StoreConfig, DEFAULT_LOW_STOCK_THRESHOLD};
