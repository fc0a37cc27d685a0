//! CLI operations and their dispatch onto the store

use crate::error::{InventoryError, Result};
use crate::formatters::{
    format_discounts, format_low_stock, format_product_list, format_search_results,
    format_suppliers,
};
use crate::report::{ReportFormat, DEFAULT_REPORT_FILE};
use crate::store::{InventoryStore, DEFAULT_LOW_STOCK_THRESHOLD};
use clap::Subcommand;
use std::io::Write;
use std::path::PathBuf;

/// One inventory operation, as parsed from the command line or the menu
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Operation {
    /// Add a supplier
    AddSupplier {
        #[arg(long)]
        name: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        address: String,
    },
    /// Add a product with its initial stock quantity
    AddProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        supplier_id: i64,
        #[arg(long)]
        price: f64,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Set the stock quantity of a product
    UpdateStock {
        #[arg(long)]
        product_id: i64,
        #[arg(long, allow_negative_numbers = true)]
        quantity: i64,
    },
    /// Show all products with supplier and stock
    ListProducts,
    /// Search products by name
    Search { pattern: String },
    /// Show products with stock below the threshold
    LowStock {
        #[arg(long, default_value_t = DEFAULT_LOW_STOCK_THRESHOLD, allow_negative_numbers = true)]
        threshold: i64,
    },
    /// Add a percentage discount for a product
    AddDiscount {
        #[arg(long, allow_negative_numbers = true)]
        percent: i64,
        #[arg(long)]
        product_id: i64,
    },
    /// Show all discounts
    ListDiscounts,
    /// Show all suppliers
    ListSuppliers,
    /// Export the product/stock report
    Export {
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
    },
}

/// Run one operation against the store, writing user-facing text to `out`.
///
/// A negative stock quantity prints "Invalid quantity!" and is not an error;
/// every other failure is returned to the caller.
pub fn execute(store: &mut InventoryStore, op: &Operation, out: &mut impl Write) -> Result<()> {
    match op {
        Operation::AddSupplier {
            name,
            city,
            contact,
            address,
        } => {
            store.add_supplier(name, city, contact, address)?;
            writeln!(out, "Supplier added successfully!")?;
        }
        Operation::AddProduct {
            name,
            supplier_id,
            price,
            quantity,
        } => {
            store.add_product(name, *supplier_id, *price, *quantity)?;
            writeln!(out, "Product added successfully!")?;
        }
        Operation::UpdateStock {
            product_id,
            quantity,
        } => match store.update_stock(*product_id, *quantity) {
            Ok(_) => writeln!(out, "Stock updated!")?,
            Err(InventoryError::InvalidQuantity(_)) => writeln!(out, "Invalid quantity!")?,
            Err(e) => return Err(e),
        },
        Operation::ListProducts => {
            let products = store.list_products()?;
            write!(out, "{}", format_product_list(&products))?;
        }
        Operation::Search { pattern } => {
            let products = store.search_products(pattern)?;
            write!(out, "{}", format_search_results(&products))?;
        }
        Operation::LowStock { threshold } => {
            let items = store.low_stock_alert(*threshold)?;
            write!(out, "{}", format_low_stock(&items))?;
        }
        Operation::AddDiscount {
            percent,
            product_id,
        } => {
            store.add_discount(*percent, *product_id)?;
            writeln!(out, "Discount added!")?;
        }
        Operation::ListDiscounts => {
            let discounts = store.list_discounts()?;
            write!(out, "{}", format_discounts(&discounts))?;
        }
        Operation::ListSuppliers => {
            let suppliers = store.list_suppliers()?;
            write!(out, "{}", format_suppliers(&suppliers))?;
        }
        Operation::Export { output, format } => {
            store.export_report(output, *format)?;
            writeln!(out, "Report exported to {}", output.display())?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;

    fn run(store: &mut InventoryStore, op: Operation) -> String {
        let mut out = Vec::new();
        execute(store, &op, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn test_store() -> InventoryStore {
        InventoryStore::open_in_memory(StoreConfig::default()).unwrap()
    }

    #[test]
    fn mutations_print_confirmations() {
        let mut store = test_store();
        let out = run(
            &mut store,
            Operation::AddSupplier {
                name: "Acme".to_string(),
                city: "Metropolis".to_string(),
                contact: "555-0100".to_string(),
                address: "1 Main St".to_string(),
            },
        );
        assert_eq!(out, "Supplier added successfully!\n");

        let out = run(
            &mut store,
            Operation::AddProduct {
                name: "Widget".to_string(),
                supplier_id: 1,
                price: 9.99,
                quantity: 3,
            },
        );
        assert_eq!(out, "Product added successfully!\n");

        let out = run(
            &mut store,
            Operation::AddDiscount {
                percent: 10,
                product_id: 1,
            },
        );
        assert_eq!(out, "Discount added!\n");
    }

    #[test]
    fn negative_quantity_prints_rejection() {
        let mut store = test_store();
        let out = run(
            &mut store,
            Operation::UpdateStock {
                product_id: 1,
                quantity: -4,
            },
        );
        assert_eq!(out, "Invalid quantity!\n");
    }

    #[test]
    fn strict_rejection_is_returned() {
        let mut store = InventoryStore::open_in_memory(StoreConfig {
            strict_references: true,
        })
        .unwrap();
        let mut out = Vec::new();
        let err = execute(
            &mut store,
            &Operation::AddDiscount {
                percent: 10,
                product_id: 1,
            },
            &mut out,
        )
        .unwrap_err();
        assert!(err.is_rejection());
        assert!(out.is_empty());
    }

    #[test]
    fn export_writes_file_and_reports_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        let mut store = test_store();
        store.add_product("Widget", 1, 9.99, 3).unwrap();

        let out = run(
            &mut store,
            Operation::Export {
                output: path.clone(),
                format: ReportFormat::Csv,
            },
        );
        assert_eq!(out, format!("Report exported to {}\n", path.display()));
        assert!(std::fs::read_to_string(&path)
            .unwrap()
            .contains("1,Widget,9.99,3"));
    }
}
