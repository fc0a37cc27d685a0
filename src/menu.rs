//! Interactive numbered menu
//!
//! Reads choices and fields line by line, so it runs the same against a
//! terminal or a scripted input.

use crate::commands::{execute, Operation};
use crate::error::{InventoryError, Result};
use crate::report::{ReportFormat, DEFAULT_REPORT_FILE};
use crate::store::{InventoryStore, DEFAULT_LOW_STOCK_THRESHOLD};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

const MENU_TEXT: &str = "
Mini Inventory Management System
1. Add Supplier
2. Add Product
3. Update Stock
4. Show Products
5. Search Product
6. Low Stock Alert
7. Add Discount
8. Show Discounts
9. Export Report
10. Exit
";

pub struct Menu<R, W> {
    input: R,
    output: W,
    report_path: PathBuf,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }

    /// Use `path` for the "Export Report" entry
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    /// Run until the user picks Exit or input ends.
    ///
    /// Failed operations are printed and the menu is shown again; only
    /// errors on the terminal itself end the loop early.
    pub fn run(&mut self, store: &mut InventoryStore) -> Result<()> {
        loop {
            write!(self.output, "{}", MENU_TEXT)?;
            let Some(choice) = self.ask("Enter choice: ")? else {
                break;
            };

            if choice.trim() == "10" {
                writeln!(self.output, "Exiting...")?;
                break;
            }

            let op = match self.read_operation(choice.trim()) {
                Ok(Some(op)) => op,
                Ok(None) => break,
                Err(InventoryError::InvalidInput(msg)) => {
                    writeln!(self.output, "{}", msg)?;
                    continue;
                }
                Err(e) => return Err(e),
            };

            if let Err(e) = execute(store, &op, &mut self.output) {
                if e.is_rejection() {
                    log::warn!("Operation rejected: {}", e);
                } else {
                    log::error!("Operation failed: {}", e);
                }
                writeln!(self.output, "Error: {}", e)?;
            }
        }
        Ok(())
    }

    /// Prompt for the fields of `choice`. `Ok(None)` means input ended.
    fn read_operation(&mut self, choice: &str) -> Result<Option<Operation>> {
        let op = match choice {
            "1" => {
                let Some(name) = self.ask("Name: ")? else {
                    return Ok(None);
                };
                let Some(city) = self.ask("City: ")? else {
                    return Ok(None);
                };
                let Some(contact) = self.ask("Contact: ")? else {
                    return Ok(None);
                };
                let Some(address) = self.ask("Address: ")? else {
                    return Ok(None);
                };
                Operation::AddSupplier {
                    name,
                    city,
                    contact,
                    address,
                }
            }
            "2" => {
                let Some(name) = self.ask("Product name: ")? else {
                    return Ok(None);
                };
                let Some(supplier_id) = self.ask_number::<i64>("Supplier ID: ")? else {
                    return Ok(None);
                };
                let Some(price) = self.ask_number::<f64>("Price: ")? else {
                    return Ok(None);
                };
                let Some(quantity) = self.ask_number::<i64>("Quantity: ")? else {
                    return Ok(None);
                };
                Operation::AddProduct {
                    name,
                    supplier_id,
                    price,
                    quantity,
                }
            }
            "3" => {
                let Some(product_id) = self.ask_number::<i64>("Product ID: ")? else {
                    return Ok(None);
                };
                let Some(quantity) = self.ask_number::<i64>("New quantity: ")? else {
                    return Ok(None);
                };
                Operation::UpdateStock {
                    product_id,
                    quantity,
                }
            }
            "4" => Operation::ListProducts,
            "5" => {
                let Some(pattern) = self.ask("Enter product name: ")? else {
                    return Ok(None);
                };
                Operation::Search { pattern }
            }
            "6" => Operation::LowStock {
                threshold: DEFAULT_LOW_STOCK_THRESHOLD,
            },
            "7" => {
                let Some(percent) = self.ask_number::<i64>("Discount %: ")? else {
                    return Ok(None);
                };
                let Some(product_id) = self.ask_number::<i64>("Product ID: ")? else {
                    return Ok(None);
                };
                Operation::AddDiscount {
                    percent,
                    product_id,
                }
            }
            "8" => Operation::ListDiscounts,
            "9" => Operation::Export {
                output: self.report_path.clone(),
                format: ReportFormat::Csv,
            },
            _ => return Err(InventoryError::InvalidInput("Invalid choice!".to_string())),
        };
        Ok(Some(op))
    }

    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn ask_number<T: FromStr>(&mut self, label: &str) -> Result<Option<T>> {
        match self.ask(label)? {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse()
                .map(Some)
                .map_err(|_| InventoryError::InvalidInput(format!("Invalid number: {}", raw))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;
    use std::io::Cursor;

    fn run_script(store: &mut InventoryStore, script: &str) -> String {
        let mut output = Vec::new();
        Menu::new(Cursor::new(script.as_bytes()), &mut output)
            .run(store)
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    fn test_store() -> InventoryStore {
        InventoryStore::open_in_memory(StoreConfig::default()).unwrap()
    }

    #[test]
    fn scripted_session_adds_and_lists() {
        let mut store = test_store();
        let script = "1\nAcme\nMetropolis\n555-0100\n1 Main St\n\
                      2\nWidget\n1\n9.99\n3\n\
                      4\n6\n10\n";

        let output = run_script(&mut store, script);

        assert!(output.contains("Supplier added successfully!"));
        assert!(output.contains("Product added successfully!"));
        assert!(output.contains("ID:1 | Product:Widget | Supplier:Acme | Price:9.99 | Stock:3"));
        assert!(output.contains("Widget -> 3 left"));
        assert!(output.ends_with("Exiting...\n"));
    }

    #[test]
    fn nan_price_product_is_added_and_shown_without_price() {
        let mut store = test_store();
        let output = run_script(&mut store, "2\nWidget\n1\nNaN\n3\n4\n10\n");

        assert!(output.contains("Product added successfully!"));
        assert!(output.contains("ID:1 | Product:Widget | Supplier:None | Price:None | Stock:3"));
    }

    #[test]
    fn unknown_choice_reprompts() {
        let mut store = test_store();
        let output = run_script(&mut store, "42\n10\n");
        assert!(output.contains("Invalid choice!"));
        assert_eq!(output.matches("Enter choice: ").count(), 2);
    }

    #[test]
    fn bad_number_returns_to_menu_without_writing() {
        let mut store = test_store();
        let output = run_script(&mut store, "2\nWidget\nabc\n10\n");
        assert!(output.contains("Invalid number: abc"));
        assert!(store.list_products().unwrap().is_empty());
    }

    #[test]
    fn negative_stock_update_is_reported() {
        let mut store = test_store();
        store.add_product("Widget", 1, 9.99, 3).unwrap();
        let output = run_script(&mut store, "3\n1\n-2\n10\n");
        assert!(output.contains("Invalid quantity!"));
        assert_eq!(store.list_products().unwrap()[0].quantity, Some(3));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let mut store = test_store();
        let output = run_script(&mut store, "1\nAcme\n");
        assert!(!output.contains("Supplier added"));
        assert!(store.list_suppliers().unwrap().is_empty());
    }

    #[test]
    fn export_entry_uses_configured_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("menu_report.csv");
        let mut store = test_store();
        store.add_product("Widget", 1, 9.99, 3).unwrap();

        let mut output = Vec::new();
        Menu::new(Cursor::new(&b"9\n10\n"[..]), &mut output)
            .with_report_path(&path)
            .run(&mut store)
            .unwrap();

        assert!(path.exists());
    }

    #[test]
    fn strict_rejection_is_printed_and_menu_continues() {
        let mut store = InventoryStore::open_in_memory(StoreConfig {
            strict_references: true,
        })
        .unwrap();
        let output = run_script(&mut store, "7\n10\n5\n8\n10\n");
        assert!(output.contains("Error: Unknown product id: 5"));
        assert!(output.contains("Discounts:"));
    }
}
