//! Text rendering of query results for the terminal

use crate::models::{DiscountListing, LowStockItem, Product, ProductListing, Supplier};
use std::fmt::Display;

fn or_none<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| "None".to_string())
}

pub fn format_product_list(products: &[ProductListing]) -> String {
    let mut output = String::from("\n--- Product List ---\n");
    for p in products {
        output.push_str(&format!(
            "ID:{} | Product:{} | Supplier:{} | Price:{} | Stock:{}\n",
            p.product_id,
            p.product_name,
            or_none(p.supplier_name.as_deref()),
            or_none(p.price),
            or_none(p.quantity)
        ));
    }
    output.push_str("---------------------\n");
    output
}

pub fn format_search_results(products: &[Product]) -> String {
    let mut output = String::from("\nSearch Results:\n");
    for p in products {
        output.push_str(&format!(
            "ID:{} | Product:{} | Supplier ID:{} | Price:{}\n",
            p.id,
            p.name,
            p.supplier_id,
            or_none(p.price)
        ));
    }
    output
}

pub fn format_low_stock(items: &[LowStockItem]) -> String {
    let mut output = String::from("\nLow Stock Items:\n");
    for item in items {
        output.push_str(&format!("{} -> {} left\n", item.product_name, item.quantity));
    }
    output
}

pub fn format_discounts(discounts: &[DiscountListing]) -> String {
    let mut output = String::from("\nDiscounts:\n");
    for d in discounts {
        output.push_str(&format!("{} -> {}%\n", d.product_name, d.discount_percent));
    }
    output
}

pub fn format_suppliers(suppliers: &[Supplier]) -> String {
    let mut output = String::from("\nSuppliers:\n");
    for s in suppliers {
        output.push_str(&format!(
            "ID:{} | Name:{} | City:{} | Contact:{} | Address:{}\n",
            s.id, s.name, s.city, s.contact, s.address
        ));
    }
    output
}
