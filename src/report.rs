//! Inventory report export
//!
//! CSV: header `product_id,name,price,quantity`, then one record per row.
//! JSON: an array of objects with the same keys.
//! An existing file at the target path is overwritten.

use crate::error::Result;
use crate::models::ReportRow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Report file written when no path is given
pub const DEFAULT_REPORT_FILE: &str = "inventory_report.csv";

const CSV_HEADER: [&str; 4] = ["product_id", "name", "price", "quantity"];

/// Output format of the exported report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Csv,
    Json,
}

/// Write `rows` to `path` in the given format
pub fn write_report(path: &Path, rows: &[ReportRow], format: ReportFormat) -> Result<()> {
    match format {
        ReportFormat::Csv => write_csv(path, rows),
        ReportFormat::Json => write_json(path, rows),
    }
}

fn write_csv(path: &Path, rows: &[ReportRow]) -> Result<()> {
    // Header is written by hand so an empty report still carries it
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_json(path: &Path, rows: &[ReportRow]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, rows)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
