//! Mini Inventory - command-line entry point
//!
//! Opens the inventory database once, runs one operation (or the interactive
//! menu) and closes it on exit.

use clap::{Parser, Subcommand};
use mini_inventory::{
    execute, InventoryError, InventoryStore, Menu, Operation, StoreConfig, DEFAULT_REPORT_FILE,
};
use std::path::PathBuf;

/// Mini inventory tracker - suppliers, products, stock and discounts
#[derive(Parser, Debug)]
#[command(name = "mini_inventory")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the SQLite database file
    #[arg(short, long, default_value_t = default_db_path())]
    database: String,

    /// Reject unknown supplier and product ids instead of accepting them
    #[arg(long, default_value_t = false)]
    strict: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(flatten)]
    Op(Operation),
    /// Run the interactive menu
    Menu {
        /// Report file written by the "Export Report" entry
        #[arg(short, long, default_value = DEFAULT_REPORT_FILE)]
        output: PathBuf,
    },
}

/// Returns the default database path: ~/.local/share/mini_inventory/inventory.db
fn default_db_path() -> String {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mini_inventory")
        .join("inventory.db")
        .to_string_lossy()
        .to_string()
}

/// Process exit status for a failed command: 2 for a rejected operation,
/// 1 for a storage or I/O failure
fn exit_code(e: &InventoryError) -> i32 {
    if e.is_rejection() {
        2
    } else {
        1
    }
}

fn main() {
    // Set RUST_LOG to control log level, e.g. RUST_LOG=mini_inventory=debug
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = StoreConfig {
        strict_references: args.strict,
    };

    log::info!("Database path: {}", args.database);
    let mut store = match InventoryStore::open(&args.database, config) {
        Ok(store) => store,
        Err(e) => {
            log::error!("Failed to open database: {}", e);
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let result = match &args.command {
        Command::Op(op) => execute(&mut store, op, &mut std::io::stdout().lock()),
        Command::Menu { output } => {
            let stdin = std::io::stdin();
            Menu::new(stdin.lock(), std::io::stdout().lock())
                .with_report_path(output)
                .run(&mut store)
        }
    };
    drop(store);

    if let Err(e) = result {
        if e.is_rejection() {
            log::warn!("Command rejected: {}", e);
        } else {
            log::error!("Command failed: {}", e);
        }
        eprintln!("Error: {e}");
        std::process::exit(exit_code(&e));
    }
}
