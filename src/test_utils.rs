//! Shared test utilities for `shopkeep`.
//!
//! This module provides helpers for setting up throwaway table files and
//! catalogs seeded with sensible defaults.

use crate::{
    config::StorageConfig,
    core::{Inventory, SalesLedger},
    entities::Product,
    errors::Result,
    store::RecordStore,
};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Installs a test-friendly subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// Creates a temporary directory holding both table paths (files not yet created).
/// Keep the `TempDir` alive for as long as the files are needed.
pub fn temp_storage() -> Result<(TempDir, StorageConfig)> {
    let dir = TempDir::new()?;
    let config = StorageConfig::in_dir(dir.path());
    Ok((dir, config))
}

/// Product 1: "Widget", price 2.50, quantity 10.
pub fn widget() -> Product {
    Product::new(1, "Widget", 2.5, 10)
}

/// Writes `products` straight to the inventory table and opens the catalog.
pub fn seed_inventory(config: &StorageConfig, products: &[Product]) -> Result<Inventory> {
    let rows: Vec<_> = products.iter().map(Product::to_record).collect();
    RecordStore::new(&config.inventory_file, Product::HEADER).overwrite(&rows)?;
    Inventory::open(config)
}

/// Seeded catalog plus an empty ledger, both backed by files in `config`.
pub fn seed_shop(
    config: &StorageConfig,
    products: &[Product],
) -> Result<(Inventory, SalesLedger)> {
    let inventory = seed_inventory(config, products)?;
    let ledger = SalesLedger::open(config)?;
    Ok((inventory, ledger))
}

/// Fresh catalog read back from disk.
pub fn inventory_from_disk(config: &StorageConfig) -> Result<Inventory> {
    Inventory::open(config)
}

/// Fresh ledger read back from disk.
pub fn ledger_from_disk(config: &StorageConfig) -> Result<SalesLedger> {
    SalesLedger::open(config)
}
