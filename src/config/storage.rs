//! Storage configuration - where the two backing tables live.
//!
//! Paths default to `inventory.csv` and `sales.csv` in the working directory
//! and can be overridden from `shop.toml` or the `SHOP_INVENTORY_FILE` and
//! `SHOP_SALES_FILE` environment variables (a `.env` file is honoured).

use serde::Deserialize;
use std::path::PathBuf;

/// Environment variable overriding the inventory table path.
pub const INVENTORY_FILE_VAR: &str = "SHOP_INVENTORY_FILE";
/// Environment variable overriding the sales table path.
pub const SALES_FILE_VAR: &str = "SHOP_SALES_FILE";

/// File locations of the inventory and sales tables
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Inventory table (`product_id,product_name,price,quantity`)
    pub inventory_file: PathBuf,
    /// Sales table (`sale_id,product_id,product_name,quantity_sold,total_price`)
    pub sales_file: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            inventory_file: PathBuf::from("inventory.csv"),
            sales_file: PathBuf::from("sales.csv"),
        }
    }
}

impl StorageConfig {
    /// Both tables placed in `dir` under their default file names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            inventory_file: dir.join("inventory.csv"),
            sales_file: dir.join("sales.csv"),
        }
    }

    /// Applies path overrides looked up through `lookup` (normally `std::env::var`).
    /// Empty values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(INVENTORY_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            self.inventory_file = PathBuf::from(path);
        }
        if let Some(path) = lookup(SALES_FILE_VAR).filter(|v| !v.trim().is_empty()) {
            self.sales_file = PathBuf::from(path);
        }
    }
}
