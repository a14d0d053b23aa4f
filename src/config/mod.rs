//! Application configuration.
//!
//! Settings are resolved from, in increasing priority: built-in defaults, a
//! `shop.toml` file, environment variables, and finally command-line flags
//! (applied by the binary).

/// Table renderer selection
pub mod display;

/// Backing file locations
pub mod storage;

pub use display::{DisplayConfig, TableStyle};
pub use storage::StorageConfig;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "shop.toml";

/// Configuration structure representing the entire shop.toml file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the tables live
    pub storage: StorageConfig,
    /// How listings are drawn
    pub display: DisplayConfig,
}

impl AppConfig {
    /// Applies environment overrides looked up through `lookup`.
    ///
    /// # Errors
    /// Returns `Error::Config` if an override holds an invalid value.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        self.storage.apply_env(&lookup);
        self.display.apply_env(&lookup)
    }
}

/// Loads configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or a field has the wrong type
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse {}: {e}", path_ref.display()),
    })
}

/// Resolves the full application configuration.
///
/// An explicit `path` must exist. Without one, `shop.toml` in the working
/// directory is used when present and defaults otherwise. Environment
/// overrides are applied last.
///
/// # Errors
/// Returns `Error::Config` if the file cannot be read or parsed, or an
/// environment override is invalid.
pub fn load_app_configuration(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => load_config(DEFAULT_CONFIG_FILE)?,
        None => {
            debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
            AppConfig::default()
        }
    };
    config.apply_env(|key| std::env::var(key).ok())?;
    info!(
        inventory = %config.storage.inventory_file.display(),
        sales = %config.storage.sales_file.display(),
        table_style = %config.display.table_style,
        "Configuration resolved"
    );
    Ok(config)
}
