//! Display configuration - which table renderer the menu uses.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::{fmt, str::FromStr};

/// Environment variable overriding the table style.
pub const TABLE_STYLE_VAR: &str = "SHOP_TABLE_STYLE";

/// Table layout used for inventory and sales listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Boxed grid with ruled header
    #[default]
    Grid,
    /// Aligned columns under a dashed rule
    Plain,
}

impl FromStr for TableStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(Self::Grid),
            "plain" => Ok(Self::Plain),
            other => Err(Error::Config {
                message: format!("Unknown table style '{other}', expected 'grid' or 'plain'"),
            }),
        }
    }
}

impl fmt::Display for TableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid => f.write_str("grid"),
            Self::Plain => f.write_str("plain"),
        }
    }
}

/// Listing presentation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Renderer used for inventory and sales listings
    pub table_style: TableStyle,
}

impl DisplayConfig {
    /// Applies the `SHOP_TABLE_STYLE` override looked up through `lookup`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the variable names an unknown style.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(style) = lookup(TABLE_STYLE_VAR).filter(|v| !v.trim().is_empty()) {
            self.table_style = style.parse()?;
        }
        Ok(())
    }
}
