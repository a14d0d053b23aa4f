//! Product entity - A stocked item with identifier, name, unit price and on-hand quantity.
//!
//! Products are created once through the add operation and afterwards only
//! their quantity changes, as sales draw stock down.

use super::{expect_fields, parse_field};
use crate::errors::Result;
use csv::StringRecord;

/// Product row of the inventory table
#[derive(Clone, Debug, PartialEq)]
pub struct Product {
    /// Unique identifier for the product
    pub product_id: u64,
    /// Display name of the product (e.g., "Widget")
    pub name: String,
    /// Unit price
    pub price: f64,
    /// Units currently on hand
    pub quantity: u32,
}

impl Product {
    /// Header row of the inventory table.
    pub const HEADER: &'static [&'static str] = &["product_id", "product_name", "price", "quantity"];

    /// Builds a product from its four fields.
    pub fn new(product_id: u64, name: impl Into<String>, price: f64, quantity: u32) -> Self {
        Self {
            product_id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Converts the product into an inventory table row.
    #[must_use]
    pub fn to_record(&self) -> StringRecord {
        StringRecord::from(vec![
            self.product_id.to_string(),
            self.name.clone(),
            self.price.to_string(),
            self.quantity.to_string(),
        ])
    }

    /// Parses an inventory table row loaded from `path`.
    ///
    /// # Errors
    /// Returns `Error::MalformedRecord` if the row has the wrong number of fields
    /// or any numeric field fails to parse.
    pub fn from_record(record: &StringRecord, path: &str) -> Result<Self> {
        expect_fields(record, Self::HEADER, path)?;
        Ok(Self {
            product_id: parse_field(record, 0, "product_id", path)?,
            name: record.get(1).unwrap_or_default().to_string(),
            price: parse_field(record, 2, "price", path)?,
            quantity: parse_field(record, 3, "quantity", path)?,
        })
    }
}
