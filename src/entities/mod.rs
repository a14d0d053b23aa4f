//! Entity module - Contains the records kept in the two backing tables.
//! Each entity owns its table header and converts to and from a CSV row.

/// Inventory rows.
pub mod product;
/// Sales rows and the transient sale.
pub mod sale;

pub use product::Product;
pub use sale::{Sale, SaleLineItem};

use crate::errors::{Error, Result};
use csv::StringRecord;
use std::str::FromStr;

/// Line number of a loaded row, or 0 when the row was built in memory.
fn record_line(record: &StringRecord) -> u64 {
    record.position().map_or(0, csv::Position::line)
}

/// Checks that a row carries exactly as many fields as its table header.
pub(crate) fn expect_fields(record: &StringRecord, header: &[&str], path: &str) -> Result<()> {
    if record.len() == header.len() {
        return Ok(());
    }
    Err(Error::MalformedRecord {
        path: path.to_string(),
        line: record_line(record),
        message: format!("expected {} fields, found {}", header.len(), record.len()),
    })
}

/// Parses one field of a loaded row, naming the column on failure.
pub(crate) fn parse_field<T>(record: &StringRecord, index: usize, column: &str, path: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = record.get(index).unwrap_or_default().trim();
    raw.parse().map_err(|e: T::Err| Error::MalformedRecord {
        path: path.to_string(),
        line: record_line(record),
        message: format!("{column} {raw:?}: {e}"),
    })
}
