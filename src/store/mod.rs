//! Flat-file persistence for the shop's tables.
//!
//! Each table lives in its own comma-delimited file whose first row is a fixed
//! header. The store knows nothing about products or sales; it moves
//! `csv::StringRecord`s in and out of the file.

/// A single header-first table file.
pub mod record_store;

pub use record_store::RecordStore;
