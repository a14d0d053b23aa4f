//! Unified error type for the shop tracker.
//!
//! Errors fall into two groups: operator mistakes (duplicate ids, bad input,
//! insufficient stock) that are reported and reprompted, and storage or
//! configuration failures that end the process.

use thiserror::Error;

/// Every failure the shop can report.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// A table file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A table file could not be parsed as delimited text
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A table row has the wrong shape or an unparsable field
    #[error("Malformed record in {path} at line {line}: {message}")]
    MalformedRecord {
        /// File the row came from
        path: String,
        /// One-based line of the row, 0 if unknown
        line: u64,
        /// Which field failed and why
        message: String,
    },

    /// A product with this id is already in the catalog
    #[error("Product ID {product_id} already exists")]
    ProductExists {
        /// The conflicting id
        product_id: u64,
    },

    /// No product with this id is in the catalog
    #[error("Product ID {product_id} not found")]
    ProductNotFound {
        /// The missing id
        product_id: u64,
    },

    /// Operator input does not name an existing product
    #[error("Invalid product ID: {input:?}")]
    InvalidProductId {
        /// What the operator typed
        input: String,
    },

    /// Operator input is not a usable quantity
    #[error("Invalid quantity: {input:?}")]
    InvalidQuantity {
        /// What the operator typed
        input: String,
    },

    /// A price is negative or not finite
    #[error("Invalid price: {price}")]
    InvalidPrice {
        /// The rejected price
        price: f64,
    },

    /// Any other rejected operator input
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// Why the input was rejected
        message: String,
    },

    /// A sale asks for more units than are on hand
    #[error(
        "Insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        /// Product being sold
        product_id: u64,
        /// Units asked for
        requested: u32,
        /// Units on hand
        available: u32,
    },
}

impl Error {
    /// Whether the operator can simply be reprompted after this error.
    ///
    /// Storage, parsing and configuration errors are fatal; everything caused by
    /// a single bad answer at the prompt is not.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ProductExists { .. }
                | Self::ProductNotFound { .. }
                | Self::InvalidProductId { .. }
                | Self::InvalidQuantity { .. }
                | Self::InvalidPrice { .. }
                | Self::InvalidInput { .. }
                | Self::InsufficientStock { .. }
        )
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
