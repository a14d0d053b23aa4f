//! Menu commands - one module per group of menu entries.

/// View inventory, add product.
pub mod inventory;
/// Sales report.
pub mod report;
/// Process a sale.
pub mod sale;
