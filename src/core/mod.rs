//! Core business logic - framework-agnostic inventory, ledger and sale operations.
//!
//! Nothing in here reads from or writes to the terminal; the menu layer feeds
//! operator input in and prints what comes back.

/// Product catalog.
pub mod inventory;
/// Sales history.
pub mod ledger;
/// Sale collection and commit.
pub mod sale;

pub use inventory::Inventory;
pub use ledger::SalesLedger;
pub use sale::{SaleOutcome, SaleSession};
