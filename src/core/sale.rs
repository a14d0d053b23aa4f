//! Sale workflow - collects line items against the inventory and commits them.
//!
//! A `SaleSession` starts in the collecting state. Every accepted line item
//! takes its stock out of the in-memory inventory right away, so later items
//! of the same sale see the reduced quantity. Rejected items change nothing
//! and the operator can simply try again. Finishing the session either
//! commits (inventory rewritten, then line items appended to the ledger) or,
//! when nothing was accepted, cancels without touching either file.

use crate::{
    core::{inventory::Inventory, ledger::SalesLedger},
    entities::{Product, Sale, SaleLineItem},
    errors::{Error, Result},
};
use tracing::{info, instrument};

/// Input that ends line-item collection.
pub const TERMINATOR: &str = "done";

/// Whether `input` is the terminator, ignoring case and surrounding whitespace.
#[must_use]
pub fn is_terminator(input: &str) -> bool {
    input.trim().eq_ignore_ascii_case(TERMINATOR)
}

/// Parses a string made only of ASCII digits; signs, blanks and overflow fail.
fn parse_digits(input: &str) -> Option<u64> {
    let digits = input.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Generates a sale id from the local clock, used when the operator leaves it blank.
#[must_use]
pub fn generate_sale_id() -> String {
    chrono::Local::now().format("S%Y%m%d%H%M%S").to_string()
}

/// How a finished session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum SaleOutcome {
    /// At least one item was sold; inventory and ledger were written.
    Committed {
        /// Id the line items were recorded under
        sale_id: String,
        /// Number of line items written
        items: usize,
        /// Sum of the line totals
        total: f64,
    },
    /// Nothing was sold; no file was touched.
    Canceled {
        /// Id the sale was started with
        sale_id: String,
    },
}

/// A sale being collected against the inventory.
#[derive(Debug)]
pub struct SaleSession<'a> {
    inventory: &'a mut Inventory,
    sale: Sale,
}

impl<'a> SaleSession<'a> {
    /// Starts collecting items for `sale_id`, kept exactly as entered.
    /// A blank or whitespace-only id is replaced by a generated one.
    pub fn begin(inventory: &'a mut Inventory, sale_id: &str) -> Self {
        let sale_id = if sale_id.trim().is_empty() {
            generate_sale_id()
        } else {
            sale_id.to_string()
        };
        Self {
            inventory,
            sale: Sale::new(sale_id),
        }
    }

    /// The sale collected so far.
    #[must_use]
    pub fn sale(&self) -> &Sale {
        &self.sale
    }

    /// Resolves the operator's product id input to a catalog product.
    ///
    /// # Errors
    /// Returns `Error::InvalidProductId` unless `input` is a non-negative
    /// integer naming an existing product.
    pub fn select_product(&self, input: &str) -> Result<&Product> {
        parse_digits(input)
            .and_then(|id| self.inventory.get(id))
            .ok_or_else(|| Error::InvalidProductId {
                input: input.trim().to_string(),
            })
    }

    /// Validates the requested quantity and, if stock allows, adds the line item
    /// and takes the stock out of the in-memory inventory.
    ///
    /// # Errors
    /// Returns, leaving the sale and inventory unchanged:
    /// - `Error::InvalidProductId` if the product is not in the catalog
    /// - `Error::InvalidQuantity` unless `quantity_input` is a positive integer
    /// - `Error::InsufficientStock` if more units are requested than are on hand
    pub fn add_item(&mut self, product_id: u64, quantity_input: &str) -> Result<&SaleLineItem> {
        if !self.inventory.contains(product_id) {
            return Err(Error::InvalidProductId {
                input: product_id.to_string(),
            });
        }

        let quantity = parse_digits(quantity_input)
            .and_then(|q| u32::try_from(q).ok())
            .filter(|q| *q > 0)
            .ok_or_else(|| Error::InvalidQuantity {
                input: quantity_input.trim().to_string(),
            })?;

        let product = self.inventory.decrement(product_id, quantity)?;
        let total_price = f64::from(quantity) * product.price;
        let name = product.name.clone();
        Ok(self.sale.add_item(product_id, name, quantity, total_price))
    }

    /// Ends collection: commits a non-empty sale, cancels an empty one.
    ///
    /// # Errors
    /// Returns an error if the inventory or sales table cannot be written.
    #[instrument(skip(self, ledger), fields(sale_id = self.sale.sale_id()))]
    pub fn finish(self, ledger: &mut SalesLedger) -> Result<SaleOutcome> {
        let sale_id = self.sale.sale_id().to_string();
        if self.sale.is_empty() {
            info!("Sale '{}' canceled with no items", sale_id);
            return Ok(SaleOutcome::Canceled { sale_id });
        }

        self.inventory.persist()?;
        let items = ledger.record(&self.sale)?;
        Ok(SaleOutcome::Committed {
            sale_id,
            items,
            total: self.sale.total(),
        })
    }
}
