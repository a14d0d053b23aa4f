//! Sales ledger - append-only history of sold line items.
//!
//! Committed sales are appended to the sales table one row per line item and
//! mirrored in memory. Nothing is ever rewritten or removed. If the process
//! dies in the middle of an append, the rows already written stay; they are
//! not repaired on the next start.

use crate::{
    config::StorageConfig,
    display::TableRenderer,
    entities::{Sale, SaleLineItem},
    errors::Result,
    store::RecordStore,
};
use tracing::{debug, info, instrument};

/// In-memory sales history backed by the sales table.
#[derive(Debug)]
pub struct SalesLedger {
    store: RecordStore,
    items: Vec<SaleLineItem>,
}

impl SalesLedger {
    /// Opens the sales table named in `config`, creating it if absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or created, or if any row
    /// is malformed.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        Self::from_store(RecordStore::new(&config.sales_file, SaleLineItem::HEADER))
    }

    /// Loads the full sales history held by `store`.
    ///
    /// # Errors
    /// Returns an error if the table cannot be loaded or a row fails to parse.
    #[instrument(skip(store), fields(path = %store.display_path()))]
    pub fn from_store(store: RecordStore) -> Result<Self> {
        let path = store.display_path();
        let items = store
            .load()?
            .iter()
            .map(|record| SaleLineItem::from_record(record, &path))
            .collect::<Result<Vec<_>>>()?;
        debug!("Loaded {} sale line items", items.len());
        Ok(Self { store, items })
    }

    /// Every recorded line item, oldest first.
    #[must_use]
    pub fn items(&self) -> &[SaleLineItem] {
        &self.items
    }

    /// Number of recorded line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing has been sold yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends every line item of `sale` to the sales table, then to memory.
    /// Returns the number of rows written; an empty sale writes nothing.
    ///
    /// # Errors
    /// Returns an error if the sales table cannot be appended to.
    #[instrument(skip(self, sale), fields(sale_id = sale.sale_id()))]
    pub fn record(&mut self, sale: &Sale) -> Result<usize> {
        if sale.is_empty() {
            return Ok(0);
        }
        self.store.append(&sale.to_records())?;
        self.items.extend_from_slice(sale.items());
        info!(
            "Recorded sale '{}' with {} line items totalling {:.2}",
            sale.sale_id(),
            sale.items().len(),
            sale.total()
        );
        Ok(sale.items().len())
    }

    /// Formatted sales report, or a notice when nothing has been sold.
    pub fn view(&self, renderer: &dyn TableRenderer) -> String {
        if self.is_empty() {
            return "No sales records found.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .items
            .iter()
            .map(|item| {
                vec![
                    item.sale_id.clone(),
                    item.product_id.to_string(),
                    item.product_name.clone(),
                    item.quantity_sold.to_string(),
                    format!("{:.2}", item.total_price),
                ]
            })
            .collect();
        format!(
            "Sales Report:\n{}",
            renderer.render(
                &[
                    "Sale ID",
                    "Product ID",
                    "Product Name",
                    "Quantity Sold",
                    "Total Price"
                ],
                &rows
            )
        )
    }
}
