//! Sale entities - A transient sale and the line items it decomposes into.
//!
//! A `Sale` only lives while the operator is entering items; on commit each of
//! its `SaleLineItem`s becomes one row of the sales table, all sharing the
//! sale's identifier.

use super::{expect_fields, parse_field};
use crate::errors::Result;
use csv::StringRecord;

/// One product/quantity entry of a sale, with its price snapshotted at sale time.
#[derive(Clone, Debug, PartialEq)]
pub struct SaleLineItem {
    /// Operator supplied sale identifier, repeated across items of the same sale
    pub sale_id: String,
    /// Product that was sold
    pub product_id: u64,
    /// Product name at the time of sale
    pub product_name: String,
    /// Units sold, always positive
    pub quantity_sold: u32,
    /// `quantity_sold` times the unit price at the time of sale
    pub total_price: f64,
}

impl SaleLineItem {
    /// Header row of the sales table.
    pub const HEADER: &'static [&'static str] = &[
        "sale_id",
        "product_id",
        "product_name",
        "quantity_sold",
        "total_price",
    ];

    /// Converts the line item into a sales table row.
    #[must_use]
    pub fn to_record(&self) -> StringRecord {
        StringRecord::from(vec![
            self.sale_id.clone(),
            self.product_id.to_string(),
            self.product_name.clone(),
            self.quantity_sold.to_string(),
            self.total_price.to_string(),
        ])
    }

    /// Parses a sales table row loaded from `path`.
    ///
    /// # Errors
    /// Returns `Error::MalformedRecord` if the row has the wrong number of fields
    /// or any numeric field fails to parse.
    pub fn from_record(record: &StringRecord, path: &str) -> Result<Self> {
        expect_fields(record, Self::HEADER, path)?;
        Ok(Self {
            sale_id: record.get(0).unwrap_or_default().to_string(),
            product_id: parse_field(record, 1, "product_id", path)?,
            product_name: record.get(2).unwrap_or_default().to_string(),
            quantity_sold: parse_field(record, 3, "quantity_sold", path)?,
            total_price: parse_field(record, 4, "total_price", path)?,
        })
    }
}

/// A sale being assembled; never persisted as a whole.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sale {
    sale_id: String,
    items: Vec<SaleLineItem>,
}

impl Sale {
    /// Starts an empty sale under `sale_id`.
    pub fn new(sale_id: impl Into<String>) -> Self {
        Self {
            sale_id: sale_id.into(),
            items: Vec::new(),
        }
    }

    /// Identifier shared by every line item.
    #[must_use]
    pub fn sale_id(&self) -> &str {
        &self.sale_id
    }

    /// Accepted line items, in entry order.
    #[must_use]
    pub fn items(&self) -> &[SaleLineItem] {
        &self.items
    }

    /// Whether no item has been accepted yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of all line totals.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.total_price).sum()
    }

    /// Appends a line item stamped with this sale's id and returns it.
    pub fn add_item(
        &mut self,
        product_id: u64,
        product_name: impl Into<String>,
        quantity_sold: u32,
        total_price: f64,
    ) -> &SaleLineItem {
        self.items.push(SaleLineItem {
            sale_id: self.sale_id.clone(),
            product_id,
            product_name: product_name.into(),
            quantity_sold,
            total_price,
        });
        &self.items[self.items.len() - 1]
    }

    /// Decomposes the sale into table rows, one per line item.
    #[must_use]
    pub fn to_records(&self) -> Vec<StringRecord> {
        self.items.iter().map(SaleLineItem::to_record).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_sale_rows_share_sale_id() {
        let mut sale = Sale::new("S-100");
        sale.add_item(1, "Widget", 3, 7.5);
        sale.add_item(2, "Gadget", 1, 4.0);

        let records = sale.to_records();
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.get(0) == Some("S-100")));
        assert_eq!(records[0], StringRecord::from(vec!["S-100", "1", "Widget", "3", "7.5"]));
        assert_eq!(sale.total(), 11.5);
    }

    #[test]
    fn test_line_item_from_record() -> Result<()> {
        let record = StringRecord::from(vec!["S-1", "4", "Bolt, steel", "12", "3.6"]);
        let item = SaleLineItem::from_record(&record, "sales.csv")?;
        assert_eq!(item.product_name, "Bolt, steel");
        assert_eq!(item.quantity_sold, 12);
        assert_eq!(item.total_price, 3.6);
        Ok(())
    }

    #[test]
    fn test_line_item_rejects_bad_total() {
        let record = StringRecord::from(vec!["S-1", "4", "Bolt", "12", "n/a"]);
        assert!(matches!(
            SaleLineItem::from_record(&record, "sales.csv"),
            Err(Error::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_empty_sale() {
        let sale = Sale::new("S-2");
        assert!(sale.is_empty());
        assert!(sale.to_records().is_empty());
        assert_eq!(sale.total(), 0.0);
    }
}
