//! Inventory catalog - Handles all product-related operations.
//!
//! The whole catalog is loaded into memory when opened and written back in full
//! after every mutation. Products are keyed by their id, which is unique, and
//! are never removed. Stock only goes down through `decrement`, which refuses
//! to take a quantity below zero.

use crate::{
    config::StorageConfig,
    display::TableRenderer,
    entities::Product,
    errors::{Error, Result},
    store::RecordStore,
};
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, warn};

/// In-memory product catalog backed by the inventory table.
#[derive(Debug)]
pub struct Inventory {
    store: RecordStore,
    products: BTreeMap<u64, Product>,
}

impl Inventory {
    /// Opens the inventory table named in `config`, creating it if absent.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or created, or if any row
    /// is malformed.
    pub fn open(config: &StorageConfig) -> Result<Self> {
        Self::from_store(RecordStore::new(&config.inventory_file, Product::HEADER))
    }

    /// Loads every product held by `store`.
    ///
    /// When the same id appears on several rows the last one wins.
    ///
    /// # Errors
    /// Returns an error if the table cannot be loaded or a row fails to parse.
    #[instrument(skip(store), fields(path = %store.display_path()))]
    pub fn from_store(store: RecordStore) -> Result<Self> {
        let path = store.display_path();
        let mut products = BTreeMap::new();
        for record in store.load()? {
            let product = Product::from_record(&record, &path)?;
            if let Some(previous) = products.insert(product.product_id, product) {
                warn!(
                    "Duplicate product ID {} in {}, keeping the later row",
                    previous.product_id, path
                );
            }
        }
        debug!("Loaded {} products", products.len());
        Ok(Self { store, products })
    }

    /// Looks up a product by id.
    #[must_use]
    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.products.get(&product_id)
    }

    /// Whether a product with this id exists.
    #[must_use]
    pub fn contains(&self, product_id: u64) -> bool {
        self.products.contains_key(&product_id)
    }

    /// All products in ascending id order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog holds no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Adds a new product and immediately rewrites the inventory table.
    ///
    /// The name is stored exactly as given.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A product with the same id already exists (`Error::ProductExists`)
    /// - The name is empty or whitespace-only
    /// - The price is negative or not finite
    /// - The inventory table cannot be written
    #[instrument(skip(self, product), fields(product_id = product.product_id))]
    pub fn add_product(&mut self, product: Product) -> Result<&Product> {
        if self.contains(product.product_id) {
            return Err(Error::ProductExists {
                product_id: product.product_id,
            });
        }

        if product.name.trim().is_empty() {
            return Err(Error::InvalidInput {
                message: "Product name cannot be empty".to_string(),
            });
        }

        if !product.price.is_finite() || product.price < 0.0 {
            return Err(Error::InvalidPrice {
                price: product.price,
            });
        }

        let product_id = product.product_id;
        info!(
            "Adding product '{}' (ID: {}) with price {} and quantity {}",
            product.name, product_id, product.price, product.quantity
        );
        self.products.insert(product_id, product);
        self.persist()?;
        Ok(&self.products[&product_id])
    }

    /// Takes `quantity` units of a product out of stock, in memory only.
    ///
    /// Callers persist with [`Inventory::persist`] once they are done.
    ///
    /// # Errors
    /// Returns `Error::ProductNotFound` for an unknown id and
    /// `Error::InsufficientStock` if fewer than `quantity` units are on hand;
    /// the product is left untouched in both cases.
    pub fn decrement(&mut self, product_id: u64, quantity: u32) -> Result<&Product> {
        let product = self
            .products
            .get_mut(&product_id)
            .ok_or(Error::ProductNotFound { product_id })?;

        let remaining = product
            .quantity
            .checked_sub(quantity)
            .ok_or(Error::InsufficientStock {
                product_id,
                requested: quantity,
                available: product.quantity,
            })?;
        product.quantity = remaining;
        debug!(
            "Product {} stock reduced by {} to {}",
            product_id, quantity, remaining
        );
        Ok(product)
    }

    /// Writes the full in-memory catalog back to the inventory table.
    ///
    /// # Errors
    /// Returns an error if the table cannot be written.
    pub fn persist(&self) -> Result<()> {
        let rows: Vec<_> = self.products.values().map(Product::to_record).collect();
        self.store.overwrite(&rows)
    }

    /// Formatted inventory listing, or a notice when there are no products.
    pub fn view(&self, renderer: &dyn TableRenderer) -> String {
        if self.is_empty() {
            return "No products in inventory.".to_string();
        }

        let rows: Vec<Vec<String>> = self
            .products()
            .map(|p| {
                vec![
                    p.product_id.to_string(),
                    p.name.clone(),
                    format!("{:.2}", p.price),
                    p.quantity.to_string(),
                ]
            })
            .collect();
        format!(
            "Inventory List:\n{}",
            renderer.render(&["ID", "Name", "Price", "Quantity"], &rows)
        )
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::display::PlainTable;
    use crate::test_utils::*;
    use std::fs;

    #[test]
    fn test_add_product_survives_reload() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = Inventory::open(&config)?;
        inventory.add_product(Product::new(1, "Widget", 2.5, 10))?;
        inventory.add_product(Product::new(42, "Bolt, steel", 0.3, 500))?;

        let reloaded = Inventory::open(&config)?;
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.get(1), Some(&Product::new(1, "Widget", 2.5, 10)));
        assert_eq!(
            reloaded.get(42),
            Some(&Product::new(42, "Bolt, steel", 0.3, 500))
        );
        Ok(())
    }

    #[test]
    fn test_add_duplicate_id_changes_nothing() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = seed_inventory(&config, &[widget()])?;
        let before = fs::read(&config.inventory_file)?;

        let result = inventory.add_product(Product::new(1, "Other", 9.99, 1));
        assert!(matches!(result, Err(Error::ProductExists { product_id: 1 })));

        assert_eq!(inventory.get(1), Some(&widget()));
        assert_eq!(fs::read(&config.inventory_file)?, before);
        Ok(())
    }

    #[test]
    fn test_add_product_validation() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = Inventory::open(&config)?;

        let result = inventory.add_product(Product::new(1, "   ", 1.0, 1));
        assert!(matches!(result, Err(Error::InvalidInput { .. })));

        let result = inventory.add_product(Product::new(1, "Widget", -1.0, 1));
        assert!(matches!(result, Err(Error::InvalidPrice { price: -1.0 })));

        let result = inventory.add_product(Product::new(1, "Widget", f64::NAN, 1));
        assert!(matches!(result, Err(Error::InvalidPrice { .. })));

        assert!(inventory.is_empty());
        Ok(())
    }

    #[test]
    fn test_add_product_keeps_padded_name_across_reload() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = Inventory::open(&config)?;
        let added = inventory.add_product(Product::new(3, " Lamp  ", 12.0, 2))?;
        assert_eq!(added.name, " Lamp  ");

        let reloaded = Inventory::open(&config)?;
        assert_eq!(reloaded.get(3), Some(&Product::new(3, " Lamp  ", 12.0, 2)));
        Ok(())
    }

    #[test]
    fn test_decrement_checks_stock() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = seed_inventory(&config, &[widget()])?;

        assert_eq!(inventory.decrement(1, 3)?.quantity, 7);

        let result = inventory.decrement(1, 15);
        assert!(matches!(
            result,
            Err(Error::InsufficientStock {
                product_id: 1,
                requested: 15,
                available: 7
            })
        ));
        assert_eq!(inventory.get(1).unwrap().quantity, 7);

        assert!(matches!(
            inventory.decrement(999, 1),
            Err(Error::ProductNotFound { product_id: 999 })
        ));
        Ok(())
    }

    #[test]
    fn test_decrement_is_not_persisted_until_asked() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = seed_inventory(&config, &[widget()])?;
        inventory.decrement(1, 10)?;

        assert_eq!(Inventory::open(&config)?.get(1).unwrap().quantity, 10);
        inventory.persist()?;
        assert_eq!(Inventory::open(&config)?.get(1).unwrap().quantity, 0);
        Ok(())
    }

    #[test]
    fn test_persist_then_load_same_products() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let products = vec![
            Product::new(5, "Gear", 10.0, 1),
            Product::new(1, "Widget", 2.5, 10),
            Product::new(3, "Spring \"XL\"", 0.125, 0),
        ];
        let inventory = seed_inventory(&config, &products)?;
        inventory.persist()?;

        let reloaded = Inventory::open(&config)?;
        let mut expected = products.clone();
        expected.sort_by_key(|p| p.product_id);
        assert_eq!(reloaded.products().cloned().collect::<Vec<_>>(), expected);
        Ok(())
    }

    #[test]
    fn test_open_rejects_malformed_row() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        fs::write(
            &config.inventory_file,
            "product_id,product_name,price,quantity\n1,Widget,cheap,10\n",
        )?;
        let err = Inventory::open(&config).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { line: 2, .. }));
        Ok(())
    }

    #[test]
    fn test_open_keeps_last_duplicate() -> Result<()> {
        init_test_tracing();
        let (_dir, config) = temp_storage()?;
        fs::write(
            &config.inventory_file,
            "product_id,product_name,price,quantity\n1,Old,1.0,1\n1,New,2.0,2\n",
        )?;
        let inventory = Inventory::open(&config)?;
        assert_eq!(inventory.len(), 1);
        assert_eq!(inventory.get(1).unwrap().name, "New");
        Ok(())
    }

    #[test]
    fn test_view() -> Result<()> {
        let (_dir, config) = temp_storage()?;
        let mut inventory = Inventory::open(&config)?;
        assert_eq!(inventory.view(&PlainTable), "No products in inventory.");

        inventory.add_product(widget())?;
        let listing = inventory.view(&PlainTable);
        assert!(listing.starts_with("Inventory List:\n"));
        assert!(listing.contains("1   Widget  2.50   10"));
        Ok(())
    }
}
