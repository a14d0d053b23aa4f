//! Interactive text menu - reads operator choices and dispatches to the core.
//!
//! The loop works over any `BufRead`/`Write` pair, so the binary hands it
//! stdin/stdout while tests drive it with in-memory buffers. End of input at
//! the menu behaves like choosing Exit.

/// Handlers behind each menu entry.
pub mod commands;
/// Prompting and printing.
pub mod console;

pub use console::Console;

use crate::{
    config::AppConfig,
    core::{Inventory, SalesLedger},
    display::{self, TableRenderer},
    errors::Result,
};
use std::io::{BufRead, Write};
use tracing::info;

const TITLE: &str = "--- Small Shop Management System ---";

/// One entry of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// List every product
    ViewInventory,
    /// Add a new product
    AddProduct,
    /// Collect and commit a sale
    ProcessSale,
    /// List every sold line item
    SalesReport,
    /// Leave the program
    Exit,
}

impl MenuChoice {
    /// Entries in the order they are shown.
    pub const ALL: [Self; 5] = [
        Self::ViewInventory,
        Self::AddProduct,
        Self::ProcessSale,
        Self::SalesReport,
        Self::Exit,
    ];

    /// Parses the operator's answer ("1" to "5").
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::ViewInventory),
            "2" => Some(Self::AddProduct),
            "3" => Some(Self::ProcessSale),
            "4" => Some(Self::SalesReport),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }

    /// Text shown for this entry in the menu.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ViewInventory => "1. View Inventory",
            Self::AddProduct => "2. Add Product to Inventory",
            Self::ProcessSale => "3. Process a Sale",
            Self::SalesReport => "4. View Sales Report",
            Self::Exit => "5. Exit",
        }
    }
}

/// The running shop: catalog, ledger and the table renderer chosen at startup.
pub struct Shop {
    pub(crate) inventory: Inventory,
    pub(crate) ledger: SalesLedger,
    pub(crate) renderer: Box<dyn TableRenderer>,
}

impl Shop {
    /// Assembles a shop from already opened tables.
    pub fn new(inventory: Inventory, ledger: SalesLedger, renderer: Box<dyn TableRenderer>) -> Self {
        Self {
            inventory,
            ledger,
            renderer,
        }
    }

    /// Opens both tables and picks the renderer named in `config`.
    ///
    /// # Errors
    /// Returns an error if either table cannot be loaded.
    pub fn open(config: &AppConfig) -> Result<Self> {
        let inventory = Inventory::open(&config.storage)?;
        let ledger = SalesLedger::open(&config.storage)?;
        info!(
            "Shop opened with {} products and {} sale line items",
            inventory.len(),
            ledger.len()
        );
        Ok(Self::new(
            inventory,
            ledger,
            display::renderer_for(config.display.table_style),
        ))
    }

    /// The product catalog.
    #[must_use]
    pub const fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// The sales history.
    #[must_use]
    pub const fn ledger(&self) -> &SalesLedger {
        &self.ledger
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// # Errors
    /// Returns an error on console I/O failure or when persisting the tables
    /// fails; operator mistakes are reported and never end the loop.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> Result<()> {
        let mut console = Console::new(input, output);
        loop {
            console.say(&format!("\n{TITLE}"))?;
            for choice in MenuChoice::ALL {
                console.say(choice.label())?;
            }

            let Some(answer) = console.prompt("Enter your choice: ")? else {
                console.say("Exiting system. Goodbye!")?;
                return Ok(());
            };

            match MenuChoice::parse(&answer) {
                Some(MenuChoice::ViewInventory) => commands::inventory::view(self, &mut console)?,
                Some(MenuChoice::AddProduct) => commands::inventory::add(self, &mut console)?,
                Some(MenuChoice::ProcessSale) => commands::sale::process(self, &mut console)?,
                Some(MenuChoice::SalesReport) => commands::report::view(self, &mut console)?,
                Some(MenuChoice::Exit) => {
                    console.say("Exiting system. Goodbye!")?;
                    return Ok(());
                }
                None => console.say("Invalid choice. Please try again.")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::config::{DisplayConfig, TableStyle};
    use crate::test_utils::*;
    use std::fs;
    use std::io::Cursor;

    fn run_script(shop: &mut Shop, script: &str) -> Result<String> {
        let mut output = Vec::new();
        shop.run(Cursor::new(script.to_string()), &mut output)?;
        Ok(String::from_utf8(output).unwrap())
    }

    fn plain_config(dir: &std::path::Path) -> AppConfig {
        AppConfig {
            storage: crate::config::StorageConfig::in_dir(dir),
            display: DisplayConfig {
                table_style: TableStyle::Plain,
            },
        }
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse(" 3 "), Some(MenuChoice::ProcessSale));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_exit_and_invalid_choice() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let mut shop = Shop::open(&plain_config(dir.path()))?;
        let output = run_script(&mut shop, "9\n5\n")?;

        assert!(output.contains(TITLE));
        assert!(output.contains("Invalid choice. Please try again."));
        assert!(output.ends_with("Exiting system. Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn test_end_of_input_exits() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let mut shop = Shop::open(&plain_config(dir.path()))?;
        let output = run_script(&mut shop, "")?;
        assert!(output.ends_with("Exiting system. Goodbye!\n"));
        Ok(())
    }

    #[test]
    fn test_add_sell_and_report_session() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let config = plain_config(dir.path());
        let mut shop = Shop::open(&config)?;

        let script = "\
1
2
1
Widget
2.50
10
2
1
Again
1
1
3
S-1
999
1
15
1
3
done
4
5
";
        let output = run_script(&mut shop, script)?;

        assert!(output.contains("No products in inventory."));
        assert!(output.contains("Product added successfully!"));
        assert!(output.contains("Product ID already exists. Try updating the quantity instead."));
        assert!(output.contains("Invalid Product ID. Try again."));
        assert!(output.contains("Enter quantity for Widget: "));
        assert!(output.contains("Not enough stock available."));
        assert!(output.contains("Sale S-1 recorded successfully!"));
        assert!(output.contains("Sales Report:"));
        assert!(output.contains("S-1      1           Widget        3              7.50"));

        assert_eq!(shop.inventory().get(1).unwrap().quantity, 7);
        let reloaded = Shop::open(&config)?;
        assert_eq!(reloaded.inventory().get(1).unwrap().quantity, 7);
        assert_eq!(reloaded.ledger().len(), 1);
        Ok(())
    }

    #[test]
    fn test_add_product_invalid_input() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let config = plain_config(dir.path());
        let mut shop = Shop::open(&config)?;

        let output = run_script(&mut shop, "2\nabc\n2\n4\nLamp\nfree\n2\n5\nBulb\n-1\n3\n5\n")?;
        assert_eq!(output.matches("Invalid input. Try again.").count(), 3);
        assert!(shop.inventory().is_empty());
        assert_eq!(output.matches("Enter Product Name: ").count(), 2);
        Ok(())
    }

    #[test]
    fn test_sale_without_items_is_canceled() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let config = plain_config(dir.path());
        seed_inventory(&config.storage, &[widget()])?;
        let inventory_before = fs::read(&config.storage.inventory_file)?;
        let mut shop = Shop::open(&config)?;
        let sales_before = fs::read(&config.storage.sales_file)?;

        let output = run_script(&mut shop, "3\nS-2\n1\n0\nxyz\nDONE\n5\n")?;
        assert!(output.contains("Invalid quantity. Try again."));
        assert!(output.contains("Invalid Product ID. Try again."));
        assert!(output.contains("No items were sold. Sale canceled."));
        assert_eq!(fs::read(&config.storage.inventory_file)?, inventory_before);
        assert_eq!(fs::read(&config.storage.sales_file)?, sales_before);
        Ok(())
    }

    #[test]
    fn test_end_of_input_during_sale_commits_accepted_items() -> Result<()> {
        let (dir, _) = temp_storage()?;
        let config = plain_config(dir.path());
        seed_inventory(&config.storage, &[widget()])?;
        let mut shop = Shop::open(&config)?;

        let output = run_script(&mut shop, "3\nS-3\n1\n2\n")?;
        assert!(output.contains("Sale S-3 recorded successfully!"));
        assert!(output.ends_with("Exiting system. Goodbye!\n"));
        assert_eq!(SalesLedger::open(&config.storage)?.len(), 1);
        Ok(())
    }
}
