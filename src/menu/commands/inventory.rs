//! Inventory menu commands - listing and adding products.

use crate::{
    entities::Product,
    errors::{Error, Result},
    menu::{Console, Shop},
};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::debug;

const INVALID_INPUT: &str = "Invalid input. Try again.";

/// Prints the current inventory.
pub fn view<R: BufRead, W: Write>(shop: &Shop, console: &mut Console<R, W>) -> Result<()> {
    console.say(&format!("\n{}", shop.inventory.view(shop.renderer.as_ref())))
}

/// Prompts for one field and parses it. `Ok(None)` means the answer was
/// missing or unparseable and the message has already been shown.
fn ask<T: FromStr, R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    label: &str,
) -> Result<Option<T>> {
    let Some(answer) = console.prompt(label)? else {
        return Ok(None);
    };
    if let Ok(value) = answer.trim().parse() {
        return Ok(Some(value));
    }
    debug!("Rejected {:?} for prompt {:?}", answer, label);
    console.say(INVALID_INPUT)?;
    Ok(None)
}

/// Prompts for a new product's fields and adds it to the catalog.
///
/// The first field that fails to parse abandons the add.
pub fn add<R: BufRead, W: Write>(shop: &mut Shop, console: &mut Console<R, W>) -> Result<()> {
    let Some(product_id) = ask::<u64, _, _>(console, "Enter Product ID: ")? else {
        return Ok(());
    };
    let Some(name) = console.prompt("Enter Product Name: ")? else {
        return Ok(());
    };
    let Some(price) = ask::<f64, _, _>(console, "Enter Product Price: ")? else {
        return Ok(());
    };
    let Some(quantity) = ask::<u32, _, _>(console, "Enter Quantity: ")? else {
        return Ok(());
    };

    match shop
        .inventory
        .add_product(Product::new(product_id, name, price, quantity))
    {
        Ok(_) => console.say("Product added successfully!"),
        Err(Error::ProductExists { .. }) => {
            console.say("Product ID already exists. Try updating the quantity instead.")
        }
        Err(e) if e.is_recoverable() => {
            debug!("Product rejected: {}", e);
            console.say(INVALID_INPUT)
        }
        Err(e) => Err(e),
    }
}
