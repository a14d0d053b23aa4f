//! Sale menu command - walks the operator through one multi-item sale.

use crate::{
    core::{SaleOutcome, SaleSession, sale::is_terminator},
    errors::{Error, Result},
    menu::{Console, Shop},
};
use std::io::{BufRead, Write};
use tracing::debug;

/// Operator-facing text for a rejected line item, or the error back if it is fatal.
fn rejection_message(error: Error) -> Result<String> {
    match error {
        Error::InvalidProductId { .. } | Error::ProductNotFound { .. } => {
            Ok("Invalid Product ID. Try again.".to_string())
        }
        Error::InvalidQuantity { .. } => Ok("Invalid quantity. Try again.".to_string()),
        Error::InsufficientStock { .. } => Ok("Not enough stock available.".to_string()),
        e if e.is_recoverable() => Ok(format!("{e}. Try again.")),
        e => Err(e),
    }
}

/// Collects line items until the operator types `done` (or input ends), then
/// commits or cancels the sale.
pub fn process<R: BufRead, W: Write>(shop: &mut Shop, console: &mut Console<R, W>) -> Result<()> {
    let Some(sale_id) = console.prompt("Enter Sale ID: ")? else {
        return Ok(());
    };
    let mut session = SaleSession::begin(&mut shop.inventory, &sale_id);

    loop {
        let Some(input) = console.prompt("Enter Product ID to sell (or 'done' to finish): ")?
        else {
            break;
        };
        if is_terminator(&input) {
            break;
        }

        let (product_id, name) = match session.select_product(&input) {
            Ok(product) => (product.product_id, product.name.clone()),
            Err(e) => {
                debug!("Line item rejected: {}", e);
                console.say(&rejection_message(e)?)?;
                continue;
            }
        };

        let Some(quantity) = console.prompt(&format!("Enter quantity for {name}: "))? else {
            break;
        };
        if let Err(e) = session.add_item(product_id, &quantity) {
            debug!("Line item rejected: {}", e);
            console.say(&rejection_message(e)?)?;
        }
    }

    match session.finish(&mut shop.ledger)? {
        SaleOutcome::Committed { sale_id, .. } => {
            console.say(&format!("Sale {sale_id} recorded successfully!"))
        }
        SaleOutcome::Canceled { .. } => console.say("No items were sold. Sale canceled."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_messages() -> Result<()> {
        assert_eq!(
            rejection_message(Error::InvalidProductId {
                input: "x".to_string()
            })?,
            "Invalid Product ID. Try again."
        );
        assert_eq!(
            rejection_message(Error::InsufficientStock {
                product_id: 1,
                requested: 15,
                available: 7
            })?,
            "Not enough stock available."
        );
        assert!(rejection_message(Error::from(std::io::Error::other("boom"))).is_err());
        Ok(())
    }
}
