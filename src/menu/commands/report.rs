use crate::{
    errors::Result,
    menu::{Console, Shop},
};
use std::io::{BufRead, Write};

/// Prints the full sales history.
pub fn view<R: BufRead, W: Write>(shop: &Shop, console: &mut Console<R, W>) -> Result<()> {
    console.say(&format!("\n{}", shop.ledger.view(shop.renderer.as_ref())))
}
