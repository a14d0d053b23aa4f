//! Table rendering for inventory and sales listings.
//!
//! The catalog and ledger hand a header and string rows to a `TableRenderer`
//! and never care which one is active. The renderer is chosen once at startup
//! from `display.table_style`.

mod grid;
mod plain;

pub use grid::GridTable;
pub use plain::PlainTable;

use crate::config::TableStyle;

/// Turns a header and rows of already-formatted cells into printable text.
pub trait TableRenderer {
    /// Renders `rows` under `headers`; every row has one cell per header.
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String;
}

/// Picks the renderer for the configured style.
#[must_use]
pub fn renderer_for(style: TableStyle) -> Box<dyn TableRenderer> {
    match style {
        TableStyle::Grid => Box::new(GridTable),
        TableStyle::Plain => Box::new(PlainTable),
    }
}

/// Display width of each column: the widest of the header and its cells.
fn column_widths(headers: &[&str], rows: &[Vec<String>]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            rows.iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.chars().count())
                .fold(header.chars().count(), usize::max)
        })
        .collect()
}

/// Left-aligns `text` in a field of `width` characters.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}
