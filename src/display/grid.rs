use super::{TableRenderer, column_widths, pad};

/// Boxed grid: every cell framed, `=` rule under the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridTable;

impl GridTable {
    fn rule(widths: &[usize], fill: char) -> String {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&fill.to_string().repeat(width + 2));
            line.push('+');
        }
        line
    }

    fn row<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::from("|");
        for (cell, width) in cells.zip(widths) {
            line.push(' ');
            line.push_str(&pad(cell, *width));
            line.push_str(" |");
        }
        line
    }
}

impl TableRenderer for GridTable {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths = column_widths(headers, rows);
        let mut out = Vec::with_capacity(rows.len() * 2 + 3);

        out.push(Self::rule(&widths, '-'));
        out.push(Self::row(&widths, headers.iter().copied()));
        out.push(Self::rule(&widths, '='));
        for row in rows {
            let cells = (0..widths.len()).map(|i| row.get(i).map_or("", String::as_str));
            out.push(Self::row(&widths, cells));
            out.push(Self::rule(&widths, '-'));
        }
        if rows.is_empty() {
            out.pop();
            out.push(Self::rule(&widths, '-'));
        }

        let mut text = out.join("\n");
        text.push('\n');
        text
    }
}
