use super::{TableRenderer, column_widths, pad};

/// Aligned columns with a dashed rule under the header.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTable;

impl PlainTable {
    const GAP: &'static str = "  ";

    fn line(cells: impl Iterator<Item = String>) -> String {
        cells
            .collect::<Vec<_>>()
            .join(Self::GAP)
            .trim_end()
            .to_string()
    }
}

impl TableRenderer for PlainTable {
    fn render(&self, headers: &[&str], rows: &[Vec<String>]) -> String {
        let widths = column_widths(headers, rows);
        let rule_len = widths.iter().sum::<usize>() + Self::GAP.len() * widths.len().saturating_sub(1);

        let mut out = Self::line(headers.iter().zip(&widths).map(|(h, w)| pad(h, *w)));
        out.push('\n');
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');
        for row in rows {
            let cells = widths
                .iter()
                .enumerate()
                .map(|(i, w)| pad(row.get(i).map_or("", String::as_str), *w));
            out.push_str(&Self::line(cells));
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_table_layout() {
        let rows = vec![
            vec!["1".to_string(), "Widget".to_string(), "2.50".to_string()],
            vec!["12".to_string(), "Gear".to_string(), "10.00".to_string()],
        ];
        let rendered = PlainTable.render(&["ID", "Name", "Price"], &rows);
        let expected = "\
ID  Name    Price
-----------------
1   Widget  2.50
12  Gear    10.00
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_plain_table_without_rows() {
        let rendered = PlainTable.render(&["ID", "Name"], &[]);
        assert_eq!(rendered, "ID  Name\n--------\n");
    }
}
