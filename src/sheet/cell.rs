//! Raw cell decoding.

use serde_json::Value;

/// A raw cell as returned by the Sheets values endpoint.
pub type Cell = Value;

/// Trimmed text of a string cell; anything else reads as empty.
pub fn cell_text(cell: &Cell) -> &str {
    match cell {
        Value::String(s) => s.trim(),
        _ => "",
    }
}

/// `(column, text)` for every cell whose trimmed text is non-empty.
pub fn non_empty_cells(cells: &[Cell]) -> impl Iterator<Item = (usize, &str)> {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| (i, cell_text(cell)))
        .filter(|(_, text)| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_string_cells_are_empty() {
        assert_eq!(cell_text(&json!("  X ")), "X");
        assert_eq!(cell_text(&json!(7)), "");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!(true)), "");
    }

    #[test]
    fn non_empty_keeps_column_positions() {
        let row = vec![json!(""), json!("OCTOBER"), json!(" "), json!(12), json!("NOVEMBER")];
        let cells: Vec<_> = non_empty_cells(&row).collect();
        assert_eq!(cells, vec![(1, "OCTOBER"), (4, "NOVEMBER")]);
    }
}
