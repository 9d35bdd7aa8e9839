//! Map one schedule row onto the initialized calendar.

use crate::domain::{Fish, Week};
use crate::error::StockerError;
use crate::sheet::cell::{Cell, cell_text};

/// Water name of a data row, or `None` for headers, separators and blanks.
pub fn water_name(row: &[Cell]) -> Option<&str> {
    if row.len() < 2 {
        return None;
    }
    let name = cell_text(&row[0]);
    (!name.is_empty()).then_some(name)
}

/// Pair each stock cell (everything after the name) with its date.
///
/// The sheet API trims trailing empty cells, so short rows are padded before
/// the length check. `skip_column` is a deleted column that still occupies a
/// position in the raw data; it never consumes a date.
pub fn map_row(cells: &[Cell], dates: &[Week], skip_column: Option<usize>) -> Result<Vec<Week>, StockerError> {
    let skipped = usize::from(skip_column.is_some());

    let target = dates.len() + skipped;
    let padded_len = cells.len().max(target);
    if padded_len - skipped != dates.len() {
        return Err(StockerError::RowLengthMismatch {
            dates: dates.len(),
            cells: padded_len,
        });
    }

    let empty = Cell::Null;
    let stocks = cells
        .iter()
        .chain(std::iter::repeat(&empty))
        .take(padded_len)
        .enumerate()
        .filter(|(i, _)| Some(*i) != skip_column)
        .map(|(_, cell)| Fish::parse(cell_text(cell)));

    let weeks = dates
        .iter()
        .zip(stocks)
        .map(|(date, stock)| Week { stock, ..*date })
        .collect();

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Month;
    use serde_json::json;

    fn dates(n: u32) -> Vec<Week> {
        (1..=n)
            .map(|day| Week {
                year: 2024,
                month: Month::October,
                day,
                stock: Fish::None,
            })
            .collect()
    }

    fn row(cells: &[&str]) -> Vec<Cell> {
        cells.iter().map(|c| json!(c)).collect()
    }

    #[test]
    fn skips_non_data_rows() {
        assert_eq!(water_name(&row(&["LAKES"])), None);
        assert_eq!(water_name(&row(&["   ", "X"])), None);
        assert_eq!(water_name(&[json!(3), json!("X")]), None);
        assert_eq!(water_name(&row(&[" LOWER SALT RIVER ", "X"])), Some("LOWER SALT RIVER"));
    }

    #[test]
    fn trailing_cells_are_padded() {
        let weeks = map_row(&row(&["X", "", "c"]), &dates(5), None).unwrap();
        let stock: Vec<_> = weeks.iter().map(|w| w.stock).collect();
        assert_eq!(
            stock,
            vec![Fish::Trout, Fish::None, Fish::Catfish, Fish::None, Fish::None]
        );
        assert_eq!(weeks[4].day, 5);
    }

    #[test]
    fn skip_column_does_not_consume_a_date() {
        // Column 2 is the deleted column; its content is ignored.
        let weeks = map_row(&row(&["X", "", "junk", "X"]), &dates(3), Some(2)).unwrap();
        let got: Vec<_> = weeks.iter().map(|w| (w.day, w.stock)).collect();
        assert_eq!(got, vec![(1, Fish::Trout), (2, Fish::None), (3, Fish::Trout)]);
    }

    #[test]
    fn short_row_with_skip_column_is_padded() {
        // Deleted column plus four of five dates: one cell short.
        let cells = row(&["X", "", "junk", "X", "c"]);
        let weeks = map_row(&cells, &dates(5), Some(2)).unwrap();
        let got: Vec<_> = weeks.iter().map(|w| w.stock).collect();
        assert_eq!(
            got,
            vec![Fish::Trout, Fish::None, Fish::Trout, Fish::Catfish, Fish::None]
        );
    }

    #[test]
    fn deleted_column_cell_only_fits_with_a_skip_column() {
        // Every date plus the deleted column; without a skip it overflows.
        let cells = row(&["X", "X", "", "X", "X", "X"]);
        assert_eq!(map_row(&cells, &dates(5), Some(2)).unwrap().len(), 5);

        let err = map_row(&cells, &dates(5), None).unwrap_err();
        assert!(matches!(err, StockerError::RowLengthMismatch { dates: 5, cells: 6 }));
    }

    #[test]
    fn overlong_rows_are_rejected() {
        let err = map_row(&row(&["X"; 8]), &dates(5), Some(5)).unwrap_err();
        assert!(matches!(err, StockerError::RowLengthMismatch { dates: 5, cells: 8 }));
    }

    #[test]
    fn unknown_codes_are_kept() {
        let weeks = map_row(&row(&["?", "t"]), &dates(2), None).unwrap();
        assert_eq!(weeks[0].stock, Fish::Unknown);
        assert_eq!(weeks[1].stock, Fish::Trout);
    }
}
