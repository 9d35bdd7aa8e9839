//! The cell-range fetch contract the parser consumes.

use crate::error::StockerError;
use crate::sheet::Cell;

/// Read a rectangular A1 range from a named sheet of a spreadsheet.
///
/// Rows come back in sheet order. Trailing empty cells of a row (and trailing
/// empty rows) may already be trimmed by the source.
pub trait RangeFetcher {
    fn fetch_range(
        &self,
        spreadsheet_id: &str,
        sheet_name: &str,
        a1_range: &str,
    ) -> Result<Vec<Vec<Cell>>, StockerError>;
}
