//! Fetch a program's schedule and assemble one [`Calendar`] per water.

use chrono::Datelike;
use tracing::{info, warn};

use crate::clock::{Clock, regional_now};
use crate::data::fetch::RangeFetcher;
use crate::domain::{Calendar, Program, StockingData, Week};
use crate::error::StockerError;
use crate::sheet::{SheetDescriptor, initialize_calendar, map_row, water_name};

/// Stocking calendars for `program`.
///
/// With a non-empty `waters` list only those waters (matched
/// case-insensitively) are returned. Rows that fail to map are logged and
/// left out; only header or fetch problems fail the whole call.
pub fn get(
    fetcher: &dyn RangeFetcher,
    clock: &dyn Clock,
    program: Program,
    waters: &[String],
) -> Result<StockingData, StockerError> {
    let sheet = program.sheet();
    let wanted: Vec<String> = waters.iter().map(|w| w.to_lowercase()).collect();

    let current_year = regional_now(clock).year();
    let dates = load_dates(fetcher, sheet, current_year).map_err(|e| StockerError::Calendar(Box::new(e)))?;

    let rows = fetcher
        .fetch_range(sheet.spreadsheet_id, sheet.sheet_name, sheet.schedule_range)
        .map_err(|e| StockerError::Schedule(Box::new(e)))?;

    let mut calendars = Vec::new();
    for row in &rows {
        let Some(name) = water_name(row) else {
            continue;
        };
        if !wanted.is_empty() && !wanted.contains(&name.to_lowercase()) {
            continue;
        }

        match map_row(&row[1..], &dates, sheet.skip_column) {
            Ok(data) => calendars.push(Calendar {
                water_name: name.to_string(),
                data,
            }),
            Err(err) => warn!(water = name, error = %err, "error getting data for row"),
        }
    }

    info!(
        program = %program,
        weeks = dates.len(),
        waters = calendars.len(),
        "loaded stocking data"
    );
    Ok(StockingData(calendars))
}

/// Every water named on the program's schedule, in sheet order.
pub fn water_names(fetcher: &dyn RangeFetcher, program: Program) -> Result<Vec<String>, StockerError> {
    let sheet = program.sheet();
    let rows = fetcher
        .fetch_range(sheet.spreadsheet_id, sheet.sheet_name, sheet.schedule_range)
        .map_err(|e| StockerError::Schedule(Box::new(e)))?;

    Ok(rows
        .iter()
        .filter_map(|row| water_name(row))
        .map(str::to_string)
        .collect())
}

fn load_dates(
    fetcher: &dyn RangeFetcher,
    sheet: &SheetDescriptor,
    current_year: i32,
) -> Result<Vec<Week>, StockerError> {
    let header = fetcher.fetch_range(sheet.spreadsheet_id, sheet.sheet_name, sheet.date_range)?;
    initialize_calendar(&header, current_year)
}
