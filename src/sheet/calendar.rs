//! Build the dated (but not yet stocked) week list from a sheet's two-row
//! date header.
//!
//! The header looks like:
//!
//! ```text
//! OCTOBER |   |    |    |    | NOVEMBER |    | ...
//! 1       | 7 | 14 | 21 | 28 | 4        | 11 | ...
//! ```
//!
//! Month labels only appear above the first week of each month, so the month
//! for a day cell is inferred by counting how often the day number drops
//! (`28 -> 4` means a new month began). Years are rarely written; when they are
//! missing they are guessed from the span of months and the current year.

use chrono::Month;
use tracing::debug;

use crate::domain::{Fish, Week};
use crate::error::StockerError;
use crate::sheet::cell::{Cell, non_empty_cells};
use crate::sheet::month::{ParsedMonth, parse_month};

/// Parse the month row and day row into one [`Week`] per day cell.
pub fn initialize_calendar(rows: &[Vec<Cell>], current_year: i32) -> Result<Vec<Week>, StockerError> {
    let [month_cells, day_cells] = rows else {
        return Err(StockerError::HeaderRowCount(rows.len()));
    };

    let months: Vec<ParsedMonth> = non_empty_cells(month_cells)
        .filter_map(|(_, text)| parse_month(text))
        .collect();

    let mut year = choose_starting_year(&months, current_year);
    let mut month_index = 0usize;
    let mut prev_day: Option<u32> = None;
    let mut weeks = Vec::new();

    for (_, text) in non_empty_cells(day_cells) {
        // CFP cells are week ranges like "7-11"; the start day is enough.
        let Some(day) = parse_day(text) else {
            continue;
        };

        if prev_day.is_some_and(|prev| day < prev) {
            month_index += 1;
            if is_new_year(&months, month_index) {
                year += 1;
            }
        }
        prev_day = Some(day);

        let Some(current) = months.get(month_index) else {
            return Err(StockerError::MonthOverrun {
                index: month_index,
                months: months.len(),
            });
        };

        weeks.push(Week {
            year: current.year.unwrap_or(year),
            month: current.month,
            day,
            stock: Fish::None,
        });
    }

    debug!(months = months.len(), weeks = weeks.len(), "initialized calendar");
    Ok(weeks)
}

/// Best guess for the year of the first month in the header.
///
/// An explicit year on the first month wins. Otherwise a header that runs
/// "backwards" (e.g. November through March) is assumed to start last year.
pub fn choose_starting_year(months: &[ParsedMonth], current_year: i32) -> i32 {
    if let Some(year) = months.first().and_then(|m| m.year) {
        return year;
    }

    let (Some(first), Some(last)) = (months.first(), months.last()) else {
        return current_year;
    };
    if months.len() < 2 {
        return current_year;
    }

    // Compare by month number: the header order itself is authoritative.
    if first.month.number_from_month() > last.month.number_from_month() {
        current_year - 1
    } else {
        current_year
    }
}

fn parse_day(text: &str) -> Option<u32> {
    text.split('-').next()?.trim().parse().ok()
}

fn is_new_year(months: &[ParsedMonth], index: usize) -> bool {
    if index == 0 {
        return false;
    }
    match (months.get(index - 1), months.get(index)) {
        (Some(prev), Some(cur)) => prev.month == Month::December && cur.month == Month::January,
        _ => false,
    }
}
