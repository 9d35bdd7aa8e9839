//! Canned schedule grids shaped like the published sheets.

use chrono::{TimeZone, Utc};
use serde_json::json;

use crate::clock::FixedClock;
use crate::data::fetch::testing::StaticFetcher;
use crate::domain::Program;
use crate::sheet::Cell;

pub fn row(cells: &[&str]) -> Vec<Cell> {
    cells.iter().map(|c| json!(c)).collect()
}

/// Drop trailing empty cells the way the Sheets API does.
fn trimmed(mut cells: Vec<&str>) -> Vec<&str> {
    while cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

/// Winter stock codes for LOWER SALT RIVER, one per dated week (27 weeks).
pub const SALT_RIVER_CODES: [&str; 27] = [
    "X", "", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X", "X", "", "X", "X", "X", "X", "X",
    "X", "X", "X", "X", "X", "X", "X", "",
];

/// Winter data row: name, then stock cells with the deleted column at index 5.
fn winter_row<'a>(name: &'a str, codes: &[&'a str]) -> Vec<Cell> {
    let mut cells = vec![name];
    cells.extend_from_slice(&codes[..5]);
    cells.push("");
    cells.extend_from_slice(&codes[5..]);
    row(&trimmed(cells))
}

pub fn winter_fetcher() -> StaticFetcher {
    let sheet = Program::Winter.sheet();
    let header = vec![
        row(&[
            "OCTOBER", "", "", "", "", "", "NOVEMBER", "", "", "", "DECEMBER", "", "", "", "",
            "JANUARY", "", "", "", "FEBRUARY", "", "", "", "MARCH",
        ]),
        row(&[
            "1", "7", "14", "21", "28", "", "4", "11", "18", "25", "2", "9", "16", "23", "30", "6",
            "13", "20", "27", "3", "10", "17", "24", "3", "10", "17", "24", "31",
        ]),
    ];

    let verde: Vec<&str> = (0..27).map(|i| if i % 4 == 0 { "X" } else { "" }).collect();
    let schedule = vec![
        row(&["RIVERS AND STREAMS"]),
        vec![],
        winter_row("LOWER SALT RIVER", &SALT_RIVER_CODES),
        winter_row("Verde River - Camp Verde", &verde),
        row(&["  ", "X", "X"]),
        row(&["BROKEN ROW"; 40]),
        row(&["Silver Creek", "C"]),
    ];

    StaticFetcher::default()
        .with(sheet.sheet_name, sheet.date_range, header)
        .with(sheet.sheet_name, sheet.schedule_range, schedule)
}

pub fn cfp_fetcher() -> StaticFetcher {
    let sheet = Program::Cfp.sheet();
    let header = vec![
        row(&["OCTOBER", "", "", "", "NOVEMBER", "", "", "", "DECEMBER"]),
        row(&[
            "7-11", "14-18", "21-25", "28-1", "4-8", "11-15", "18-22", "25-29", "2-6", "9-13",
            "16-20", "23-27", "30-3",
        ]),
    ];
    let schedule = vec![
        row(&["TEMPE - Kiwanis LAKE", "?", "", "C", "", "C", "", "", "", "", "X", "", "", "X"]),
        row(&["Tempe - Tempe Town Lake", "", "", "", "C"]),
        row(&["Payson - Green Valley Lakes", "", "X", "", "X", "", "", "X", "", "X", "", "X"]),
    ];

    StaticFetcher::default()
        .with(sheet.sheet_name, sheet.date_range, header)
        .with(sheet.sheet_name, sheet.schedule_range, schedule)
}

/// Mid-season instant used across tests (2025-01-15 12:00 UTC).
pub fn winter_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2025, 1, 15, 12, 0, 0).unwrap())
}

/// 2024-11-02 13:00 UTC.
pub fn cfp_clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 11, 2, 13, 0, 0).unwrap())
}
