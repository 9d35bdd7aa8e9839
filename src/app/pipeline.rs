//! Shared fetch-and-sort logic used by both CLI and TUI front-ends.
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use std::time::Duration;

use crate::cli::GlobalArgs;
use crate::clock::Clock;
use crate::data::{RangeFetcher, SheetsClient};
use crate::domain::{Program, SortKey, StockingData};
use crate::error::AppError;

/// Sheets client configured from the global flags (API key, timeout).
pub fn sheets_client(global: &GlobalArgs) -> Result<SheetsClient, AppError> {
    let timeout = Duration::from_secs(global.timeout.max(1));
    Ok(SheetsClient::from_env(global.api_key.clone(), timeout)?)
}

/// Fetch a program's calendars, optionally filtered by water, in `sort` order.
pub fn load_schedule(
    fetcher: &dyn RangeFetcher,
    clock: &dyn Clock,
    program: Program,
    waters: &[String],
    sort: SortKey,
) -> Result<StockingData, AppError> {
    let mut data = crate::data::get(fetcher, clock, program, waters)?;
    data.sort(sort, clock);
    Ok(data)
}
