//! Schedule data access.
//!
//! - `fetch`: the range-fetch contract
//! - `sheets`: the Google Sheets HTTP implementation
//! - `stocking`: assemble calendars for a program

pub mod fetch;
pub mod sheets;
pub mod stocking;

#[cfg(test)]
pub(crate) mod fixtures;

pub use fetch::RangeFetcher;
pub use sheets::SheetsClient;
pub use stocking::{get, water_names};
