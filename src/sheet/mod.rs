//! Spreadsheet layout parsing.
//!
//! Turns the raw cell grids of a schedule into dated, stocked weeks:
//!
//! - `cell`: raw cell decoding
//! - `month`: month header labels
//! - `calendar`: the two-row date header
//! - `row`: one water's row of stock codes
//! - `registry`: the fixed location of each program's schedule

pub mod calendar;
pub mod cell;
pub mod month;
pub mod registry;
pub mod row;

pub use calendar::initialize_calendar;
pub use cell::{Cell, cell_text};
pub use registry::SheetDescriptor;
pub use row::{map_row, water_name};
