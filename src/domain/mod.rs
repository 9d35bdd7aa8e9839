//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the stocking outcome and program enums (`Fish`, `Program`, `SortKey`)
//! - the parsed schedule (`Week`, `Calendar`, `StockingData`)
//! - next/last lookups and collection ordering (`query`)

pub mod query;
pub mod types;

pub use types::*;
