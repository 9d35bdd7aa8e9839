//! Input/output helpers.
//!
//! - stocking schedule JSON export (`export`)

pub mod export;

pub use export::*;
