//! `stocker` library crate.
//!
//! The binary (`stocker`) is a thin wrapper around this library so that:
//!
//! - sheet parsing is testable without network access
//! - the CLI and the TUI share one fetch/sort pipeline
//! - the schedule layout for each program lives in one registry

pub mod app;
pub mod cli;
pub mod clock;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod report;
pub mod sheet;
pub mod tui;
