//! Command-line parsing for the stocking schedule tool.
//!
//! The goal of this module is to keep **argument parsing** separate from
//! fetching and formatting; `app` turns these structs into work.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::data::sheets::DEFAULT_TIMEOUT;
use crate::domain::{Program, SortKey, parse_program};
use crate::report::DetailOptions;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "stocker",
    version,
    about = "Arizona Game & Fish stocking schedules, read from the published Google Sheets"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every subcommand.
#[derive(Debug, Args, Clone)]
pub struct GlobalArgs {
    /// Google Sheets API key (defaults to SHEETS_API_KEY from the environment or .env).
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Request timeout in seconds.
    #[arg(long, global = true, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout: u64,

    /// Log each sheet request and parse step.
    #[arg(long, global = true)]
    pub debug: bool,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print stocking calendars for a program.
    Get(GetArgs),
    /// List every water on a program's schedule.
    Waters(WatersArgs),
    /// Launch the interactive TUI.
    Tui(TuiArgs),
}

#[derive(Debug, Args, Clone)]
pub struct GetArgs {
    /// Stocking program (cfp, winter, springsummer).
    #[arg(short = 'p', long, value_parser = parse_program)]
    pub program: Program,

    /// Only these waters (case-insensitive; repeatable).
    #[arg(short = 'w', long = "water", value_name = "WATER")]
    pub waters: Vec<String>,

    /// Show the next stocking.
    #[arg(long)]
    pub next: bool,

    /// Show the most recent stocking.
    #[arg(long)]
    pub last: bool,

    /// List every week with something scheduled.
    #[arg(long)]
    pub all_stock: bool,

    /// List every week, including empty ones.
    #[arg(long)]
    pub all: bool,

    /// Order of waters in the output.
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,

    /// One line per water with its last and next stocking.
    #[arg(long, conflicts_with = "json")]
    pub summary: bool,

    /// Write the schedule as JSON to this file.
    #[arg(long, value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print the schedule as JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

impl GetArgs {
    pub fn detail_options(&self) -> DetailOptions {
        DetailOptions {
            show_all: self.all,
            show_all_stock: self.all_stock,
            next: self.next,
            last: self.last,
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct WatersArgs {
    /// Stocking program (cfp, winter, springsummer).
    #[arg(short = 'p', long, value_parser = parse_program, required_unless_present = "all")]
    pub program: Option<Program>,

    /// List the waters of every program.
    #[arg(long, conflicts_with = "program")]
    pub all: bool,
}

impl WatersArgs {
    pub fn programs(&self) -> Vec<Program> {
        match self.program {
            Some(program) if !self.all => vec![program],
            _ => Program::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct TuiArgs {
    /// Program to open first.
    #[arg(short = 'p', long, value_parser = parse_program, default_value = "cfp")]
    pub program: Program,

    /// Initial ordering of the water list.
    #[arg(long, value_enum, default_value_t = SortKey::Name)]
    pub sort: SortKey,
}
