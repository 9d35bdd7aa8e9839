//! Shared domain types.
//!
//! These mirror the shape of a published stocking schedule:
//!
//! - a [`Program`] selects one of the fixed spreadsheets
//! - each water's row becomes a [`Calendar`] of [`Week`]s
//! - each week carries the [`Fish`] stocked that week (if any)

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, Month, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;

use crate::clock::regional_offset;
use crate::error::StockerError;

/// Offset of the publisher's region from UTC, in seconds (UTC-07:00, no DST).
pub const REGIONAL_OFFSET_SECS: i32 = -7 * 3600;

/// Stocking outcome for one water in one week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Fish {
    Catfish,
    Trout,
    /// Nothing scheduled (empty cell).
    #[default]
    None,
    /// A code the schedule uses that we don't recognize.
    Unknown,
}

impl Fish {
    /// Decode a trimmed stock code.
    pub fn parse(code: &str) -> Fish {
        match code.to_ascii_lowercase().as_str() {
            "x" | "t" => Fish::Trout,
            "c" => Fish::Catfish,
            "" => Fish::None,
            _ => Fish::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Fish::Catfish => "Catfish",
            Fish::Trout => "Trout",
            Fish::None => "None",
            Fish::Unknown => "Unknown",
        }
    }

    /// True for species we know are being stocked.
    pub fn is_stocked(self) -> bool {
        matches!(self, Fish::Catfish | Fish::Trout)
    }
}

impl fmt::Display for Fish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stocking program. Each one is published as its own spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Program {
    /// Community Fishing Program.
    Cfp,
    Winter,
    /// Spring and summer share one schedule.
    SpringSummer,
}

impl Program {
    pub const ALL: [Program; 3] = [Program::Cfp, Program::Winter, Program::SpringSummer];

    pub fn as_str(self) -> &'static str {
        match self {
            Program::Cfp => "cfp",
            Program::Winter => "winter",
            Program::SpringSummer => "springsummer",
        }
    }

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Program::Cfp => "Community Fishing Program",
            Program::Winter => "Winter",
            Program::SpringSummer => "Spring/Summer",
        }
    }

    pub fn next(self) -> Program {
        match self {
            Program::Cfp => Program::Winter,
            Program::Winter => Program::SpringSummer,
            Program::SpringSummer => Program::Cfp,
        }
    }

    pub fn prev(self) -> Program {
        match self {
            Program::Cfp => Program::SpringSummer,
            Program::Winter => Program::Cfp,
            Program::SpringSummer => Program::Winter,
        }
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Program {
    type Err = StockerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_program(s)
    }
}

/// Parse a program name, case-insensitively.
///
/// `spring` and `summer` are aliases for the combined spring/summer program.
pub fn parse_program(text: &str) -> Result<Program, StockerError> {
    match text.to_lowercase().as_str() {
        "cfp" => Ok(Program::Cfp),
        "winter" => Ok(Program::Winter),
        "springsummer" | "spring" | "summer" => Ok(Program::SpringSummer),
        _ => Err(StockerError::UnknownProgram(text.to_string())),
    }
}

/// One dated cell of the schedule.
///
/// `Week::default()` is the "no data" sentinel returned by next/last lookups
/// when nothing qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Week {
    pub year: i32,
    pub month: Month,
    pub day: u32,
    pub stock: Fish,
}

impl Default for Week {
    fn default() -> Self {
        Self {
            year: 0,
            month: Month::January,
            day: 0,
            stock: Fish::None,
        }
    }
}

impl Week {
    pub fn is_zero(&self) -> bool {
        self.year == 0 && self.day == 0
    }

    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), self.day)
    }

    /// Midnight of this week's date in the regional offset.
    ///
    /// `None` for the sentinel or a day that doesn't exist in its month.
    pub fn time(&self) -> Option<DateTime<FixedOffset>> {
        if self.is_zero() {
            return None;
        }
        self.date()?
            .and_hms_opt(0, 0, 0)?
            .and_local_timezone(regional_offset())
            .single()
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("No Data");
        }
        write!(f, "{} {} {}: \"{}\"", self.year, self.month.name(), self.day, self.stock)
    }
}

/// Every week on the schedule for one water, in spreadsheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    pub water_name: String,
    pub data: Vec<Week>,
}

impl fmt::Display for Calendar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::report::format_calendar(self, false))
    }
}

/// Calendars for every requested water of one program, in sheet row order
/// until explicitly sorted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockingData(pub Vec<Calendar>);

impl Deref for StockingData {
    type Target = Vec<Calendar>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for StockingData {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a StockingData {
    type Item = &'a Calendar;
    type IntoIter = std::slice::Iter<'a, Calendar>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Ordering applied to a [`StockingData`] collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SortKey {
    /// Alphabetical by water name.
    #[default]
    Name,
    /// Soonest upcoming stocking first.
    Next,
    /// Most recently stocked first.
    Last,
}

impl SortKey {
    pub fn cycle(self) -> SortKey {
        match self {
            SortKey::Name => SortKey::Next,
            SortKey::Next => SortKey::Last,
            SortKey::Last => SortKey::Name,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Next => "next",
            SortKey::Last => "last",
        }
    }
}
