//! Formatted terminal output for stocking calendars.
//!
//! We keep formatting code in one place so the parsing code stays free of
//! presentation concerns and output changes are localized.

use chrono::{DateTime, FixedOffset};

use crate::clock::{Clock, regional_now};
use crate::domain::{Calendar, Fish, StockingData, Week};

/// Which parts of a calendar [`detail_format`] prints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOptions {
    /// Every week, including weeks with nothing scheduled.
    pub show_all: bool,
    /// Only weeks with something scheduled.
    pub show_all_stock: bool,
    pub next: bool,
    pub last: bool,
}

impl DetailOptions {
    fn is_empty(&self) -> bool {
        !(self.show_all || self.show_all_stock || self.next || self.last)
    }
}

/// One line per week. With `hide_empty`, weeks with nothing scheduled are left out.
pub fn format_calendar(cal: &Calendar, hide_empty: bool) -> String {
    cal.data
        .iter()
        .filter(|w| !(hide_empty && w.stock == Fish::None))
        .map(Week::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn detail_format(cal: &Calendar, opts: DetailOptions, clock: &dyn Clock) -> String {
    if opts.is_empty() {
        return format_calendar(cal, false);
    }

    let mut out = String::new();
    if opts.show_all {
        out.push_str(&format_calendar(cal, false));
        out.push('\n');
    } else if opts.show_all_stock {
        out.push_str(&format_calendar(cal, true));
        out.push('\n');
    }

    if opts.last {
        out.push_str(&format!("Last: {}\n", cal.last(clock)));
    }
    if opts.next {
        out.push_str(&format!("Next: {}", cal.next(clock)));
    }

    out
}

/// Every calendar as its water name followed by its detail listing.
pub fn format_stocking(data: &StockingData, opts: DetailOptions, clock: &dyn Clock) -> String {
    let mut out = String::new();
    for cal in data {
        out.push_str(&cal.water_name);
        out.push('\n');
        out.push_str(&detail_format(cal, opts, clock));
        if !out.ends_with('\n') {
            out.push('\n');
        }
    }
    out
}

/// Distance from `now` to the week, e.g. `"in 3 days"` or `"2 weeks ago"`.
pub fn relative_time(week: &Week, now: DateTime<FixedOffset>) -> String {
    let Some(date) = week.date().filter(|_| !week.is_zero()) else {
        return "No Data".to_string();
    };

    let days = (date - now.date_naive()).num_days();
    match days {
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        -1 => "yesterday".to_string(),
        d if d.abs() < 14 => span(d, d.abs(), "day"),
        d => span(d, d.abs() / 7, "week"),
    }
}

fn span(signed_days: i64, n: i64, unit: &str) -> String {
    let plural = if n == 1 { "" } else { "s" };
    if signed_days > 0 {
        format!("in {n} {unit}{plural}")
    } else {
        format!("{n} {unit}{plural} ago")
    }
}

/// Compact `"Oct 21 Catfish (12 days ago)"` label used by the summary views.
pub fn short_label(week: &Week, now: DateTime<FixedOffset>) -> String {
    match week.date().filter(|_| !week.is_zero()) {
        Some(date) => format!(
            "{} {} ({})",
            date.format("%b %-d"),
            week.stock,
            relative_time(week, now)
        ),
        None => "No Data".to_string(),
    }
}

/// One line per water with its last and next stocking.
pub fn format_summary_table(data: &StockingData, clock: &dyn Clock) -> String {
    let now = regional_now(clock);
    let name_width = data
        .iter()
        .map(|c| c.water_name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Water".len());

    let rows: Vec<(String, String, String)> = data
        .iter()
        .map(|cal| {
            (
                cal.water_name.clone(),
                short_label(&cal.last_before(now), now),
                short_label(&cal.next_after(now), now),
            )
        })
        .collect();
    let last_width = rows
        .iter()
        .map(|(_, last, _)| last.chars().count())
        .max()
        .unwrap_or(0)
        .max("Last".len());

    let mut out = String::new();
    out.push_str(&format!(
        "{:<name_width$}  {:<last_width$}  Next\n",
        "Water", "Last"
    ));
    for (name, last, next) in rows {
        out.push_str(&format!("{name:<name_width$}  {last:<last_width$}  {next}\n"));
    }
    out
}
