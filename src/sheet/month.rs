//! Month header labels.

use chrono::Month;

/// A recognized month label, with the year if the label carried one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMonth {
    pub month: Month,
    pub year: Option<i32>,
}

/// Parse labels like `"OCTOBER"` or `"OCTOBER 2025"`.
///
/// Returns `None` for anything that doesn't start with a month name.
pub fn parse_month(text: &str) -> Option<ParsedMonth> {
    let parts: Vec<&str> = text.split_whitespace().collect();
    let month = month_from_name(parts.first()?)?;

    let year = match parts.as_slice() {
        [_, year] => year.parse::<i32>().ok(),
        _ => None,
    };

    Some(ParsedMonth { month, year })
}

fn month_from_name(name: &str) -> Option<Month> {
    let month = match name.to_lowercase().as_str() {
        "january" => Month::January,
        // The CFP sheet spells it this way.
        "february" | "feburary" => Month::February,
        "march" => Month::March,
        "april" => Month::April,
        "may" => Month::May,
        "june" => Month::June,
        "july" => Month::July,
        "august" => Month::August,
        "september" => Month::September,
        "october" => Month::October,
        "november" => Month::November,
        "december" => Month::December,
        _ => return None,
    };
    Some(month)
}
