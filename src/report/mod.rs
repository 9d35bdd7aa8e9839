//! Reporting utilities: calendar listings, next/last details and summaries.

pub mod format;

pub use format::{
    DetailOptions, detail_format, format_calendar, format_stocking, format_summary_table,
    relative_time, short_label,
};
