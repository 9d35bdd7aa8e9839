//! Injectable time source.
//!
//! Every component that needs "now" (the calendar year guess, next/last
//! lookups, relative-time labels) takes a [`Clock`] instead of reading the
//! system time directly, so tests can pin the date.

use chrono::{DateTime, FixedOffset, Offset, Utc};

use crate::domain::REGIONAL_OFFSET_SECS;

pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// The publisher's fixed UTC-07:00 offset (no daylight saving).
pub fn regional_offset() -> FixedOffset {
    FixedOffset::east_opt(REGIONAL_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// "Now" expressed in the regional offset.
pub fn regional_now(clock: &dyn Clock) -> DateTime<FixedOffset> {
    clock.now().with_timezone(&regional_offset())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn regional_now_shifts_seven_hours() {
        let clock = FixedClock(Utc.with_ymd_and_hms(2025, 1, 1, 3, 0, 0).unwrap());
        let now = regional_now(&clock);
        assert_eq!(now.offset().local_minus_utc(), -7 * 3600);
        assert_eq!(now.format("%Y-%m-%d %H").to_string(), "2024-12-31 20");
    }
}
