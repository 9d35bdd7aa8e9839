//! Next/last stocking lookups and collection ordering.

use std::cmp::Ordering;

use chrono::{DateTime, FixedOffset};

use crate::clock::{Clock, regional_now};
use crate::domain::{Calendar, Fish, SortKey, StockingData, Week};

impl Calendar {
    /// Closest upcoming stocking, or the zero [`Week`] if none is scheduled.
    pub fn next(&self, clock: &dyn Clock) -> Week {
        self.next_after(regional_now(clock))
    }

    /// Most recent past stocking, or the zero [`Week`] if none happened yet.
    pub fn last(&self, clock: &dyn Clock) -> Week {
        self.last_before(regional_now(clock))
    }

    pub fn next_after(&self, now: DateTime<FixedOffset>) -> Week {
        self.data
            .iter()
            .filter(|w| w.stock.is_stocked())
            .find(|w| w.time().is_some_and(|t| t > now))
            .copied()
            .unwrap_or_default()
    }

    // Unknown codes still count as "something happened" when looking back.
    pub fn last_before(&self, now: DateTime<FixedOffset>) -> Week {
        self.data
            .iter()
            .rev()
            .filter(|w| w.stock != Fish::None)
            .find(|w| w.time().is_some_and(|t| t < now))
            .copied()
            .unwrap_or_default()
    }
}

impl StockingData {
    /// Stable sort by `compare`, falling back to the water name on ties.
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&Calendar, &Calendar) -> Ordering,
    {
        self.0.sort_by(|a, b| {
            compare(a, b).then_with(|| a.water_name.cmp(&b.water_name))
        });
    }

    pub fn sort_by_name(&mut self) {
        self.sort_by(|_, _| Ordering::Equal);
    }

    /// Soonest upcoming stocking first; waters with nothing upcoming go last.
    pub fn sort_by_next(&mut self, clock: &dyn Clock) {
        let now = regional_now(clock);
        self.sort_by(|a, b| {
            compare_present(a.next_after(now).time(), b.next_after(now).time(), false)
        });
    }

    /// Most recently stocked first; waters never stocked go last.
    pub fn sort_by_last(&mut self, clock: &dyn Clock) {
        let now = regional_now(clock);
        self.sort_by(|a, b| {
            compare_present(a.last_before(now).time(), b.last_before(now).time(), true)
        });
    }

    pub fn sort(&mut self, key: SortKey, clock: &dyn Clock) {
        match key {
            SortKey::Name => self.sort_by_name(),
            SortKey::Next => self.sort_by_next(clock),
            SortKey::Last => self.sort_by_last(clock),
        }
    }
}

/// Order two optional times, placing `None` after every `Some`.
fn compare_present(
    a: Option<DateTime<FixedOffset>>,
    b: Option<DateTime<FixedOffset>>,
    descending: bool,
) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) if descending => b.cmp(&a),
        (Some(a), Some(b)) => a.cmp(&b),
    }
}
