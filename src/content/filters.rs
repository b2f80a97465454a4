//! Pure display filters over raw collections.
//!
//! These never fail: empty input yields empty output. Sorting is stable, so
//! items with equal keys keep their input order. Items whose sort date is
//! absent or unparsable go last rather than inheriting whatever an invalid
//! timestamp would compare as.

use chrono::NaiveDate;

use crate::models::{Event, Sponsor, Tryout};

/// Sort key that places unparsable dates after all parsable ones.
fn date_key(date: Option<NaiveDate>) -> (bool, NaiveDate) {
    match date {
        Some(d) => (false, d),
        None => (true, NaiveDate::MIN),
    }
}

/// Events with status `upcoming`, ascending by start date.
pub fn upcoming_events(events: &[Event]) -> Vec<Event> {
    let mut out: Vec<Event> = events.iter().filter(|e| e.is_upcoming()).cloned().collect();
    out.sort_by_key(|e| date_key(e.parsed_start()));
    out
}

/// Active sponsors, ascending by display order.
pub fn active_sponsors(sponsors: &[Sponsor]) -> Vec<Sponsor> {
    let mut out: Vec<Sponsor> = sponsors.iter().filter(|s| s.active).cloned().collect();
    out.sort_by_key(|s| s.order);
    out
}

/// Tryouts with status `upcoming`, ascending by each tryout's first listed date.
pub fn upcoming_tryouts(tryouts: &[Tryout]) -> Vec<Tryout> {
    let mut out: Vec<Tryout> = tryouts.iter().filter(|t| t.is_upcoming()).cloned().collect();
    out.sort_by_key(|t| date_key(t.first_date()));
    out
}
