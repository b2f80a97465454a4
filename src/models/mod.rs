//! Data models for the academy content API.
//!
//! This module contains the entity types served by the content endpoint:
//!
//! - `Event`: clinics, camps, and other listed happenings with schedule/pricing
//! - `Sponsor`: sponsor directory entries with display ordering
//! - `CampClinic`, `Tryout`: program listings (tryouts carry a date list)
//! - `Post`: blog/news entries
//!
//! Wire field names and nesting match the content endpoint exactly; all
//! renames are handled with serde attributes so round-tripping is lossless.

pub mod event;
pub mod post;
pub mod program;
pub mod sponsor;

pub use event::{Event, Price, ScheduleBlock, TimeSlot};
pub use post::Post;
pub use program::{CampClinic, Tryout, TryoutDate};
pub use sponsor::Sponsor;

use chrono::{DateTime, NaiveDate};

/// Status value the content team uses for future-facing items.
pub const STATUS_UPCOMING: &str = "upcoming";

/// Parse a date as the content endpoint writes them.
/// Accepts RFC 3339 timestamps or bare `YYYY-MM-DD` dates; anything else is
/// treated as unparsable rather than guessed at.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}
