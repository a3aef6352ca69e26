//! Secular dates on which tahanun is also omitted.
//!
//! Checked only after every religious rule has failed to exempt the
//! day; religious exemptions take priority over secular ones.

use chrono::{Datelike, NaiveDate, Weekday};

/// Returns the exception's label when `date` is one of the two fixed
/// secular exceptions, None otherwise.
pub fn evaluate(date: NaiveDate) -> Option<&'static str> {
    // Fourth Thursday of November falls in the 22-28 window
    if date.month() == 11 && date.weekday() == Weekday::Thu && (22..=28).contains(&date.day()) {
        return Some("Thanksgiving");
    }
    if date.month() == 7 && date.day() == 4 {
        return Some("Fourth of July");
    }
    None
}
