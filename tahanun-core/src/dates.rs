//! Helpers for the yyyy-mm-dd wire format.

use chrono::NaiveDate;

use crate::error::{TahanunError, TahanunResult};

/// Parse a yyyy-mm-dd date string. Leading zeros on month and day are
/// optional ("2024-7-4" is accepted).
pub fn parse_gregorian(s: &str) -> TahanunResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TahanunError::InvalidDate(s.to_string()))
}

/// Format a date as zero-padded yyyy-mm-dd.
pub fn format_gregorian(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
