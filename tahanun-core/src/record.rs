//! Converter-neutral date record.

use serde::{Deserialize, Serialize};

/// One Gregorian date as resolved by the external converter.
///
/// `events` is free text from the calendar service; it can carry
/// holidays, candle-lighting times, parsha names and more. Only entries
/// matching the holiday catalog are semantically relevant here.
///
/// Month and day are optional because a converter response can be
/// well-formed without them; downstream checks treat that case as "not
/// excluded" with an explicit unknown marker rather than failing the
/// whole classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedDateRecord {
    /// Gregorian date in yyyy-mm-dd form.
    pub gregorian_date: String,
    /// Hebrew month name, e.g. "Nisan".
    pub hebrew_month: Option<String>,
    /// Hebrew day of month as reported by the converter.
    pub hebrew_day: Option<String>,
    /// Calendar events on this date, as reported by the converter.
    #[serde(default)]
    pub events: Vec<String>,
}
