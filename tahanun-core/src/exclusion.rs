//! Hebrew-calendar windows during which tahanun is omitted.

/// Outcome of the exclusion-range check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// The date falls in an omission window; the label names it.
    Excluded(&'static str),
    /// Ordinary day, tahanun applies pending further checks.
    Chol,
    /// Month or day missing/unparseable on the resolved record. Never
    /// silently excluded; the caller marks the result instead.
    Unknown,
}

/// Check a resolved Hebrew month/day against the three fixed omission
/// windows. First match wins.
pub fn evaluate(hebrew_month: Option<&str>, hebrew_day: Option<&str>) -> Exclusion {
    let (Some(month), Some(day)) = (hebrew_month, hebrew_day) else {
        return Exclusion::Unknown;
    };
    let Ok(day) = day.parse::<u32>() else {
        return Exclusion::Unknown;
    };

    match month {
        // The entire month of Nisan, independent of day
        "Nisan" => Exclusion::Excluded("Nisan"),
        // Erev Yom Kippur through the end of Tishrei
        "Tishrei" if day >= 9 => Exclusion::Excluded("Yom Kippur Through End of Tishrei"),
        "Sivan" if day < 12 => Exclusion::Excluded("Sivan 1-12"),
        _ => Exclusion::Chol,
    }
}
