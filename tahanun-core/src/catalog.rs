//! The holiday catalog and its matcher.
//!
//! A fixed table of canonical holiday names, each flagged with whether
//! the calendar service lists its eve as a distinct named event. Event
//! strings from the converter match a catalog entry by case-insensitive
//! prefix, because the service appends qualifiers ("Rosh Chodesh Av"
//! matches the entry "Rosh Chodesh").

/// One catalog entry.
#[derive(Debug, Clone)]
pub struct HolidayCatalogEntry {
    pub name: &'static str,
    /// True when the calendar service lists this holiday's eve as its
    /// own named event, so the engine never needs to infer it.
    pub erev_is_distinct_event: bool,
}

/// Immutable, ordered list of recognized holidays.
///
/// Constructed once and injected into the engine; tests can substitute
/// an alternate table.
#[derive(Debug, Clone)]
pub struct HolidayCatalog {
    entries: Vec<HolidayCatalogEntry>,
}

impl Default for HolidayCatalog {
    fn default() -> Self {
        HolidayCatalog::new(vec![
            entry("Rosh Hashana", false),
            entry("Tzom Gedaliah", false),
            entry("Yom Kippur", false),
            entry("Sukkot", false),
            entry("Shmini Atzeret", false),
            entry("Simchat", false),
            entry("Rosh Chodesh", false),
            entry("Chanukah", false),
            entry("Asara B'Tevet", false),
            entry("Tu Bishvat", false),
            entry("Purim Katan", true),
            entry("Purim", false),
            entry("Pesach", false),
            entry("Yom HaShoah", true),
            entry("Yom HaZikaron", true),
            entry("Yom HaAtzma'ut", false),
            entry("Lag BaOmer", true),
            entry("Yom Yerushalayim", true),
            entry("Shavuot", false),
            entry("Tish'a B'Av", false),
            entry("Tu B'Av", true),
        ])
    }
}

fn entry(name: &'static str, erev_is_distinct_event: bool) -> HolidayCatalogEntry {
    HolidayCatalogEntry {
        name,
        erev_is_distinct_event,
    }
}

/// Case-insensitive prefix test. `get` returns None when `name.len()`
/// is not a char boundary in `candidate`, which can only happen when
/// the strings differ anyway.
fn holiday_compare(name: &str, candidate: &str) -> bool {
    candidate
        .get(..name.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(name))
}

impl HolidayCatalog {
    pub fn new(entries: Vec<HolidayCatalogEntry>) -> Self {
        HolidayCatalog { entries }
    }

    fn matched_entry(&self, title: &str) -> Option<&HolidayCatalogEntry> {
        self.entries.iter().find(|e| holiday_compare(e.name, title))
    }

    /// Does this event string denote a cataloged holiday?
    pub fn is_holiday(&self, title: &str) -> bool {
        self.matched_entry(title).is_some()
    }

    /// The matched entry's erev flag; false when nothing matches.
    /// Callers should have confirmed a match via `is_holiday` or
    /// `find_holiday` first.
    pub fn erev_is_distinct(&self, title: &str) -> bool {
        self.matched_entry(title)
            .map(|e| e.erev_is_distinct_event)
            .unwrap_or(false)
    }

    /// Whether mincha still carries tahanun on the inferred erev of
    /// this holiday. Backed by the same flag as `erev_is_distinct`.
    pub fn mincha_erev(&self, title: &str) -> bool {
        self.erev_is_distinct(title)
    }

    /// First event string in `events` matching the catalog, or None.
    /// No match is not an error; it means "not a holiday".
    pub fn find_holiday<'a>(&self, events: &'a [String]) -> Option<&'a str> {
        events
            .iter()
            .map(String::as_str)
            .find(|e| self.is_holiday(e))
    }
}
