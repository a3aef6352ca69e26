//! The classification rule engine.
//!
//! Applies the priority-ordered rule sequence to a target date and the
//! day after it. Every step short-circuits the rest:
//!
//! 1. Shabbat
//! 2. today is a cataloged holiday
//! 3. tomorrow is a cataloged holiday (the "erev" case)
//! 4. Hebrew-calendar exclusion range
//! 5. secular exception
//! 6. erev Shabbat
//! 7. ordinary chol
//!
//! The engine is stateless and idempotent: identical records and
//! weekday always produce the identical classification.

use chrono::{Datelike, Days, NaiveDate, Weekday};

use crate::catalog::HolidayCatalog;
use crate::classification::{Classification, Service};
use crate::converter::DateConverter;
use crate::dates::format_gregorian;
use crate::exclusion::{self, Exclusion};
use crate::record::ResolvedDateRecord;
use crate::secular;

pub struct ClassificationEngine<C> {
    catalog: HolidayCatalog,
    converter: C,
}

impl<C: DateConverter> ClassificationEngine<C> {
    pub fn new(catalog: HolidayCatalog, converter: C) -> Self {
        ClassificationEngine { catalog, converter }
    }

    /// Resolve the target date and the day after it, then classify.
    ///
    /// If either lookup fails the engine cannot apply the rules
    /// reliably; it returns the degraded result carrying only the date
    /// string, never an error.
    pub async fn classify(&self, date: NaiveDate) -> Classification {
        let Some(tomorrow) = date.checked_add_days(Days::new(1)) else {
            return Classification::degraded(format_gregorian(date));
        };

        // The two lookups are independent; issue them together.
        let (today_record, tomorrow_record) = tokio::join!(
            self.converter.resolve(date),
            self.converter.resolve(tomorrow)
        );

        match (today_record, tomorrow_record) {
            (Ok(today), Ok(tomorrow)) => self.classify_records(date, &today, &tomorrow),
            _ => Classification::degraded(format_gregorian(date)),
        }
    }

    /// The pure rule sequence over already-resolved records.
    pub fn classify_records(
        &self,
        date: NaiveDate,
        today: &ResolvedDateRecord,
        tomorrow: &ResolvedDateRecord,
    ) -> Classification {
        let date_string = format_gregorian(date);

        // Shabbat is not a "holiday event" on the calendar service
        if date.weekday() == Weekday::Sat {
            return Classification::holiday(
                date_string,
                "Shabbat",
                vec![Service::Shaharit, Service::Minha],
            );
        }

        if let Some(name) = self.catalog.find_holiday(&today.events) {
            return Classification::holiday(
                date_string,
                name,
                vec![Service::Shaharit, Service::Minha],
            );
        }

        // Tomorrow is a holiday. If the calendar already lists tonight
        // as its own named event, today is not an inferred erev and the
        // remaining checks still apply. Otherwise today is the erev:
        // tahanun is still said, but the services are restricted.
        if let Some(name) = self.catalog.find_holiday(&tomorrow.events) {
            if !self.catalog.erev_is_distinct(name) {
                // mincha_erev reads the same catalog flag as
                // erev_is_distinct, so inside this branch it is always
                // false and an inferred erev restricts to shaharit. The
                // split stays in case a catalog ever separates the two.
                let mincha_erev = self.catalog.mincha_erev(name);
                let services = if mincha_erev {
                    vec![Service::Shaharit, Service::Minha]
                } else {
                    vec![Service::Shaharit]
                };
                return Classification {
                    date: date_string,
                    title: Some(format!("Erev {name}")),
                    holiday: Some(false),
                    tahanun: Some(true),
                    mincha_erev: Some(mincha_erev),
                    services,
                };
            }
        }

        let mut unknown_hebrew_date = false;
        match exclusion::evaluate(today.hebrew_month.as_deref(), today.hebrew_day.as_deref()) {
            Exclusion::Excluded(label) => {
                return Classification {
                    date: date_string,
                    title: Some(label.to_string()),
                    holiday: Some(false),
                    tahanun: Some(false),
                    mincha_erev: None,
                    services: vec![Service::Shaharit, Service::Minha],
                };
            }
            Exclusion::Unknown => unknown_hebrew_date = true,
            Exclusion::Chol => {}
        }

        if let Some(label) = secular::evaluate(date) {
            return Classification::holiday(
                date_string,
                label,
                vec![Service::Shaharit, Service::Minha],
            );
        }

        // Erev Shabbat, because it ain't anything else
        if date.weekday() == Weekday::Fri {
            return Classification::holiday(date_string, "Erev Shabbat", vec![Service::Minha]);
        }

        let mut chol = Classification::chol(date_string);
        if unknown_hebrew_date {
            chol.title = Some("<unknown>".to_string());
        }
        chol
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TahanunError;
    use std::collections::HashMap;

    /// In-memory converter backed by a fixed table. Dates missing from
    /// the table resolve as failures.
    struct FakeConverter {
        records: HashMap<NaiveDate, ResolvedDateRecord>,
    }

    impl FakeConverter {
        fn new(records: Vec<(NaiveDate, ResolvedDateRecord)>) -> Self {
            FakeConverter {
                records: records.into_iter().collect(),
            }
        }
    }

    impl DateConverter for FakeConverter {
        async fn resolve(&self, date: NaiveDate) -> crate::error::TahanunResult<ResolvedDateRecord> {
            self.records
                .get(&date)
                .cloned()
                .ok_or_else(|| TahanunError::Converter(format!("no record for {date}")))
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record(gregorian: NaiveDate, month: &str, day: &str, events: &[&str]) -> ResolvedDateRecord {
        ResolvedDateRecord {
            gregorian_date: format_gregorian(gregorian),
            hebrew_month: Some(month.to_string()),
            hebrew_day: Some(day.to_string()),
            events: events.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn engine_for(records: Vec<(NaiveDate, ResolvedDateRecord)>) -> ClassificationEngine<FakeConverter> {
        ClassificationEngine::new(HolidayCatalog::default(), FakeConverter::new(records))
    }

    #[tokio::test]
    async fn saturday_without_holiday_events_is_shabbat() {
        // 2024-04-06 is a Saturday
        let today = date(2024, 4, 6);
        let engine = engine_for(vec![
            (today, record(today, "Adar II", "27", &["Havdalah: 20:15"])),
            (date(2024, 4, 7), record(date(2024, 4, 7), "Adar II", "28", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Shabbat"));
        assert_eq!(c.holiday, Some(true));
        assert_eq!(c.tahanun, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn shabbat_takes_priority_over_a_holiday_event() {
        let today = date(2024, 4, 6);
        let engine = engine_for(vec![
            (today, record(today, "Adar II", "27", &["Rosh Chodesh Nisan"])),
            (date(2024, 4, 7), record(date(2024, 4, 7), "Adar II", "28", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Shabbat"));
    }

    #[tokio::test]
    async fn holiday_today_omits_tahanun() {
        // 2024-04-23 is a Tuesday, first day of Pesach
        let today = date(2024, 4, 23);
        let engine = engine_for(vec![
            (today, record(today, "Nisan", "15", &["Pesach I"])),
            (date(2024, 4, 24), record(date(2024, 4, 24), "Nisan", "16", &["Pesach II"])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Pesach I"));
        assert_eq!(c.holiday, Some(true));
        assert_eq!(c.tahanun, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn inferred_erev_restricts_services_to_shaharit() {
        // Tomorrow is Shavuot, whose eve is not separately listed.
        // 2024-06-11 is a Tuesday (Sivan 5).
        let today = date(2024, 6, 11);
        let engine = engine_for(vec![
            // Sivan 5 would itself be range-excluded; the erev rule
            // must win because it runs first.
            (today, record(today, "Sivan", "5", &["Candle lighting: 20:07"])),
            (date(2024, 6, 12), record(date(2024, 6, 12), "Sivan", "6", &["Shavuot I"])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Erev Shavuot I"));
        assert_eq!(c.tahanun, Some(true));
        assert_eq!(c.mincha_erev, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit]);
    }

    #[tokio::test]
    async fn inferred_erev_never_includes_minha_with_a_single_flag_catalog() {
        // The erev branch is only reached when the matched entry's flag
        // is false, and the same flag drives mincha_erev. Any catalog
        // therefore yields shaharit-only on an inferred erev.
        let catalog = HolidayCatalog::new(vec![crate::catalog::HolidayCatalogEntry {
            name: "Festivus",
            erev_is_distinct_event: false,
        }]);
        let today = date(2024, 12, 3);
        let converter = FakeConverter::new(vec![
            (today, record(today, "Kislev", "2", &[])),
            (date(2024, 12, 4), record(date(2024, 12, 4), "Kislev", "3", &["Festivus"])),
        ]);
        let engine = ClassificationEngine::new(catalog, converter);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Erev Festivus"));
        assert_eq!(c.mincha_erev, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit]);
    }

    #[tokio::test]
    async fn distinct_erev_event_tomorrow_is_not_an_erev_day() {
        // Lag BaOmer's eve is a distinct calendar event, so the day
        // before it falls through to the later checks.
        // 2024-12-03 is a Tuesday (dates faked for isolation).
        let today = date(2024, 12, 3);
        let engine = engine_for(vec![
            (today, record(today, "Kislev", "2", &[])),
            (date(2024, 12, 4), record(date(2024, 12, 4), "Kislev", "3", &["Lag BaOmer"])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title, None);
        assert_eq!(c.holiday, Some(false));
        assert_eq!(c.tahanun, Some(true));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn nisan_is_excluded_all_month() {
        // 2024-04-01 is a Monday
        let today = date(2024, 4, 1);
        let engine = engine_for(vec![
            (today, record(today, "Nisan", "22", &[])),
            (date(2024, 4, 2), record(date(2024, 4, 2), "Nisan", "23", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Nisan"));
        assert_eq!(c.holiday, Some(false));
        assert_eq!(c.tahanun, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn tishrei_eighth_still_says_tahanun() {
        // 2024-10-10 is a Thursday
        let today = date(2024, 10, 10);
        let engine = engine_for(vec![
            (today, record(today, "Tishrei", "8", &[])),
            (date(2024, 10, 11), record(date(2024, 10, 11), "Tishrei", "9", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.tahanun, Some(true));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn tishrei_window_reports_its_label() {
        // 2024-10-22 is a Tuesday, Tishrei 20 (chol hamoed faked out of
        // the event list to isolate the range rule)
        let today = date(2024, 10, 22);
        let engine = engine_for(vec![
            (today, record(today, "Tishrei", "20", &[])),
            (date(2024, 10, 23), record(date(2024, 10, 23), "Tishrei", "21", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Yom Kippur Through End of Tishrei"));
        assert_eq!(c.tahanun, Some(false));
    }

    #[tokio::test]
    async fn thanksgiving_is_excluded_when_no_religious_rule_applies() {
        // 2024-11-28: fourth Thursday of November
        let today = date(2024, 11, 28);
        let engine = engine_for(vec![
            (today, record(today, "Cheshvan", "27", &[])),
            (date(2024, 11, 29), record(date(2024, 11, 29), "Cheshvan", "28", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Thanksgiving"));
        assert_eq!(c.holiday, Some(true));
        assert_eq!(c.tahanun, Some(false));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn fourth_of_july_is_excluded() {
        // 2024-07-04 is a Thursday
        let today = date(2024, 7, 4);
        let engine = engine_for(vec![
            (today, record(today, "Sivan", "28", &[])),
            (date(2024, 7, 5), record(date(2024, 7, 5), "Sivan", "29", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Fourth of July"));
        assert_eq!(c.tahanun, Some(false));
    }

    #[tokio::test]
    async fn friday_with_nothing_else_is_erev_shabbat() {
        // 2024-12-06 is a Friday
        let today = date(2024, 12, 6);
        let engine = engine_for(vec![
            (today, record(today, "Kislev", "5", &["Candle lighting: 16:11"])),
            (date(2024, 12, 7), record(date(2024, 12, 7), "Kislev", "6", &["Parashat Vayetzei"])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("Erev Shabbat"));
        assert_eq!(c.holiday, Some(true));
        assert_eq!(c.tahanun, Some(false));
        assert_eq!(c.services, vec![Service::Minha]);
    }

    #[tokio::test]
    async fn ordinary_chol_says_tahanun_morning_and_afternoon() {
        // 2024-12-03 is a Tuesday
        let today = date(2024, 12, 3);
        let engine = engine_for(vec![
            (today, record(today, "Kislev", "2", &[])),
            (date(2024, 12, 4), record(date(2024, 12, 4), "Kislev", "3", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title, None);
        assert_eq!(c.holiday, Some(false));
        assert_eq!(c.tahanun, Some(true));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn missing_hebrew_fields_surface_the_unknown_marker() {
        let today = date(2024, 12, 3);
        let mut today_record = record(today, "Kislev", "2", &[]);
        today_record.hebrew_month = None;
        let engine = engine_for(vec![
            (today, today_record),
            (date(2024, 12, 4), record(date(2024, 12, 4), "Kislev", "3", &[])),
        ]);

        let c = engine.classify(today).await;
        assert_eq!(c.title.as_deref(), Some("<unknown>"));
        assert_eq!(c.tahanun, Some(true));
        assert_eq!(c.services, vec![Service::Shaharit, Service::Minha]);
    }

    #[tokio::test]
    async fn failed_today_lookup_degrades_the_result() {
        let today = date(2024, 12, 3);
        let engine = engine_for(vec![(
            date(2024, 12, 4),
            record(date(2024, 12, 4), "Kislev", "3", &[]),
        )]);

        let c = engine.classify(today).await;
        assert_eq!(c, Classification::degraded("2024-12-03".to_string()));
        assert_eq!(c.tahanun, None);
        assert_eq!(c.holiday, None);
    }

    #[tokio::test]
    async fn failed_tomorrow_lookup_also_degrades_the_result() {
        let today = date(2024, 12, 3);
        let engine = engine_for(vec![(today, record(today, "Kislev", "2", &[]))]);

        let c = engine.classify(today).await;
        assert_eq!(c, Classification::degraded("2024-12-03".to_string()));
    }
}
