//! Hebcal converter client.
//!
//! Resolves a Gregorian date to its Hebrew-calendar record via the
//! Hebcal REST API (<https://www.hebcal.com/home/195/jewish-calendar-rest-api>).
//! There is no single-date holiday endpoint; the converter endpoint
//! returns the Hebrew month/day plus the day's event list, which is all
//! the rule engine needs.

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use tahanun_core::dates::format_gregorian;
use tahanun_core::{DateConverter, ResolvedDateRecord, TahanunError, TahanunResult};

const DEFAULT_BASE_URL: &str = "https://www.hebcal.com";

/// HTTP client for the Hebcal converter endpoint.
#[derive(Debug, Clone)]
pub struct HebcalConverter {
    client: reqwest::Client,
    base_url: String,
}

/// The subset of the converter response the engine cares about.
/// Hebcal reports the Hebrew day as a number; older mirrors return it
/// as a string, so both are accepted.
#[derive(Debug, Deserialize)]
struct ConverterResponse {
    #[serde(default)]
    hm: Option<String>,
    #[serde(default)]
    hd: Option<NumberOrString>,
    #[serde(default)]
    events: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(u32),
    String(String),
}

impl NumberOrString {
    fn into_string(self) -> String {
        match self {
            NumberOrString::Number(n) => n.to_string(),
            NumberOrString::String(s) => s,
        }
    }
}

impl HebcalConverter {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at an alternate server (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        HebcalConverter {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    fn converter_url(&self, date: NaiveDate) -> String {
        format!(
            "{}/converter?v=1&cfg=json&gy={}&gm={}&gd={}&g2h=1",
            self.base_url,
            date.year(),
            date.month(),
            date.day()
        )
    }
}

impl Default for HebcalConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl DateConverter for HebcalConverter {
    async fn resolve(&self, date: NaiveDate) -> TahanunResult<ResolvedDateRecord> {
        let response = self
            .client
            .get(self.converter_url(date))
            .send()
            .await
            .map_err(|e| TahanunError::Converter(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TahanunError::Converter(format!(
                "converter returned HTTP {}",
                response.status()
            )));
        }

        let body: ConverterResponse = response
            .json()
            .await
            .map_err(|e| TahanunError::ConverterResponse(e.to_string()))?;

        Ok(ResolvedDateRecord {
            gregorian_date: format_gregorian(date),
            hebrew_month: body.hm,
            hebrew_day: body.hd.map(NumberOrString::into_string),
            events: body.events,
        })
    }
}
