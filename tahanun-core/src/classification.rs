//! Terminal output of a classification request.
//!
//! A `Classification` is everything the caller needs to know about
//! whether tahanun is recited on a date, and at which services. It is
//! serialized as-is by the HTTP layer.

use serde::{Deserialize, Serialize};

/// A prayer service at which tahanun may be recited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Service {
    Shaharit,
    Minha,
    Maariv,
}

/// The final word on reading tahanun for one date.
///
/// `holiday` and `tahanun` are options so the degraded result (returned
/// when the converter could not resolve a date) can leave them unset:
/// it carries only `date`, signaling upstream failure rather than
/// guessing a classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub date: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub holiday: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub tahanun: Option<bool>,

    #[serde(rename = "minchaErev", skip_serializing_if = "Option::is_none")]
    pub mincha_erev: Option<bool>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<Service>,
}

impl Classification {
    /// Minimal degraded result: only the date, nothing else populated.
    pub fn degraded(date: String) -> Self {
        Classification {
            date,
            title: None,
            holiday: None,
            tahanun: None,
            mincha_erev: None,
            services: Vec::new(),
        }
    }

    /// A day on which tahanun is omitted outright (holiday, Shabbat,
    /// secular exception).
    pub fn holiday(date: String, title: impl Into<String>, services: Vec<Service>) -> Self {
        Classification {
            date,
            title: Some(title.into()),
            holiday: Some(true),
            tahanun: Some(false),
            mincha_erev: None,
            services,
        }
    }

    /// Ordinary chol: tahanun at shaharit and minha.
    pub fn chol(date: String) -> Self {
        Classification {
            date,
            title: None,
            holiday: Some(false),
            tahanun: Some(true),
            mincha_erev: None,
            services: vec![Service::Shaharit, Service::Minha],
        }
    }
}
