//! Core types and rule engine for the tahanun service.
//!
//! This crate answers, for a resolved pair of calendar records (the
//! target date and the day after it), whether tahanun is recited and at
//! which services. It trusts an external converter for all
//! Hebrew-calendar arithmetic; see the `converter` module for the seam.

pub mod catalog;
pub mod classification;
pub mod converter;
pub mod dates;
pub mod engine;
pub mod error;
pub mod exclusion;
pub mod record;
pub mod secular;

pub use catalog::{HolidayCatalog, HolidayCatalogEntry};
pub use classification::{Classification, Service};
pub use converter::DateConverter;
pub use engine::ClassificationEngine;
pub use error::{TahanunError, TahanunResult};
pub use record::ResolvedDateRecord;
