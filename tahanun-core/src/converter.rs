//! The date-converter collaborator seam.
//!
//! The engine never computes Hebrew-calendar arithmetic itself; it
//! trusts an external converter for Gregorian-to-Hebrew resolution and
//! holiday enumeration. Anything implementing this trait can stand in:
//! the Hebcal REST client in production, an in-memory table in tests.

use std::future::Future;

use chrono::NaiveDate;

use crate::error::TahanunResult;
use crate::record::ResolvedDateRecord;

pub trait DateConverter: Send + Sync {
    /// Resolve one Gregorian date to its Hebrew-calendar record.
    fn resolve(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = TahanunResult<ResolvedDateRecord>> + Send;
}
