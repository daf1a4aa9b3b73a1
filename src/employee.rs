use chrono::NaiveDate;
use serde::Serialize;

use crate::tenure::{self, TenureDuration, TenureError};

/// A single employee record, built once from validated input.
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub first_name: String,
    pub last_name: String,
    pub oib: String,
    pub role: String,
    #[serde(serialize_with = "ser_date")]
    pub employment_date: NaiveDate,
}

impl Employee {
    /// Tenure accumulated from the employment date up to `now`.
    pub fn tenure(&self, now: NaiveDate) -> Result<TenureDuration, TenureError> {
        tenure::compute(self.employment_date, now)
    }
}

// Dates render as dd.mm.yyyy everywhere, JSON included.
fn ser_date<S: serde::Serializer>(d: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&d.format("%d.%m.%Y"))
}
