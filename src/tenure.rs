//! tenure.rs
//!
//! Whole-unit elapsed time between an employment date and "today":
//!     X years, Y months, Z days
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python's
//! relativedelta), so we implement the calendar-aware borrowing rules manually.
//!
//! This logic correctly handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the month preceding `now`)
//!   • leap years
//!   • varying month lengths

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TenureError {
    #[error("employment date {start} is after the reference date {now}")]
    StartAfterNow { start: NaiveDate, now: NaiveDate },
}

/// Elapsed tenure split into calendar units. A fresh value per calculation,
/// never mutated.
///
/// `days` is signed: a start on the 29th–31st, measured right after a
/// shorter month, borrows from that shorter month and can come up a day or
/// two short. The shortfall is carried as-is rather than re-borrowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TenureDuration {
    pub years: i32,
    pub months: i32,
    pub days: i32,
}

/// Computes whole years/months/days from `start` to `now`.
///
/// Rejects `start > now`; the prompt loop only hands over validated dates,
/// but an out-of-order pair must never be clamped into a bogus duration.
pub fn compute(start: NaiveDate, now: NaiveDate) -> Result<TenureDuration, TenureError> {
    if start > now {
        return Err(TenureError::StartAfterNow { start, now });
    }

    let mut years = now.year() - start.year();
    let mut months = now.month() as i32 - start.month() as i32;
    let mut days = now.day() as i32 - start.day() as i32;

    // Fix day underflow
    if days < 0 {
        months -= 1;

        // Determine the previous month relative to `now`.
        let (prev_year, prev_month) = if now.month() == 1 {
            (now.year() - 1, 12)
        } else {
            (now.year(), now.month() - 1)
        };

        // Add days from the previous month (28–31 depending on month & leap year)
        days += days_in_month(prev_year, prev_month) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(TenureDuration {
        years,
        months,
        days,
    })
}

/// Returns number of days in a given year/month (handles leap years)
fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
