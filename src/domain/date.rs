//! Cover sheet dates
//!
//! A [`BundleDate`] can only be built from components that pass the
//! realistic-range checks, so anything holding one can render it straight
//! into a directory name.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exclusive bounds on the cover sheet year
const MIN_YEAR_EXCLUSIVE: i32 = 1900;
const MAX_YEAR_EXCLUSIVE: i32 = 2020;

/// Why a set of date components was turned down
///
/// These never leave the prompt loop; the operator is simply asked again.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateRejection {
    #[error("Invalid date: Not a number")]
    NotANumber,
    #[error("Invalid date: Year out of realistic range")]
    YearOutOfRange,
    #[error("Invalid date: Month out of realistic range")]
    MonthOutOfRange,
    #[error("Invalid date: Day out of realistic range")]
    DayOutOfRange,
    #[error("Invalid date: No such day in that month")]
    NotACalendarDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BundleDate(NaiveDate);

impl BundleDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, DateRejection> {
        if year <= MIN_YEAR_EXCLUSIVE || year >= MAX_YEAR_EXCLUSIVE {
            return Err(DateRejection::YearOutOfRange);
        }
        if !(1..=12).contains(&month) {
            return Err(DateRejection::MonthOutOfRange);
        }
        if !(1..=32).contains(&day) {
            return Err(DateRejection::DayOutOfRange);
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(BundleDate)
            .ok_or(DateRejection::NotACalendarDate)
    }

    /// Validate raw operator answers for year, month and day
    pub fn parse(year: &str, month: &str, day: &str) -> Result<Self, DateRejection> {
        let year = year
            .trim()
            .parse::<i32>()
            .map_err(|_| DateRejection::NotANumber)?;
        let month = month
            .trim()
            .parse::<i64>()
            .map_err(|_| DateRejection::NotANumber)?;
        let day = day
            .trim()
            .parse::<i64>()
            .map_err(|_| DateRejection::NotANumber)?;

        let month = u32::try_from(month).map_err(|_| DateRejection::MonthOutOfRange)?;
        let day = u32::try_from(day).map_err(|_| DateRejection::DayOutOfRange)?;
        Self::new(year, month, day)
    }

}

impl fmt::Display for BundleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
