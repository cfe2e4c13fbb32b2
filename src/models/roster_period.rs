//! Roster period model and month skeleton generation.
//!
//! This module contains the [`RosterPeriod`] type identifying the target
//! (year, month) and the generation of the ordered day skeleton that the
//! parsing stages fill in.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

use super::DaySlot;

/// The target (year, month) of one roster page.
///
/// # Example
///
/// ```
/// use roster_engine::models::RosterPeriod;
///
/// let period = RosterPeriod { year: 2025, month: 12 };
/// assert_eq!(period.day_count().unwrap(), 31);
/// assert_eq!(period.days().unwrap().len(), 31);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterPeriod {
    /// The calendar year.
    pub year: i32,
    /// The calendar month (1-12).
    pub month: u32,
}

impl RosterPeriod {
    /// Returns the first day of the month, or an error for a period that
    /// does not denote a real calendar month.
    fn first_day(&self) -> EngineResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or(EngineError::InvalidPeriod {
            year: self.year,
            month: self.month,
        })
    }

    /// Returns the true number of days in this month (leap-aware).
    pub fn day_count(&self) -> EngineResult<u32> {
        let first = self.first_day()?;
        let next_first = if self.month == 12 {
            NaiveDate::from_ymd_opt(self.year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(self.year, self.month + 1, 1)
        }
        .ok_or(EngineError::InvalidPeriod {
            year: self.year,
            month: self.month,
        })?;
        Ok((next_first - first).num_days() as u32)
    }

    /// Builds the ordered day skeleton for this month.
    ///
    /// Every day of the month appears exactly once, ascending by day number,
    /// with duty [`DutyType::Unknown`](super::DutyType::Unknown) and no legs.
    /// The parsing stages mutate these slots in place; none are created or
    /// destroyed afterwards.
    pub fn days(&self) -> EngineResult<Vec<DaySlot>> {
        let count = self.day_count()?;
        let mut days = Vec::with_capacity(count as usize);
        let mut date = self.first_day()?;
        while date.month() == self.month {
            days.push(DaySlot::new(date));
            date = match date.succ_opt() {
                Some(next) => next,
                None => break, // end of chrono's representable range
            };
        }
        Ok(days)
    }
}
