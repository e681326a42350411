//! Calendar helpers for month-stepped simulation
//!
//! All date arithmetic runs on `NaiveDate`. The simulated "now" is fixed
//! once per run so every derived date (birth window, hire window, monthly
//! base dates) agrees with every other.

use chrono::{Datelike, Duration, Local, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Days per year used for service and age computations
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Resignation date carried by employees who have not resigned
pub fn active_sentinel() -> NaiveDate {
    NaiveDate::from_ymd_opt(2999, 12, 31).unwrap_or(NaiveDate::MAX)
}

pub fn is_active_sentinel(date: NaiveDate) -> bool {
    date == active_sentinel()
}

/// Today's local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn months_before(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN)
}

/// Same calendar day `years` earlier (Feb 29 clamps to Feb 28)
pub fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    months_before(date, years.saturating_mul(12))
}

pub fn days_before(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_sub_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MIN)
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// Elapsed time in fractional years (days / 365.25)
pub fn years_between(from: NaiveDate, to: NaiveDate) -> f64 {
    (to - from).num_days() as f64 / DAYS_PER_YEAR
}

/// Maps a month index onto the first day of its calendar month
///
/// The last simulated month is the month containing `today`; month 0 is
/// `total_months - 1` months earlier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthCalendar {
    today: NaiveDate,
    total_months: u32,
}

impl MonthCalendar {
    pub fn new(today: NaiveDate, total_months: u32) -> Self {
        Self {
            today,
            total_months,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn total_months(&self) -> u32 {
        self.total_months
    }

    pub fn base_date(&self, month_index: u32) -> NaiveDate {
        let back = self
            .total_months
            .saturating_sub(1)
            .saturating_sub(month_index);
        month_start(months_before(self.today, back))
    }

    /// Year boundaries are month indices 12, 24, ...
    pub fn is_year_boundary(month_index: u32) -> bool {
        month_index > 0 && month_index % 12 == 0
    }

    pub fn base_dates(&self) -> impl Iterator<Item = (u32, NaiveDate)> + '_ {
        (0..self.total_months).map(move |idx| (idx, self.base_date(idx)))
    }
}
