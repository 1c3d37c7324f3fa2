//! Period boundary calculator.
//!
//! # Responsibility
//! - Map (granularity, reference date) to the inclusive bounds of the
//!   period containing that date.
//! - Produce the human-readable title for a computed period.
//!
//! # Invariants
//! - `compute_bounds` is total: every valid calendar date yields bounds.
//! - Bounds are inclusive on both ends and always satisfy `start <= end`.
//! - All arithmetic is calendar-based, never elapsed-millisecond-based, so
//!   variable month lengths and leap years are handled exactly.
//!
//! # See also
//! - docs/architecture/period-engine.md

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::period::granularity::Granularity;

/// Inclusive `[start, end]` calendar-date range for one period.
///
/// Stored at day precision; `start_at`/`end_at` expose the conventional
/// first-instant / last-instant view for callers comparing timestamps.
/// Recomputed and replaced on every navigation, never mutated in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodBounds {
    /// First day of the period, inclusive.
    pub start: NaiveDate,
    /// Last day of the period, inclusive.
    pub end: NaiveDate,
}

impl PeriodBounds {
    /// Builds bounds from an ordered day pair.
    ///
    /// `compute_bounds` is the only production caller and always supplies
    /// ordered dates; the assertion guards test fixtures.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "period bounds out of order");
        Self { start, end }
    }

    /// First instant of the period: `start` at 00:00:00.000.
    pub fn start_at(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    /// Last instant of the period: `end` at 23:59:59.999.
    pub fn end_at(&self) -> NaiveDateTime {
        let last_instant = NaiveTime::from_hms_milli_opt(23, 59, 59, 999)
            .unwrap_or(NaiveTime::MIN);
        self.end.and_time(last_instant)
    }

    /// Inclusive day-granular membership test.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of calendar days covered, counting both ends.
    pub fn day_count(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Computes the inclusive bounds of the period containing `reference`.
///
/// # Contract
/// - Total over valid calendar dates; no error path.
/// - The reference date is always inside the returned bounds.
/// - Pure: does not consult the wall clock.
pub fn compute_bounds(granularity: Granularity, reference: NaiveDate) -> PeriodBounds {
    let year = reference.year();
    let month0 = reference.month0();

    match granularity {
        Granularity::Annual => PeriodBounds::new(ymd(year, 1, 1), ymd(year, 12, 31)),
        Granularity::Biannual => {
            if month0 < 6 {
                PeriodBounds::new(ymd(year, 1, 1), ymd(year, 6, 30))
            } else {
                PeriodBounds::new(ymd(year, 7, 1), ymd(year, 12, 31))
            }
        }
        Granularity::FourMonth => {
            let start_month = month0 / 4 * 4 + 1;
            let end_month = start_month + 3;
            PeriodBounds::new(
                ymd(year, start_month, 1),
                ymd(year, end_month, last_day_of_month(year, end_month)),
            )
        }
        Granularity::Quarterly => {
            let start_month = month0 / 3 * 3 + 1;
            let end_month = start_month + 2;
            PeriodBounds::new(
                ymd(year, start_month, 1),
                ymd(year, end_month, last_day_of_month(year, end_month)),
            )
        }
        Granularity::Monthly => {
            let month = reference.month();
            PeriodBounds::new(
                ymd(year, month, 1),
                ymd(year, month, last_day_of_month(year, month)),
            )
        }
        Granularity::Biweekly => {
            let month = reference.month();
            if reference.day() <= 15 {
                PeriodBounds::new(ymd(year, month, 1), ymd(year, month, 15))
            } else {
                PeriodBounds::new(
                    ymd(year, month, 16),
                    ymd(year, month, last_day_of_month(year, month)),
                )
            }
        }
        Granularity::Weekly => {
            // number_from_monday already reports Sunday as 7, which keeps
            // the Monday anchor stable across the weekend.
            let offset = u64::from(reference.weekday().number_from_monday() - 1);
            let start = reference - Days::new(offset);
            PeriodBounds::new(start, start + Days::new(6))
        }
        Granularity::Daily => PeriodBounds::new(reference, reference),
    }
}

/// Formats the display title for a computed period.
///
/// Fixed English labels, deterministic for a given input triple. The
/// reference date picks the bucket for coarse granularities; the bounds
/// carry the day numbers for biweekly and weekly labels.
pub fn period_title(
    bounds: &PeriodBounds,
    granularity: Granularity,
    reference: NaiveDate,
) -> String {
    let year = reference.year();
    match granularity {
        Granularity::Annual => year.to_string(),
        Granularity::Biannual => {
            let bucket = reference.month0() / 6;
            format!("{} semester {year}", ordinal(bucket + 1))
        }
        Granularity::FourMonth => {
            let bucket = reference.month0() / 4;
            format!("{} four-month period {year}", ordinal(bucket + 1))
        }
        Granularity::Quarterly => {
            let bucket = reference.month0() / 3;
            format!("{} quarter {year}", ordinal(bucket + 1))
        }
        Granularity::Monthly => {
            format!("{} {year}", month_name(reference.month()))
        }
        Granularity::Biweekly => format!(
            "{}\u{2013}{} {} {year}",
            bounds.start.day(),
            bounds.end.day(),
            month_name(reference.month()),
        ),
        Granularity::Weekly => format!(
            "Week of {} {} \u{2013} {} {} {}",
            bounds.start.day(),
            month_abbrev(bounds.start.month()),
            bounds.end.day(),
            month_abbrev(bounds.end.month()),
            bounds.end.year(),
        ),
        Granularity::Daily => format!(
            "{} {} {year}",
            reference.day(),
            month_name(reference.month()),
        ),
    }
}

/// Last calendar day of a month, computed from the first of the next month.
pub(crate) fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    ymd(next_year, next_month, 1)
        .pred_opt()
        .map(|day| day.day())
        .unwrap_or(28)
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    // month/day always come from Datelike accessors or last_day_of_month,
    // so the fallback is unreachable for in-range years.
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or(NaiveDate::MIN)
}

fn ordinal(n: u32) -> &'static str {
    match n {
        1 => "1st",
        2 => "2nd",
        3 => "3rd",
        _ => "4th",
    }
}

fn month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    NAMES[(month as usize - 1).min(11)]
}

fn month_abbrev(month: u32) -> &'static str {
    const ABBREVS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];
    ABBREVS[(month as usize - 1).min(11)]
}
