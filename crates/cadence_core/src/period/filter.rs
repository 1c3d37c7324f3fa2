//! Range and membership queries over timestamped records.
//!
//! # Responsibility
//! - Decide which records belong to a displayed period.
//! - Answer calendar-cell marker queries for the widget grid.
//!
//! # Invariants
//! - All comparisons are day-granular: time-of-day never moves a record
//!   across a period edge.
//! - Inputs are never mutated; empty input yields empty/false output.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::period::bounds::PeriodBounds;
use crate::period::granularity::DisplayGranularity;

/// The single capability the engine requires of an external record.
///
/// Deadlines, events or any other entity qualify by exposing one
/// timestamp; the engine is agnostic to everything else about the shape.
pub trait Timestamped {
    /// The record's point in time, in local calendar terms.
    fn occurs_at(&self) -> NaiveDateTime;
}

/// Inclusive day-granular membership test against period bounds.
pub fn is_within(date: NaiveDate, bounds: &PeriodBounds) -> bool {
    bounds.contains(date)
}

/// Selects records whose timestamp falls inside `bounds`, sorted by
/// timestamp ascending for chronological display.
///
/// The sort is stable, so records sharing an instant keep their input
/// relative order.
pub fn filter_by_range<'a, T: Timestamped>(
    records: &'a [T],
    bounds: &PeriodBounds,
) -> Vec<&'a T> {
    let mut members: Vec<&T> = records
        .iter()
        .filter(|record| bounds.contains(record.occurs_at().date()))
        .collect();
    members.sort_by_key(|record| record.occurs_at());
    members
}

/// Selects records dated on the same calendar day as `date`, ignoring
/// time-of-day. Input relative order is preserved.
pub fn filter_by_exact_day<'a, T: Timestamped>(
    records: &'a [T],
    date: NaiveDate,
) -> Vec<&'a T> {
    records
        .iter()
        .filter(|record| record.occurs_at().date() == date)
        .collect()
}

/// Calendar-cell marker query.
///
/// On the year grid a cell is a whole month, so any record in the same
/// month and year marks it; on the month grid a cell is one day.
pub fn has_any_on_date<T: Timestamped>(
    date: NaiveDate,
    display: DisplayGranularity,
    records: &[T],
) -> bool {
    records.iter().any(|record| {
        let at = record.occurs_at().date();
        match display {
            DisplayGranularity::Year => at.year() == date.year() && at.month() == date.month(),
            DisplayGranularity::Month => at == date,
        }
    })
}
