//! Agenda view assembly.
//!
//! # Responsibility
//! - Bridge navigator state and a caller-supplied record collection into
//!   the value a view renders.
//!
//! # Invariants
//! - Records are borrowed, never copied or mutated; the view holds no
//!   references back into navigator state.
//! - Output is fully determined by the inputs; records are supplied fresh
//!   on every query, nothing is cached here.

use chrono::NaiveDate;
use log::debug;

use crate::period::bounds::PeriodBounds;
use crate::period::filter::{filter_by_exact_day, filter_by_range, has_any_on_date, Timestamped};
use crate::period::navigator::PeriodNavigator;

/// Everything a calendar view needs to render one period.
#[derive(Debug, Clone, PartialEq)]
pub struct PeriodView<'a, T> {
    /// Human-readable period label.
    pub title: String,
    /// Inclusive bounds of the displayed period.
    pub bounds: PeriodBounds,
    /// Records inside the period, sorted by timestamp ascending.
    pub records: Vec<&'a T>,
}

/// Assembles the view for the navigator's current period.
pub fn view_for<'a, T: Timestamped>(
    navigator: &PeriodNavigator,
    records: &'a [T],
) -> PeriodView<'a, T> {
    let bounds = navigator.bounds();
    let members = filter_by_range(records, &bounds);
    debug!(
        "event=agenda_view module=service granularity={} start={} end={} total={} shown={}",
        navigator.granularity(),
        bounds.start,
        bounds.end,
        records.len(),
        members.len()
    );
    PeriodView {
        title: navigator.title(),
        bounds,
        records: members,
    }
}

/// Records due on one specific day, for day-detail panels.
pub fn records_on_day<'a, T: Timestamped>(
    records: &'a [T],
    day: NaiveDate,
) -> Vec<&'a T> {
    filter_by_exact_day(records, day)
}

/// Whether the calendar cell for `date` should carry a marker, under the
/// navigator's current display granularity.
pub fn has_marker<T: Timestamped>(
    date: NaiveDate,
    navigator: &PeriodNavigator,
    records: &[T],
) -> bool {
    has_any_on_date(
        date,
        navigator.granularity().display_granularity(),
        records,
    )
}
