//! Period navigation state machine.
//!
//! # Responsibility
//! - Own the reference date, active granularity and current bounds for
//!   one calendar view.
//! - Recompute bounds synchronously on every transition.
//!
//! # Invariants
//! - `bounds == compute_bounds(granularity, reference)` after every public
//!   mutation; this is the whole contract of the type.
//! - One navigator per active view; no process-wide state.
//! - `step(Next)` then `step(Prev)` restores identical bounds for every
//!   granularity.
//!
//! # See also
//! - docs/architecture/period-engine.md

use chrono::{Datelike, Days, Local, NaiveDate};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::period::bounds::{compute_bounds, last_day_of_month, period_title, PeriodBounds};
use crate::period::granularity::Granularity;

/// Navigation direction for [`PeriodNavigator::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepDirection {
    /// Move one period backward.
    Prev,
    /// Move one period forward.
    Next,
}

/// Caller-owned navigation state for one calendar view.
///
/// Created with an explicit reference date so tests and embedders never
/// depend on the wall clock; `Default` is the conventional "today, monthly"
/// starting view. Deliberately not serializable: navigation state lives
/// and dies with its owning view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodNavigator {
    reference: NaiveDate,
    granularity: Granularity,
    bounds: PeriodBounds,
}

impl PeriodNavigator {
    /// Creates a navigator anchored at `reference` under `granularity`.
    pub fn new(granularity: Granularity, reference: NaiveDate) -> Self {
        Self {
            reference,
            granularity,
            bounds: compute_bounds(granularity, reference),
        }
    }

    /// Current reference date.
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Active granularity.
    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Bounds of the currently displayed period.
    pub fn bounds(&self) -> PeriodBounds {
        self.bounds
    }

    /// Title of the currently displayed period.
    pub fn title(&self) -> String {
        period_title(&self.bounds, self.granularity, self.reference)
    }

    /// Switches granularity, keeping the reference date unchanged.
    ///
    /// Returns the recomputed bounds; the displayed period may widen or
    /// narrow but stays anchored on the same reference date.
    pub fn set_granularity(&mut self, granularity: Granularity) -> PeriodBounds {
        self.granularity = granularity;
        self.recompute("set_granularity")
    }

    /// Moves the reference date, keeping the current granularity.
    pub fn set_reference(&mut self, reference: NaiveDate) -> PeriodBounds {
        self.reference = reference;
        self.recompute("set_reference")
    }

    /// Steps one whole period backward or forward.
    ///
    /// # Contract
    /// - Month-shaped granularities step by calendar months with the day
    ///   clamped into the target month, so stepping from Jan 31 lands on
    ///   Feb 29/28, never in March.
    /// - Biweekly/weekly/daily step by fixed day counts (14/7/1), which
    ///   keeps their bounds Monday- or 1st/16th-anchored.
    /// - A `Next`/`Prev` pair always restores the previous bounds.
    pub fn step(&mut self, direction: StepDirection) -> PeriodBounds {
        let sign: i32 = match direction {
            StepDirection::Prev => -1,
            StepDirection::Next => 1,
        };
        self.reference = match self.granularity {
            Granularity::Annual => shift_months_clamped(self.reference, sign * 12),
            Granularity::Biannual => shift_months_clamped(self.reference, sign * 6),
            Granularity::FourMonth => shift_months_clamped(self.reference, sign * 4),
            Granularity::Quarterly => shift_months_clamped(self.reference, sign * 3),
            Granularity::Monthly => shift_months_clamped(self.reference, sign),
            Granularity::Biweekly => shift_days(self.reference, sign * 14),
            Granularity::Weekly => shift_days(self.reference, sign * 7),
            Granularity::Daily => shift_days(self.reference, sign),
        };
        self.recompute("step")
    }

    /// Composite day-selection transition for calendar grid clicks.
    ///
    /// Sets the reference date to the picked day and, when the interaction
    /// drills down (e.g. clicking a day in an annual view), switches to the
    /// finer granularity first. Built from the two primitive transitions.
    pub fn select_day(
        &mut self,
        day: NaiveDate,
        drill_down: Option<Granularity>,
    ) -> PeriodBounds {
        if let Some(finer) = drill_down {
            self.granularity = finer;
        }
        self.set_reference(day)
    }

    fn recompute(&mut self, event: &str) -> PeriodBounds {
        self.bounds = compute_bounds(self.granularity, self.reference);
        debug!(
            "event=period_{event} module=period granularity={} reference={} start={} end={}",
            self.granularity, self.reference, self.bounds.start, self.bounds.end
        );
        self.bounds
    }
}

impl Default for PeriodNavigator {
    /// Today under the monthly view, the conventional dashboard opener.
    fn default() -> Self {
        Self::new(Granularity::default(), Local::now().date_naive())
    }
}

/// Shifts by whole calendar months, clamping the day-of-month into the
/// target month so variable month lengths never overshoot.
fn shift_months_clamped(date: NaiveDate, delta_months: i32) -> NaiveDate {
    let linear = date.year() * 12 + date.month0() as i32 + delta_months;
    let year = linear.div_euclid(12);
    let month = linear.rem_euclid(12) as u32 + 1;
    let day = date.day().min(last_day_of_month(year, month));
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(date)
}

fn shift_days(date: NaiveDate, delta_days: i32) -> NaiveDate {
    let magnitude = Days::new(delta_days.unsigned_abs() as u64);
    let shifted = if delta_days < 0 {
        date.checked_sub_days(magnitude)
    } else {
        date.checked_add_days(magnitude)
    };
    shifted.unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::{shift_months_clamped, PeriodNavigator, StepDirection};
    use crate::period::granularity::Granularity;
    use chrono::NaiveDate;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_shift_clamps_into_short_months() {
        assert_eq!(shift_months_clamped(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(shift_months_clamped(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift_months_clamped(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(shift_months_clamped(date(2024, 1, 15), -1), date(2023, 12, 15));
    }

    #[test]
    fn set_granularity_keeps_reference() {
        let mut navigator = PeriodNavigator::new(Granularity::Monthly, date(2024, 6, 5));
        navigator.set_granularity(Granularity::Annual);
        assert_eq!(navigator.reference(), date(2024, 6, 5));
        assert_eq!(navigator.bounds().start, date(2024, 1, 1));
    }

    #[test]
    fn select_day_with_drill_down_switches_granularity() {
        let mut navigator = PeriodNavigator::new(Granularity::Annual, date(2024, 6, 5));
        let bounds = navigator.select_day(date(2024, 3, 14), Some(Granularity::Daily));
        assert_eq!(navigator.granularity(), Granularity::Daily);
        assert_eq!(bounds.start, date(2024, 3, 14));
        assert_eq!(bounds.end, date(2024, 3, 14));
    }

    #[test]
    fn step_pair_restores_bounds_from_month_end() {
        let mut navigator = PeriodNavigator::new(Granularity::Monthly, date(2024, 1, 31));
        let before = navigator.bounds();
        navigator.step(StepDirection::Next);
        navigator.step(StepDirection::Prev);
        assert_eq!(navigator.bounds(), before);
    }
}
