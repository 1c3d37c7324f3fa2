use cadence_core::{compute_bounds, Granularity, PeriodNavigator, StepDirection};
use chrono::{Datelike, NaiveDate};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn bounds_invariant_holds_after_every_transition() {
    let mut navigator = PeriodNavigator::new(Granularity::Weekly, date(2024, 6, 5));
    assert_eq!(
        navigator.bounds(),
        compute_bounds(navigator.granularity(), navigator.reference())
    );

    navigator.set_granularity(Granularity::Quarterly);
    assert_eq!(
        navigator.bounds(),
        compute_bounds(Granularity::Quarterly, date(2024, 6, 5))
    );

    navigator.set_reference(date(2023, 11, 2));
    assert_eq!(
        navigator.bounds(),
        compute_bounds(Granularity::Quarterly, date(2023, 11, 2))
    );

    navigator.step(StepDirection::Next);
    assert_eq!(
        navigator.bounds(),
        compute_bounds(navigator.granularity(), navigator.reference())
    );
}

#[test]
fn step_round_trip_restores_bounds_for_every_granularity() {
    // Awkward anchors: month ends, leap day, year edges.
    let anchors = [
        date(2024, 1, 31),
        date(2024, 2, 29),
        date(2024, 5, 31),
        date(2024, 12, 31),
        date(2023, 1, 1),
        date(2024, 8, 15),
    ];
    for granularity in Granularity::ALL {
        for anchor in anchors {
            let mut navigator = PeriodNavigator::new(granularity, anchor);
            let before = navigator.bounds();

            navigator.step(StepDirection::Next);
            navigator.step(StepDirection::Prev);
            assert_eq!(
                navigator.bounds(),
                before,
                "{granularity} next/prev from {anchor} must restore bounds"
            );

            navigator.step(StepDirection::Prev);
            navigator.step(StepDirection::Next);
            assert_eq!(
                navigator.bounds(),
                before,
                "{granularity} prev/next from {anchor} must restore bounds"
            );
        }
    }
}

#[test]
fn monthly_step_from_january_31_lands_in_february() {
    let mut navigator = PeriodNavigator::new(Granularity::Monthly, date(2024, 1, 31));
    assert_eq!(navigator.bounds().end, date(2024, 1, 31));

    let bounds = navigator.step(StepDirection::Next);
    assert_eq!(navigator.reference().month(), 2);
    assert_eq!(bounds.start, date(2024, 2, 1));
    assert_eq!(bounds.end, date(2024, 2, 29));
}

#[test]
fn annual_step_covers_adjacent_years() {
    let mut navigator = PeriodNavigator::new(Granularity::Annual, date(2024, 2, 29));
    let next = navigator.step(StepDirection::Next);
    assert_eq!(next.start, date(2025, 1, 1));
    assert_eq!(next.end, date(2025, 12, 31));

    let back = navigator.step(StepDirection::Prev);
    assert_eq!(back.start, date(2024, 1, 1));
    assert_eq!(back.end, date(2024, 12, 31));
}

#[test]
fn biweekly_step_keeps_half_month_anchors() {
    let mut navigator = PeriodNavigator::new(Granularity::Biweekly, date(2024, 6, 20));
    assert_eq!(navigator.bounds().start, date(2024, 6, 16));

    let next = navigator.step(StepDirection::Next);
    // 14 days ahead of Jun 20 is Jul 4, inside July's first half.
    assert_eq!(next.start, date(2024, 7, 1));
    assert_eq!(next.end, date(2024, 7, 15));
}

#[test]
fn weekly_step_moves_exactly_one_iso_week() {
    let mut navigator = PeriodNavigator::new(Granularity::Weekly, date(2024, 6, 5));
    let next = navigator.step(StepDirection::Next);
    assert_eq!(next.start, date(2024, 6, 10));
    assert_eq!(next.end, date(2024, 6, 16));
}

#[test]
fn quarterly_step_crosses_year_boundary() {
    let mut navigator = PeriodNavigator::new(Granularity::Quarterly, date(2024, 11, 15));
    let next = navigator.step(StepDirection::Next);
    assert_eq!(next.start, date(2025, 1, 1));
    assert_eq!(next.end, date(2025, 3, 31));
}

#[test]
fn set_granularity_never_moves_the_reference() {
    let mut navigator = PeriodNavigator::new(Granularity::Daily, date(2024, 8, 15));
    for granularity in Granularity::ALL {
        navigator.set_granularity(granularity);
        assert_eq!(navigator.reference(), date(2024, 8, 15));
    }
}

#[test]
fn select_day_drills_down_from_annual_view() {
    let mut navigator = PeriodNavigator::new(Granularity::Annual, date(2024, 6, 1));
    navigator.select_day(date(2024, 10, 9), Some(Granularity::Monthly));
    assert_eq!(navigator.granularity(), Granularity::Monthly);
    assert_eq!(navigator.reference(), date(2024, 10, 9));
    assert_eq!(navigator.bounds().start, date(2024, 10, 1));
    assert_eq!(navigator.bounds().end, date(2024, 10, 31));
}

#[test]
fn select_day_without_drill_down_keeps_granularity() {
    let mut navigator = PeriodNavigator::new(Granularity::Weekly, date(2024, 6, 5));
    navigator.select_day(date(2024, 6, 12), None);
    assert_eq!(navigator.granularity(), Granularity::Weekly);
    assert_eq!(navigator.bounds().start, date(2024, 6, 10));
}
