//! Core domain logic for Cadence, a deadline dashboard.
//! This crate is the single source of truth for calendar period invariants.

pub mod logging;
pub mod model;
pub mod period;
pub mod service;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::deadline::{
    Deadline, DeadlineId, DeadlinePriority, DeadlineStatus, DeadlineValidationError,
};
pub use period::bounds::{compute_bounds, period_title, PeriodBounds};
pub use period::filter::{
    filter_by_exact_day, filter_by_range, has_any_on_date, is_within, Timestamped,
};
pub use period::granularity::{DisplayGranularity, Granularity, GranularityParseError};
pub use period::navigator::{PeriodNavigator, StepDirection};
pub use service::agenda_service::{has_marker, records_on_day, view_for, PeriodView};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
