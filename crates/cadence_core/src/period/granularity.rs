//! Period granularity vocabulary.
//!
//! # Responsibility
//! - Define the closed set of period lengths the engine understands.
//! - Derive the calendar-widget grid (`DisplayGranularity`) from it.
//!
//! # Invariants
//! - The enumeration is closed: callers cannot extend it, and parsing
//!   rejects unknown names before they reach period arithmetic.
//! - `DisplayGranularity` is always derived, never set independently.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Fixed period lengths selectable by the caller.
///
/// Coarse granularities (`Annual` through `Quarterly`) bucket the year into
/// fixed slices; fine granularities (`Monthly` through `Daily`) follow the
/// month/week/day calendar directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    /// Whole calendar year.
    Annual,
    /// Half-year: Jan–Jun or Jul–Dec.
    Biannual,
    /// Four-month slice: Jan–Apr, May–Aug or Sep–Dec.
    FourMonth,
    /// Calendar quarter.
    Quarterly,
    /// Whole calendar month.
    Monthly,
    /// Half-month: days 1–15, or 16 to end of month.
    Biweekly,
    /// ISO week, Monday through Sunday.
    Weekly,
    /// Single calendar day.
    Daily,
}

/// Which calendar grid a widget should render for a granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayGranularity {
    /// Day-cell grid covering one month.
    Month,
    /// Month-cell grid covering one year.
    Year,
}

impl Granularity {
    /// All granularities, coarsest first. Useful for UI pickers and for
    /// exhaustive property tests.
    pub const ALL: [Granularity; 8] = [
        Granularity::Annual,
        Granularity::Biannual,
        Granularity::FourMonth,
        Granularity::Quarterly,
        Granularity::Monthly,
        Granularity::Biweekly,
        Granularity::Weekly,
        Granularity::Daily,
    ];

    /// Returns the calendar grid appropriate for this granularity.
    ///
    /// Periods of a month or shorter fit inside a month grid; anything
    /// coarser needs the year grid.
    pub fn display_granularity(self) -> DisplayGranularity {
        match self {
            Granularity::Annual
            | Granularity::Biannual
            | Granularity::FourMonth
            | Granularity::Quarterly => DisplayGranularity::Year,
            Granularity::Monthly
            | Granularity::Biweekly
            | Granularity::Weekly
            | Granularity::Daily => DisplayGranularity::Month,
        }
    }

    /// Stable wire name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Granularity::Annual => "annual",
            Granularity::Biannual => "biannual",
            Granularity::FourMonth => "four_month",
            Granularity::Quarterly => "quarterly",
            Granularity::Monthly => "monthly",
            Granularity::Biweekly => "biweekly",
            Granularity::Weekly => "weekly",
            Granularity::Daily => "daily",
        }
    }
}

impl Default for Granularity {
    /// Dashboard views open on the current month.
    fn default() -> Self {
        Granularity::Monthly
    }
}

impl Display for Granularity {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejection for granularity names outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GranularityParseError {
    input: String,
}

impl Display for GranularityParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unknown granularity `{}`; expected one of annual|biannual|four_month|quarterly|monthly|biweekly|weekly|daily",
            self.input
        )
    }
}

impl Error for GranularityParseError {}

impl FromStr for Granularity {
    type Err = GranularityParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "annual" => Ok(Granularity::Annual),
            "biannual" => Ok(Granularity::Biannual),
            "four_month" | "fourmonth" => Ok(Granularity::FourMonth),
            "quarterly" => Ok(Granularity::Quarterly),
            "monthly" => Ok(Granularity::Monthly),
            "biweekly" => Ok(Granularity::Biweekly),
            "weekly" => Ok(Granularity::Weekly),
            "daily" => Ok(Granularity::Daily),
            other => Err(GranularityParseError {
                input: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{DisplayGranularity, Granularity};
    use std::str::FromStr;

    #[test]
    fn parse_round_trips_every_wire_name() {
        for granularity in Granularity::ALL {
            let parsed = Granularity::from_str(granularity.as_str()).unwrap();
            assert_eq!(parsed, granularity);
        }
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = Granularity::from_str("fortnightly").unwrap_err();
        assert!(err.to_string().contains("fortnightly"));
    }

    #[test]
    fn display_granularity_splits_at_month() {
        assert_eq!(
            Granularity::Quarterly.display_granularity(),
            DisplayGranularity::Year
        );
        assert_eq!(
            Granularity::Monthly.display_granularity(),
            DisplayGranularity::Month
        );
        assert_eq!(
            Granularity::Daily.display_granularity(),
            DisplayGranularity::Month
        );
    }
}
