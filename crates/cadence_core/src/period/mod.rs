//! Calendar period engine.
//!
//! # Responsibility
//! - Compute inclusive period bounds for the eight supported granularities.
//! - Filter timestamped records against a displayed period.
//! - Drive prev/next/set-date navigation for one calendar view.
//!
//! # Invariants
//! - Everything here is pure computation over in-memory values; no I/O,
//!   no wall-clock reads outside `PeriodNavigator::default`.
//! - All boundary comparisons are inclusive and day-granular.
//!
//! # See also
//! - docs/architecture/period-engine.md

pub mod bounds;
pub mod filter;
pub mod granularity;
pub mod navigator;
