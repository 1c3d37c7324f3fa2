//! Domain model for dashboard records.
//!
//! # Responsibility
//! - Define the canonical data structures tracked against calendar periods.
//!
//! # Invariants
//! - Every domain object is identified by a stable UUID.
//! - Deletion is represented by soft-delete tombstones, not hard delete.
//!
//! # See also
//! - docs/architecture/period-engine.md

pub mod deadline;
