//! Deadline domain model.
//!
//! # Responsibility
//! - Define the canonical record the dashboard tracks against periods.
//! - Provide lifecycle helpers for soft-delete semantics.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another deadline.
//! - `is_deleted` is the source of truth for tombstone state.
//! - `title` is never empty for a validated deadline.

use chrono::{Datelike, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::period::filter::Timestamped;

/// Stable identifier for a deadline record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type DeadlineId = Uuid;

/// Workflow state of a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlineStatus {
    /// Created but not started.
    New,
    /// Work is in progress.
    InProgress,
    /// Blocked on something external.
    OnHold,
    /// Completed successfully.
    Completed,
    /// No longer actionable.
    Cancelled,
}

impl DeadlineStatus {
    /// Nominal completion fraction used by progress displays.
    ///
    /// Cancelled maps to a negative sentinel so aggregations can exclude
    /// it without a separate status check.
    pub fn progress_fraction(self) -> f32 {
        match self {
            DeadlineStatus::New => 0.0,
            DeadlineStatus::InProgress => 0.5,
            DeadlineStatus::OnHold => 0.3,
            DeadlineStatus::Completed => 1.0,
            DeadlineStatus::Cancelled => -1.0,
        }
    }

    /// Whether the deadline still needs work.
    pub fn is_open(self) -> bool {
        matches!(
            self,
            DeadlineStatus::New | DeadlineStatus::InProgress | DeadlineStatus::OnHold
        )
    }
}

/// Urgency level of a deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeadlinePriority {
    Low,
    Medium,
    High,
    Critical,
}

impl DeadlinePriority {
    /// Numeric weight for scoring, low to critical.
    pub fn weight(self) -> u8 {
        match self {
            DeadlinePriority::Low => 1,
            DeadlinePriority::Medium => 2,
            DeadlinePriority::High => 3,
            DeadlinePriority::Critical => 4,
        }
    }
}

impl Default for DeadlinePriority {
    fn default() -> Self {
        DeadlinePriority::Medium
    }
}

/// Validation failures for deadline construction and updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeadlineValidationError {
    /// Nil UUID cannot serve as a stable identity.
    NilUuid,
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for DeadlineValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "deadline uuid must not be nil"),
            Self::EmptyTitle => write!(f, "deadline title must not be empty"),
        }
    }
}

impl Error for DeadlineValidationError {}

/// Canonical deadline record.
///
/// Project linkage and description stay optional so the same shape serves
/// standalone reminders and project-bound milestones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deadline {
    /// Stable global ID used for linking and auditing.
    pub uuid: DeadlineId,
    /// Short human-readable label. Never empty after validation.
    pub title: String,
    /// Optional free-form details.
    pub description: Option<String>,
    /// The due instant, in local calendar terms.
    pub due_at: NaiveDateTime,
    /// Workflow state.
    pub status: DeadlineStatus,
    /// Urgency level.
    pub priority: DeadlinePriority,
    /// Owning project, when the deadline is project-bound.
    pub project_id: Option<Uuid>,
    /// Soft delete tombstone to preserve history.
    pub is_deleted: bool,
}

impl Deadline {
    /// Creates a new deadline with a generated stable ID.
    ///
    /// # Errors
    /// - [`DeadlineValidationError::EmptyTitle`] when `title` is blank.
    pub fn new(
        title: impl Into<String>,
        due_at: NaiveDateTime,
    ) -> Result<Self, DeadlineValidationError> {
        Self::with_id(Uuid::new_v4(), title, due_at)
    }

    /// Creates a deadline with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    ///
    /// # Errors
    /// - [`DeadlineValidationError::NilUuid`] for the nil UUID.
    /// - [`DeadlineValidationError::EmptyTitle`] when `title` is blank.
    pub fn with_id(
        uuid: DeadlineId,
        title: impl Into<String>,
        due_at: NaiveDateTime,
    ) -> Result<Self, DeadlineValidationError> {
        let deadline = Self {
            uuid,
            title: title.into(),
            description: None,
            due_at,
            status: DeadlineStatus::New,
            priority: DeadlinePriority::default(),
            project_id: None,
            is_deleted: false,
        };
        deadline.validate()?;
        Ok(deadline)
    }

    /// Checks structural invariants.
    pub fn validate(&self) -> Result<(), DeadlineValidationError> {
        if self.uuid.is_nil() {
            return Err(DeadlineValidationError::NilUuid);
        }
        if self.title.trim().is_empty() {
            return Err(DeadlineValidationError::EmptyTitle);
        }
        Ok(())
    }

    /// Whether the due instant has already passed at `now`.
    ///
    /// Completed and cancelled deadlines are never reported overdue.
    pub fn is_overdue(&self, now: NaiveDateTime) -> bool {
        self.status.is_open() && self.due_at < now
    }

    /// Whether the deadline falls on a Saturday or Sunday.
    pub fn is_weekend_due(&self) -> bool {
        matches!(self.due_at.weekday(), Weekday::Sat | Weekday::Sun)
    }

    /// Marks this deadline as softly deleted (tombstoned).
    pub fn soft_delete(&mut self) {
        self.is_deleted = true;
    }

    /// Clears the soft delete flag.
    pub fn restore(&mut self) {
        self.is_deleted = false;
    }

    /// Returns whether this deadline should be considered visible/active.
    pub fn is_active(&self) -> bool {
        !self.is_deleted
    }
}

impl Timestamped for Deadline {
    fn occurs_at(&self) -> NaiveDateTime {
        self.due_at
    }
}
