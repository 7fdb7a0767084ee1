//! Task domain model.
//!
//! # Responsibility
//! - Define the task record shape shared by persistence and the boundary.
//! - Validate task field invariants before writes.
//!
//! # Invariants
//! - `id` and `created_at` never change after creation.
//! - `updated_at` is non-decreasing across mutations.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Task urgency level.
///
/// Crosses the call boundary as its integer discriminant
/// (`0` = Low, `1` = Medium, `2` = High), so the wire encoding stays
/// language-neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl From<i64> for Priority {
    /// Maps a raw discriminant to a priority, clamping out-of-range input.
    fn from(value: i64) -> Self {
        match value {
            i64::MIN..=0 => Self::Low,
            1 => Self::Medium,
            _ => Self::High,
        }
    }
}

impl From<Priority> for i64 {
    fn from(value: Priority) -> Self {
        match value {
            Priority::Low => 0,
            Priority::Medium => 1,
            Priority::High => 2,
        }
    }
}

/// One actionable to-do item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable engine-generated id, opaque to callers.
    pub id: String,
    pub title: String,
    /// Free-form annotation, absent when the caller supplied none.
    pub notes: Option<String>,
    /// Epoch seconds; absent for tasks without a deadline.
    pub due_date: Option<i64>,
    pub priority: Priority,
    pub is_completed: bool,
    /// Epoch seconds, set once at creation.
    pub created_at: i64,
    /// Epoch seconds, advanced on every mutation.
    pub updated_at: i64,
}

impl Task {
    /// Checks task field invariants.
    ///
    /// # Errors
    /// - `EmptyField` when the title is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "task",
                field: "title",
            });
        }
        Ok(())
    }
}
