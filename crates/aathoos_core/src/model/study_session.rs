//! Study session domain model.
//!
//! Sessions are append-only: beyond deletion there is no update operation,
//! and `duration_secs` is immutable once recorded.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// One completed block of study time for a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    /// Stable engine-generated id, opaque to callers.
    pub id: String,
    pub subject: String,
    /// Length of the session in seconds, never negative.
    pub duration_secs: i64,
    pub notes: Option<String>,
    /// Epoch seconds, set once when the session is recorded.
    pub started_at: i64,
}

impl StudySession {
    /// Checks session field invariants.
    ///
    /// # Errors
    /// - `EmptyField` when the subject is empty or whitespace-only.
    /// - `NegativeDuration` when the duration is below zero.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "study session",
                field: "subject",
            });
        }
        if self.duration_secs < 0 {
            return Err(ValidationError::NegativeDuration(self.duration_secs));
        }
        Ok(())
    }
}
