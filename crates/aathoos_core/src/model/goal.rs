//! Goal domain model.
//!
//! # Invariants
//! - `progress` stays within [0.0, 1.0].
//! - `is_completed` is independent of `progress`; reaching 1.0 does not
//!   complete the goal by itself.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Long-running objective with a progress fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    /// Stable engine-generated id, opaque to callers.
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Epoch seconds; absent for open-ended goals.
    pub target_date: Option<i64>,
    /// Fraction complete in [0.0, 1.0]. Starts at 0.0.
    pub progress: f64,
    pub is_completed: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Goal {
    /// Checks goal field invariants.
    ///
    /// # Errors
    /// - `EmptyField` when the title is empty or whitespace-only.
    /// - `NonFiniteProgress` / `ProgressOutOfRange` for a progress value
    ///   outside its domain.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "goal",
                field: "title",
            });
        }
        if !self.progress.is_finite() {
            return Err(ValidationError::NonFiniteProgress(self.progress));
        }
        if !(0.0..=1.0).contains(&self.progress) {
            return Err(ValidationError::ProgressOutOfRange(self.progress));
        }
        Ok(())
    }
}

/// Normalizes a caller-supplied progress value into the goal domain.
///
/// Finite values are clamped into [0.0, 1.0]; NaN and infinities are
/// rejected because they have no meaningful clamp target.
pub fn normalize_progress(value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteProgress(value));
    }
    Ok(value.clamp(0.0, 1.0))
}
