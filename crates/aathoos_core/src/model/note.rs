//! Note domain model.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Free-form text note, optionally grouped under a subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable engine-generated id, opaque to callers.
    pub id: String,
    pub title: String,
    /// May be empty; an empty body is a valid note.
    pub body: String,
    /// Exact-match grouping key; absent when the caller supplied none.
    pub subject: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Note {
    /// Checks note field invariants.
    ///
    /// # Errors
    /// - `EmptyField` when the title is empty or whitespace-only.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "note",
                field: "title",
            });
        }
        Ok(())
    }
}
