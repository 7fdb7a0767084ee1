//! Typed record definitions for the four entity kinds.
//!
//! # Responsibility
//! - Define the canonical data structures persisted by the store.
//! - Enforce per-kind field invariants before anything reaches storage.
//!
//! # Invariants
//! - Every record is identified by an engine-generated, caller-opaque id.
//! - Timestamps are epoch seconds assigned by the engine, never by callers.
//! - Write paths must call `validate()` before SQL mutations.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod goal;
pub mod note;
pub mod study_session;
pub mod task;

/// Field-level invariant violation detected before persistence.
#[derive(Debug)]
pub enum ValidationError {
    /// A required text field is empty or whitespace-only.
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    /// Study session duration below zero.
    NegativeDuration(i64),
    /// Goal progress is NaN or infinite and cannot be clamped.
    NonFiniteProgress(f64),
    /// Goal progress stored outside its [0.0, 1.0] domain.
    ProgressOutOfRange(f64),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField { record, field } => {
                write!(f, "{record} {field} must not be empty")
            }
            Self::NegativeDuration(value) => {
                write!(f, "study session duration must be >= 0, got {value}")
            }
            Self::NonFiniteProgress(value) => {
                write!(f, "goal progress must be finite, got {value}")
            }
            Self::ProgressOutOfRange(value) => {
                write!(f, "goal progress must be within [0.0, 1.0], got {value}")
            }
        }
    }
}

impl Error for ValidationError {}
