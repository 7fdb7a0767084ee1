//! Core domain logic for the aathoos embedded store.
//! This crate is the single source of truth for business invariants.

pub mod codec;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod store;

pub use codec::{decode, encode, CodecError, CodecResult};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::goal::Goal;
pub use model::note::Note;
pub use model::study_session::StudySession;
pub use model::task::{Priority, Task};
pub use model::ValidationError;
pub use repo::goal_repo::{GoalRepository, SqliteGoalRepository};
pub use repo::note_repo::{NoteRepository, SqliteNoteRepository};
pub use repo::study_session_repo::{SqliteStudySessionRepository, StudySessionRepository};
pub use repo::task_repo::{SqliteTaskRepository, TaskRepository};
pub use repo::{RepoError, RepoResult};
pub use store::Store;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
