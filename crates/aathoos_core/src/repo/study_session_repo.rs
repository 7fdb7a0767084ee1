//! Study session repository contract and SQLite implementation.
//!
//! # Invariants
//! - Sessions are append-only: create, read, aggregate, delete. No updates.
//! - Subject filtering and aggregation use exact, case-sensitive equality.
//! - `total_duration_for_subject` returns 0 when nothing matches; absence
//!   of data is a valid zero total, not an error.

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::model::study_session::StudySession;
use crate::repo::{now_epoch_secs, RepoResult};

const SESSION_SELECT_SQL: &str = "SELECT
    id,
    subject,
    duration_secs,
    notes,
    started_at
FROM study_sessions";

/// Repository interface for study session operations.
pub trait StudySessionRepository {
    /// Records one session and returns the stored snapshot.
    fn create(&self, subject: &str, duration_secs: i64, notes: Option<&str>)
        -> RepoResult<StudySession>;
    /// Gets one session by id.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<StudySession>>;
    /// Lists every session in commit order.
    fn list_all(&self) -> RepoResult<Vec<StudySession>>;
    /// Lists sessions whose subject equals `subject` exactly.
    fn list_by_subject(&self, subject: &str) -> RepoResult<Vec<StudySession>>;
    /// Sums `duration_secs` across sessions with the given subject.
    fn total_duration_for_subject(&self, subject: &str) -> RepoResult<i64>;
    /// Permanently removes the session. Returns `false` when the id is unknown.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed study session repository.
pub struct SqliteStudySessionRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudySessionRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl StudySessionRepository for SqliteStudySessionRepository<'_> {
    fn create(
        &self,
        subject: &str,
        duration_secs: i64,
        notes: Option<&str>,
    ) -> RepoResult<StudySession> {
        let session = StudySession {
            id: Uuid::new_v4().to_string(),
            subject: subject.to_string(),
            duration_secs,
            notes: notes.map(str::to_string),
            started_at: now_epoch_secs(),
        };
        session.validate()?;

        self.conn.execute(
            "INSERT INTO study_sessions (
                id,
                subject,
                duration_secs,
                notes,
                started_at
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                session.id,
                session.subject,
                session.duration_secs,
                session.notes.as_deref(),
                session.started_at,
            ],
        )?;

        Ok(session)
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Option<StudySession>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SESSION_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_session_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<StudySession>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{SESSION_SELECT_SQL} ORDER BY rowid ASC;"))?;
        collect_sessions(&mut stmt, [])
    }

    fn list_by_subject(&self, subject: &str) -> RepoResult<Vec<StudySession>> {
        let mut stmt = self.conn.prepare(&format!(
            "{SESSION_SELECT_SQL} WHERE subject = ?1 ORDER BY rowid ASC;"
        ))?;
        collect_sessions(&mut stmt, [subject])
    }

    fn total_duration_for_subject(&self, subject: &str) -> RepoResult<i64> {
        let total = self.conn.query_row(
            "SELECT COALESCE(SUM(duration_secs), 0)
             FROM study_sessions
             WHERE subject = ?1;",
            [subject],
            |row| row.get::<_, i64>(0),
        )?;
        Ok(total)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM study_sessions WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn collect_sessions<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> RepoResult<Vec<StudySession>> {
    let mut rows = stmt.query(params)?;
    let mut sessions = Vec::new();

    while let Some(row) = rows.next()? {
        sessions.push(parse_session_row(row)?);
    }

    Ok(sessions)
}

fn parse_session_row(row: &Row<'_>) -> RepoResult<StudySession> {
    let session = StudySession {
        id: row.get("id")?,
        subject: row.get("subject")?,
        duration_secs: row.get("duration_secs")?,
        notes: row.get("notes")?,
        started_at: row.get("started_at")?,
    };
    session.validate()?;
    Ok(session)
}
