//! Note repository contract and SQLite implementation.
//!
//! # Invariants
//! - Subject filtering is exact, case-sensitive string equality.
//! - `update_body` accepts an empty body; an empty body is a valid note.

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::model::note::Note;
use crate::repo::{now_epoch_secs, RepoResult};

const NOTE_SELECT_SQL: &str = "SELECT
    id,
    title,
    body,
    subject,
    created_at,
    updated_at
FROM notes";

/// Repository interface for note operations.
pub trait NoteRepository {
    /// Creates one note and returns the stored snapshot.
    fn create(&self, title: &str, body: &str, subject: Option<&str>) -> RepoResult<Note>;
    /// Gets one note by id.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<Note>>;
    /// Lists every note in commit order.
    fn list_all(&self) -> RepoResult<Vec<Note>>;
    /// Lists notes whose subject equals `subject` exactly.
    fn list_by_subject(&self, subject: &str) -> RepoResult<Vec<Note>>;
    /// Replaces the body. Returns `false` when the id is unknown.
    fn update_body(&self, id: &str, body: &str) -> RepoResult<bool>;
    /// Permanently removes the note. Returns `false` when the id is unknown.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed note repository.
pub struct SqliteNoteRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteNoteRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl NoteRepository for SqliteNoteRepository<'_> {
    fn create(&self, title: &str, body: &str, subject: Option<&str>) -> RepoResult<Note> {
        let now = now_epoch_secs();
        let note = Note {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            body: body.to_string(),
            subject: subject.map(str::to_string),
            created_at: now,
            updated_at: now,
        };
        note.validate()?;

        self.conn.execute(
            "INSERT INTO notes (
                id,
                title,
                body,
                subject,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                note.id,
                note.title,
                note.body,
                note.subject.as_deref(),
                note.created_at,
                note.updated_at,
            ],
        )?;

        Ok(note)
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Option<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_note_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Note>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{NOTE_SELECT_SQL} ORDER BY rowid ASC;"))?;
        collect_notes(&mut stmt, [])
    }

    fn list_by_subject(&self, subject: &str) -> RepoResult<Vec<Note>> {
        let mut stmt = self.conn.prepare(&format!(
            "{NOTE_SELECT_SQL} WHERE subject = ?1 ORDER BY rowid ASC;"
        ))?;
        collect_notes(&mut stmt, [subject])
    }

    fn update_body(&self, id: &str, body: &str) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE notes
             SET
                body = ?2,
                updated_at = MAX(updated_at, ?3)
             WHERE id = ?1;",
            params![id, body, now_epoch_secs()],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM notes WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn collect_notes<P: rusqlite::Params>(
    stmt: &mut rusqlite::Statement<'_>,
    params: P,
) -> RepoResult<Vec<Note>> {
    let mut rows = stmt.query(params)?;
    let mut notes = Vec::new();

    while let Some(row) = rows.next()? {
        notes.push(parse_note_row(row)?);
    }

    Ok(notes)
}

fn parse_note_row(row: &Row<'_>) -> RepoResult<Note> {
    let note = Note {
        id: row.get("id")?,
        title: row.get("title")?,
        body: row.get("body")?,
        subject: row.get("subject")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    note.validate()?;
    Ok(note)
}
