//! Goal repository contract and SQLite implementation.
//!
//! # Invariants
//! - `set_progress` clamps into [0.0, 1.0] and never touches
//!   `is_completed`; completion is an independent fact about the goal.

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::model::goal::{normalize_progress, Goal};
use crate::repo::{bool_to_int, now_epoch_secs, parse_db_bool, RepoResult};

const GOAL_SELECT_SQL: &str = "SELECT
    id,
    title,
    description,
    target_date,
    progress,
    is_completed,
    created_at,
    updated_at
FROM goals";

/// Repository interface for goal operations.
pub trait GoalRepository {
    /// Creates one goal with progress 0.0 and returns the stored snapshot.
    fn create(
        &self,
        title: &str,
        description: Option<&str>,
        target_date: Option<i64>,
    ) -> RepoResult<Goal>;
    /// Gets one goal by id.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<Goal>>;
    /// Lists every goal in commit order.
    fn list_all(&self) -> RepoResult<Vec<Goal>>;
    /// Sets the progress fraction. Returns `false` when the id is unknown.
    fn set_progress(&self, id: &str, progress: f64) -> RepoResult<bool>;
    /// Permanently removes the goal. Returns `false` when the id is unknown.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed goal repository.
pub struct SqliteGoalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteGoalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl GoalRepository for SqliteGoalRepository<'_> {
    fn create(
        &self,
        title: &str,
        description: Option<&str>,
        target_date: Option<i64>,
    ) -> RepoResult<Goal> {
        let now = now_epoch_secs();
        let goal = Goal {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.map(str::to_string),
            target_date,
            progress: 0.0,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        goal.validate()?;

        self.conn.execute(
            "INSERT INTO goals (
                id,
                title,
                description,
                target_date,
                progress,
                is_completed,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                goal.id,
                goal.title,
                goal.description.as_deref(),
                goal.target_date,
                goal.progress,
                bool_to_int(goal.is_completed),
                goal.created_at,
                goal.updated_at,
            ],
        )?;

        Ok(goal)
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Option<Goal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GOAL_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_goal_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Goal>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{GOAL_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut goals = Vec::new();

        while let Some(row) = rows.next()? {
            goals.push(parse_goal_row(row)?);
        }

        Ok(goals)
    }

    fn set_progress(&self, id: &str, progress: f64) -> RepoResult<bool> {
        let progress = normalize_progress(progress)?;

        let changed = self.conn.execute(
            "UPDATE goals
             SET
                progress = ?2,
                updated_at = MAX(updated_at, ?3)
             WHERE id = ?1;",
            params![id, progress, now_epoch_secs()],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM goals WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn parse_goal_row(row: &Row<'_>) -> RepoResult<Goal> {
    let is_completed = parse_db_bool(row.get("is_completed")?, "goals.is_completed")?;

    let goal = Goal {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        target_date: row.get("target_date")?,
        progress: row.get("progress")?,
        is_completed,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    goal.validate()?;
    Ok(goal)
}
