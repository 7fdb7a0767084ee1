//! Task repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `tasks` collection.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `list_all` and `list_incomplete` share one ordering: commit order
//!   (`rowid ASC`), with no derived sort by date or priority.
//! - Every mutation advances `updated_at` without ever decreasing it.

use rusqlite::{params, Connection, Row};
use uuid::Uuid;

use crate::model::task::{Priority, Task};
use crate::model::ValidationError;
use crate::repo::{bool_to_int, now_epoch_secs, parse_db_bool, RepoError, RepoResult};

const TASK_SELECT_SQL: &str = "SELECT
    id,
    title,
    notes,
    due_date,
    priority,
    is_completed,
    created_at,
    updated_at
FROM tasks";

/// Repository interface for task operations.
pub trait TaskRepository {
    /// Creates one task and returns the stored snapshot.
    fn create(
        &self,
        title: &str,
        notes: Option<&str>,
        due_date: Option<i64>,
        priority: Priority,
    ) -> RepoResult<Task>;
    /// Gets one task by id.
    fn get_by_id(&self, id: &str) -> RepoResult<Option<Task>>;
    /// Lists every task in commit order.
    fn list_all(&self) -> RepoResult<Vec<Task>>;
    /// Lists incomplete tasks, preserving `list_all` relative order.
    fn list_incomplete(&self) -> RepoResult<Vec<Task>>;
    /// Sets the completion flag. Returns `false` when the id is unknown.
    fn set_completed(&self, id: &str, completed: bool) -> RepoResult<bool>;
    /// Replaces the title. Returns `false` when the id is unknown.
    fn update_title(&self, id: &str, title: &str) -> RepoResult<bool>;
    /// Permanently removes the task. Returns `false` when the id is unknown.
    fn delete(&self, id: &str) -> RepoResult<bool>;
}

/// SQLite-backed task repository.
pub struct SqliteTaskRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTaskRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl TaskRepository for SqliteTaskRepository<'_> {
    fn create(
        &self,
        title: &str,
        notes: Option<&str>,
        due_date: Option<i64>,
        priority: Priority,
    ) -> RepoResult<Task> {
        let now = now_epoch_secs();
        let task = Task {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            notes: notes.map(str::to_string),
            due_date,
            priority,
            is_completed: false,
            created_at: now,
            updated_at: now,
        };
        task.validate()?;

        self.conn.execute(
            "INSERT INTO tasks (
                id,
                title,
                notes,
                due_date,
                priority,
                is_completed,
                created_at,
                updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                task.id,
                task.title,
                task.notes.as_deref(),
                task.due_date,
                i64::from(task.priority),
                bool_to_int(task.is_completed),
                task.created_at,
                task.updated_at,
            ],
        )?;

        Ok(task)
    }

    fn get_by_id(&self, id: &str) -> RepoResult<Option<Task>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{TASK_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query([id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_task_row(row)?));
        }

        Ok(None)
    }

    fn list_all(&self) -> RepoResult<Vec<Task>> {
        collect_tasks(self.conn, &format!("{TASK_SELECT_SQL} ORDER BY rowid ASC;"))
    }

    fn list_incomplete(&self) -> RepoResult<Vec<Task>> {
        collect_tasks(
            self.conn,
            &format!("{TASK_SELECT_SQL} WHERE is_completed = 0 ORDER BY rowid ASC;"),
        )
    }

    fn set_completed(&self, id: &str, completed: bool) -> RepoResult<bool> {
        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                is_completed = ?2,
                updated_at = MAX(updated_at, ?3)
             WHERE id = ?1;",
            params![id, bool_to_int(completed), now_epoch_secs()],
        )?;

        Ok(changed > 0)
    }

    fn update_title(&self, id: &str, title: &str) -> RepoResult<bool> {
        if title.trim().is_empty() {
            return Err(ValidationError::EmptyField {
                record: "task",
                field: "title",
            }
            .into());
        }

        let changed = self.conn.execute(
            "UPDATE tasks
             SET
                title = ?2,
                updated_at = MAX(updated_at, ?3)
             WHERE id = ?1;",
            params![id, title, now_epoch_secs()],
        )?;

        Ok(changed > 0)
    }

    fn delete(&self, id: &str) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM tasks WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn collect_tasks(conn: &Connection, sql: &str) -> RepoResult<Vec<Task>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query([])?;
    let mut tasks = Vec::new();

    while let Some(row) = rows.next()? {
        tasks.push(parse_task_row(row)?);
    }

    Ok(tasks)
}

fn parse_task_row(row: &Row<'_>) -> RepoResult<Task> {
    let priority_raw: i64 = row.get("priority")?;
    let priority = parse_priority(priority_raw).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid priority value `{priority_raw}` in tasks.priority"
        ))
    })?;
    let is_completed = parse_db_bool(row.get("is_completed")?, "tasks.is_completed")?;

    let task = Task {
        id: row.get("id")?,
        title: row.get("title")?,
        notes: row.get("notes")?,
        due_date: row.get("due_date")?,
        priority,
        is_completed,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    };
    task.validate()?;
    Ok(task)
}

fn parse_priority(value: i64) -> Option<Priority> {
    match value {
        0 => Some(Priority::Low),
        1 => Some(Priority::Medium),
        2 => Some(Priority::High),
        _ => None,
    }
}
