use aathoos_core::db::migrations::{latest_version, schema_version};
use aathoos_core::db::{open_db, open_db_in_memory, DbError};
use aathoos_core::{Priority, SqliteTaskRepository, Store, TaskRepository};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    assert_table_exists(&conn, "tasks");
    assert_table_exists(&conn, "notes");
    assert_table_exists(&conn, "goals");
    assert_table_exists(&conn, "study_sessions");
}

#[test]
fn opening_same_database_twice_is_idempotent_and_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("aathoos.db");

    let task_id = {
        let store = Store::open(&path).unwrap();
        let conn = store.conn();
        let repo = SqliteTaskRepository::new(&conn);
        repo.create("survives reopen", None, None, Priority::Low)
            .unwrap()
            .id
    };

    let store = Store::open(&path).unwrap();
    let conn = store.conn();
    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let repo = SqliteTaskRepository::new(&conn);
    let fetched = repo.get_by_id(&task_id).unwrap().unwrap();
    assert_eq!(fetched.title, "survives reopen");
}

#[test]
fn open_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("deeper").join("aathoos.db");

    let store = Store::open(&path).unwrap();
    drop(store);
    assert!(path.exists());
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn assert_table_exists(conn: &Connection, table: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [table],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table `{table}` should exist");
}
