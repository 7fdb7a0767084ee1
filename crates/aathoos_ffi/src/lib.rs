//! C call boundary for the aathoos core store.
//!
//! # Responsibility
//! - Expose the fixed operation set to Swift (macOS), C# (Windows), and any
//!   other FFI-capable caller.
//! - Own the transfer-of-ownership contract for returned buffers and the
//!   store handle lifecycle.
//!
//! # Invariants
//! - Exported functions never panic or unwind across the boundary.
//! - Payload calls return a freshly allocated NUL-terminated JSON buffer;
//!   the caller releases it with `aathoos_free_string`, exactly once.
//!   Returned buffers never alias engine-owned storage.
//! - Failures are value-encoded: NULL for payload calls, `false` for action
//!   calls, `-1` for the duration aggregate. No error channel exists.
//! - NULL pointer arguments mean "absent" and are never dereferenced.
//! - This crate only marshals; every operation delegates to `aathoos_core`.

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

use aathoos_core::codec::CodecResult;
use aathoos_core::{
    core_version, encode, init_logging, GoalRepository, NoteRepository, Priority, RepoResult,
    SqliteGoalRepository, SqliteNoteRepository, SqliteStudySessionRepository,
    SqliteTaskRepository, Store, StudySessionRepository, TaskRepository,
};
use log::error;

// ---- marshaling helpers ----

/// Borrows a `&str` from a nullable C string pointer.
///
/// NULL and non-UTF-8 input both read as "absent".
unsafe fn opt_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        None
    } else {
        CStr::from_ptr(ptr).to_str().ok()
    }
}

/// Borrows a `&str` from a nullable C string pointer, reading NULL as `""`.
unsafe fn str_or_empty<'a>(ptr: *const c_char) -> &'a str {
    opt_str(ptr).unwrap_or("")
}

/// Hands an encoded payload to the caller as an owned C string.
fn into_payload(encoded: CodecResult<String>) -> *mut c_char {
    let json = match encoded {
        Ok(json) => json,
        Err(err) => {
            error!("event=boundary_encode module=ffi status=error error={err}");
            return ptr::null_mut();
        }
    };
    match CString::new(json) {
        Ok(buffer) => buffer.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Collapses an engine result to the boundary vocabulary, logging the
/// error detail the contract has no channel for.
fn ok_or_log<T>(op: &'static str, result: RepoResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            error!("event=store_call module=ffi op={op} status=error error={err}");
            None
        }
    }
}

// ---- lifecycle ----

/// Opens (or creates) the store at `path`, creating parent directories as
/// needed. Returns an opaque handle, or NULL on failure.
/// The caller must close the handle with `aathoos_db_close`.
#[no_mangle]
pub extern "C" fn aathoos_db_open(path: *const c_char) -> *mut Store {
    let Some(path) = (unsafe { opt_str(path) }) else {
        return ptr::null_mut();
    };
    match Store::open(path) {
        Ok(store) => Box::into_raw(Box::new(store)),
        Err(err) => {
            error!("event=store_open module=ffi status=error error={err}");
            ptr::null_mut()
        }
    }
}

/// Closes and frees a handle obtained from `aathoos_db_open`.
#[no_mangle]
pub extern "C" fn aathoos_db_close(db: *mut Store) {
    if !db.is_null() {
        drop(unsafe { Box::from_raw(db) });
    }
}

/// Frees a C string returned by any function in this library.
#[no_mangle]
pub extern "C" fn aathoos_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(unsafe { CString::from_raw(ptr) });
    }
}

/// Returns the core crate version as an owned C string
/// (release with `aathoos_free_string`).
#[no_mangle]
pub extern "C" fn aathoos_core_version() -> *mut c_char {
    match CString::new(core_version()) {
        Ok(buffer) => buffer.into_raw(),
        Err(_) => ptr::null_mut(),
    }
}

/// Initializes file logging once per process. Idempotent for identical
/// `level + log_dir`; reconfiguration attempts return false.
#[no_mangle]
pub extern "C" fn aathoos_logging_init(level: *const c_char, log_dir: *const c_char) -> bool {
    let Some(level) = (unsafe { opt_str(level) }) else {
        return false;
    };
    let Some(log_dir) = (unsafe { opt_str(log_dir) }) else {
        return false;
    };
    init_logging(level, log_dir).is_ok()
}

// ---- tasks ----

/// Creates a task. `notes` may be NULL; `due_date = 0` means no due date;
/// `priority`: 0 = Low, 1 = Medium, 2 = High (out-of-range input clamps).
/// Returns JSON Task, or NULL on error.
#[no_mangle]
pub extern "C" fn aathoos_task_create(
    db: *mut Store,
    title: *const c_char,
    notes: *const c_char,
    due_date: i64,
    priority: i32,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(title) = (unsafe { opt_str(title) }) else {
        return ptr::null_mut();
    };
    let notes = unsafe { opt_str(notes) };
    let due_date = (due_date != 0).then_some(due_date);
    let priority = Priority::from(i64::from(priority));

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    match ok_or_log("task_create", repo.create(title, notes, due_date, priority)) {
        Some(task) => into_payload(encode(&task)),
        None => ptr::null_mut(),
    }
}

/// Returns JSON Task for the given id, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_task_get(db: *mut Store, id: *const c_char) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    match ok_or_log("task_get", repo.get_by_id(id)).flatten() {
        Some(task) => into_payload(encode(&task)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of all tasks in commit order, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_task_list_all(db: *mut Store) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    match ok_or_log("task_list_all", repo.list_all()) {
        Some(tasks) => into_payload(encode(&tasks)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of incomplete tasks, preserving list order, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_task_list_incomplete(db: *mut Store) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    match ok_or_log("task_list_incomplete", repo.list_incomplete()) {
        Some(tasks) => into_payload(encode(&tasks)),
        None => ptr::null_mut(),
    }
}

/// Marks a task complete or incomplete. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_task_set_completed(
    db: *mut Store,
    id: *const c_char,
    completed: bool,
) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    ok_or_log("task_set_completed", repo.set_completed(id, completed)).unwrap_or(false)
}

/// Updates a task's title. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_task_update_title(
    db: *mut Store,
    id: *const c_char,
    title: *const c_char,
) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };
    let title = unsafe { str_or_empty(title) };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    ok_or_log("task_update_title", repo.update_title(id, title)).unwrap_or(false)
}

/// Deletes a task. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_task_delete(db: *mut Store, id: *const c_char) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteTaskRepository::new(&conn);
    ok_or_log("task_delete", repo.delete(id)).unwrap_or(false)
}

// ---- notes ----

/// Creates a note. `body` may be NULL (reads as empty); `subject` may be
/// NULL. Returns JSON Note, or NULL on error.
#[no_mangle]
pub extern "C" fn aathoos_note_create(
    db: *mut Store,
    title: *const c_char,
    body: *const c_char,
    subject: *const c_char,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(title) = (unsafe { opt_str(title) }) else {
        return ptr::null_mut();
    };
    let body = unsafe { str_or_empty(body) };
    let subject = unsafe { opt_str(subject) };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    match ok_or_log("note_create", repo.create(title, body, subject)) {
        Some(note) => into_payload(encode(&note)),
        None => ptr::null_mut(),
    }
}

/// Returns JSON Note for the given id, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_note_get(db: *mut Store, id: *const c_char) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    match ok_or_log("note_get", repo.get_by_id(id)).flatten() {
        Some(note) => into_payload(encode(&note)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of all notes in commit order, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_note_list_all(db: *mut Store) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    match ok_or_log("note_list_all", repo.list_all()) {
        Some(notes) => into_payload(encode(&notes)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of notes whose subject matches exactly
/// (case-sensitive), or NULL.
#[no_mangle]
pub extern "C" fn aathoos_note_list_by_subject(
    db: *mut Store,
    subject: *const c_char,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(subject) = (unsafe { opt_str(subject) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    match ok_or_log("note_list_by_subject", repo.list_by_subject(subject)) {
        Some(notes) => into_payload(encode(&notes)),
        None => ptr::null_mut(),
    }
}

/// Replaces a note's body. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_note_update_body(
    db: *mut Store,
    id: *const c_char,
    body: *const c_char,
) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };
    let body = unsafe { str_or_empty(body) };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    ok_or_log("note_update_body", repo.update_body(id, body)).unwrap_or(false)
}

/// Deletes a note. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_note_delete(db: *mut Store, id: *const c_char) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteNoteRepository::new(&conn);
    ok_or_log("note_delete", repo.delete(id)).unwrap_or(false)
}

// ---- goals ----

/// Creates a goal. `description` may be NULL; `target_date = 0` means
/// open-ended. Returns JSON Goal, or NULL on error.
#[no_mangle]
pub extern "C" fn aathoos_goal_create(
    db: *mut Store,
    title: *const c_char,
    description: *const c_char,
    target_date: i64,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(title) = (unsafe { opt_str(title) }) else {
        return ptr::null_mut();
    };
    let description = unsafe { opt_str(description) };
    let target_date = (target_date != 0).then_some(target_date);

    let conn = store.conn();
    let repo = SqliteGoalRepository::new(&conn);
    match ok_or_log("goal_create", repo.create(title, description, target_date)) {
        Some(goal) => into_payload(encode(&goal)),
        None => ptr::null_mut(),
    }
}

/// Returns JSON Goal for the given id, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_goal_get(db: *mut Store, id: *const c_char) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteGoalRepository::new(&conn);
    match ok_or_log("goal_get", repo.get_by_id(id)).flatten() {
        Some(goal) => into_payload(encode(&goal)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of all goals in commit order, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_goal_list_all(db: *mut Store) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteGoalRepository::new(&conn);
    match ok_or_log("goal_list_all", repo.list_all()) {
        Some(goals) => into_payload(encode(&goals)),
        None => ptr::null_mut(),
    }
}

/// Sets goal progress. Finite values clamp into [0.0, 1.0]; NaN is
/// rejected. Completion is untouched. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_goal_set_progress(
    db: *mut Store,
    id: *const c_char,
    progress: f64,
) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteGoalRepository::new(&conn);
    ok_or_log("goal_set_progress", repo.set_progress(id, progress)).unwrap_or(false)
}

/// Deletes a goal. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_goal_delete(db: *mut Store, id: *const c_char) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteGoalRepository::new(&conn);
    ok_or_log("goal_delete", repo.delete(id)).unwrap_or(false)
}

// ---- study sessions ----

/// Records a study session. `notes` may be NULL; `duration_secs` must be
/// non-negative. Returns JSON StudySession, or NULL on error.
#[no_mangle]
pub extern "C" fn aathoos_study_session_create(
    db: *mut Store,
    subject: *const c_char,
    duration_secs: i64,
    notes: *const c_char,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(subject) = (unsafe { opt_str(subject) }) else {
        return ptr::null_mut();
    };
    let notes = unsafe { opt_str(notes) };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    match ok_or_log(
        "study_session_create",
        repo.create(subject, duration_secs, notes),
    ) {
        Some(session) => into_payload(encode(&session)),
        None => ptr::null_mut(),
    }
}

/// Returns JSON StudySession for the given id, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_study_session_get(db: *mut Store, id: *const c_char) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    match ok_or_log("study_session_get", repo.get_by_id(id)).flatten() {
        Some(session) => into_payload(encode(&session)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of all sessions in commit order, or NULL.
#[no_mangle]
pub extern "C" fn aathoos_study_session_list_all(db: *mut Store) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    match ok_or_log("study_session_list_all", repo.list_all()) {
        Some(sessions) => into_payload(encode(&sessions)),
        None => ptr::null_mut(),
    }
}

/// Returns a JSON array of sessions whose subject matches exactly
/// (case-sensitive), or NULL.
#[no_mangle]
pub extern "C" fn aathoos_study_session_list_by_subject(
    db: *mut Store,
    subject: *const c_char,
) -> *mut c_char {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(subject) = (unsafe { opt_str(subject) }) else {
        return ptr::null_mut();
    };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    match ok_or_log(
        "study_session_list_by_subject",
        repo.list_by_subject(subject),
    ) {
        Some(sessions) => into_payload(encode(&sessions)),
        None => ptr::null_mut(),
    }
}

/// Total seconds studied for a subject. Absence of data is a valid zero
/// total; `-1` signals unusable arguments or an engine failure.
#[no_mangle]
pub extern "C" fn aathoos_study_session_total_duration(
    db: *mut Store,
    subject: *const c_char,
) -> i64 {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return -1;
    };
    let Some(subject) = (unsafe { opt_str(subject) }) else {
        return -1;
    };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    ok_or_log(
        "study_session_total_duration",
        repo.total_duration_for_subject(subject),
    )
    .unwrap_or(-1)
}

/// Deletes a study session. Returns true on success.
#[no_mangle]
pub extern "C" fn aathoos_study_session_delete(db: *mut Store, id: *const c_char) -> bool {
    let Some(store) = (unsafe { db.as_ref() }) else {
        return false;
    };
    let Some(id) = (unsafe { opt_str(id) }) else {
        return false;
    };

    let conn = store.conn();
    let repo = SqliteStudySessionRepository::new(&conn);
    ok_or_log("study_session_delete", repo.delete(id)).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::ffi::{CStr, CString};
    use std::os::raw::c_char;
    use std::ptr;

    use serde_json::Value;

    use super::*;

    fn c(text: &str) -> CString {
        CString::new(text).expect("test string contains no NUL")
    }

    /// Reads and releases a payload pointer returned by the surface.
    fn take_payload(ptr: *mut c_char) -> String {
        assert!(!ptr.is_null(), "expected a payload, got NULL");
        let text = unsafe { CStr::from_ptr(ptr) }
            .to_str()
            .expect("payload should be UTF-8")
            .to_string();
        aathoos_free_string(ptr);
        text
    }

    fn take_json(ptr: *mut c_char) -> Value {
        serde_json::from_str(&take_payload(ptr)).expect("payload should be JSON")
    }

    struct TestStore {
        handle: *mut Store,
        _dir: tempfile::TempDir,
    }

    impl TestStore {
        fn open() -> Self {
            let dir = tempfile::tempdir().expect("tempdir");
            let path = c(dir
                .path()
                .join("aathoos.db")
                .to_str()
                .expect("temp path should be UTF-8"));
            let handle = aathoos_db_open(path.as_ptr());
            assert!(!handle.is_null(), "open should succeed");
            Self { handle, _dir: dir }
        }
    }

    impl Drop for TestStore {
        fn drop(&mut self) {
            aathoos_db_close(self.handle);
        }
    }

    #[test]
    fn open_rejects_null_path_and_unusable_locations() {
        assert!(aathoos_db_open(ptr::null()).is_null());

        let dir = tempfile::tempdir().expect("tempdir");
        let dir_path = c(dir.path().to_str().expect("temp path should be UTF-8"));
        // The location is a directory; SQLite cannot open it as a database.
        assert!(aathoos_db_open(dir_path.as_ptr()).is_null());
    }

    #[test]
    fn close_and_free_tolerate_null() {
        aathoos_db_close(ptr::null_mut());
        aathoos_free_string(ptr::null_mut());
    }

    #[test]
    fn core_version_is_exposed_as_owned_string() {
        let version = take_payload(aathoos_core_version());
        assert!(!version.is_empty());
    }

    #[test]
    fn logging_init_rejects_null_and_bad_arguments() {
        assert!(!aathoos_logging_init(ptr::null(), ptr::null()));
        let level = c("verbose");
        let dir = c("relative/logs");
        assert!(!aathoos_logging_init(level.as_ptr(), dir.as_ptr()));
    }

    #[test]
    fn task_lifecycle_matches_the_boundary_contract() {
        let store = TestStore::open();
        let title = c("Read chapter 3");

        let created = take_json(aathoos_task_create(
            store.handle,
            title.as_ptr(),
            ptr::null(),
            0,
            1,
        ));
        assert_eq!(created["title"], "Read chapter 3");
        assert_eq!(created["priority"], 1);
        assert_eq!(created["is_completed"], false);
        assert!(created["notes"].is_null());
        assert!(created["due_date"].is_null());
        assert_eq!(created["updated_at"], created["created_at"]);

        let id = c(created["id"].as_str().expect("id should be a string"));
        assert!(aathoos_task_set_completed(store.handle, id.as_ptr(), true));

        let fetched = take_json(aathoos_task_get(store.handle, id.as_ptr()));
        assert_eq!(fetched["is_completed"], true);
        assert!(fetched["updated_at"].as_i64() >= fetched["created_at"].as_i64());

        assert!(aathoos_task_delete(store.handle, id.as_ptr()));
        assert!(aathoos_task_get(store.handle, id.as_ptr()).is_null());
        assert!(!aathoos_task_delete(store.handle, id.as_ptr()));
    }

    #[test]
    fn task_create_rejects_empty_title_with_null() {
        let store = TestStore::open();
        let empty = c("");
        assert!(aathoos_task_create(store.handle, empty.as_ptr(), ptr::null(), 0, 0).is_null());
        assert!(aathoos_task_create(store.handle, ptr::null(), ptr::null(), 0, 0).is_null());
    }

    #[test]
    fn task_lists_return_arrays_in_commit_order() {
        let store = TestStore::open();
        let first = c("first");
        let second = c("second");

        let first_task = take_json(aathoos_task_create(
            store.handle,
            first.as_ptr(),
            ptr::null(),
            0,
            2,
        ));
        let second_task = take_json(aathoos_task_create(
            store.handle,
            second.as_ptr(),
            ptr::null(),
            0,
            0,
        ));
        let first_id = c(first_task["id"].as_str().expect("id"));
        assert!(aathoos_task_set_completed(store.handle, first_id.as_ptr(), true));

        let all = take_json(aathoos_task_list_all(store.handle));
        let all = all.as_array().expect("list_all should be an array");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0]["id"], first_task["id"]);
        assert_eq!(all[1]["id"], second_task["id"]);

        let incomplete = take_json(aathoos_task_list_incomplete(store.handle));
        let incomplete = incomplete.as_array().expect("array");
        assert_eq!(incomplete.len(), 1);
        assert_eq!(incomplete[0]["id"], second_task["id"]);
    }

    #[test]
    fn note_surface_handles_optionals_and_body_updates() {
        let store = TestStore::open();
        let title = c("Thermodynamics");
        let body = c("entropy never decreases");
        let subject = c("Physics");

        let created = take_json(aathoos_note_create(
            store.handle,
            title.as_ptr(),
            body.as_ptr(),
            ptr::null(),
        ));
        assert!(created["subject"].is_null());
        let id = c(created["id"].as_str().expect("id"));

        assert!(aathoos_note_update_body(store.handle, id.as_ptr(), ptr::null()));
        let fetched = take_json(aathoos_note_get(store.handle, id.as_ptr()));
        assert_eq!(fetched["body"], "");

        let tagged = take_json(aathoos_note_create(
            store.handle,
            title.as_ptr(),
            body.as_ptr(),
            subject.as_ptr(),
        ));
        assert_eq!(tagged["subject"], "Physics");

        let filtered = take_json(aathoos_note_list_by_subject(store.handle, subject.as_ptr()));
        let filtered = filtered.as_array().expect("array");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0]["id"], tagged["id"]);

        let tagged_id = c(tagged["id"].as_str().expect("id"));
        assert!(aathoos_note_delete(store.handle, tagged_id.as_ptr()));
        assert!(aathoos_note_get(store.handle, tagged_id.as_ptr()).is_null());
    }

    #[test]
    fn goal_surface_clamps_progress_and_keeps_completion_independent() {
        let store = TestStore::open();
        let title = c("Finish thesis");

        let created = take_json(aathoos_goal_create(
            store.handle,
            title.as_ptr(),
            ptr::null(),
            0,
        ));
        assert_eq!(created["progress"], 0.0);
        assert!(created["target_date"].is_null());
        let id = c(created["id"].as_str().expect("id"));

        assert!(aathoos_goal_set_progress(store.handle, id.as_ptr(), 1.8));
        let fetched = take_json(aathoos_goal_get(store.handle, id.as_ptr()));
        assert_eq!(fetched["progress"], 1.0);
        assert_eq!(fetched["is_completed"], false);

        assert!(!aathoos_goal_set_progress(store.handle, id.as_ptr(), f64::NAN));

        let listed = take_json(aathoos_goal_list_all(store.handle));
        assert_eq!(listed.as_array().expect("array").len(), 1);

        assert!(aathoos_goal_delete(store.handle, id.as_ptr()));
        assert!(!aathoos_goal_delete(store.handle, id.as_ptr()));
    }

    #[test]
    fn study_session_totals_follow_exact_subject_matching() {
        let store = TestStore::open();
        let calculus = c("Calculus");
        let physics = c("Physics");

        for duration in [600, 300, 900] {
            let created = aathoos_study_session_create(
                store.handle,
                calculus.as_ptr(),
                duration,
                ptr::null(),
            );
            aathoos_free_string(created);
        }

        assert_eq!(
            aathoos_study_session_total_duration(store.handle, calculus.as_ptr()),
            1800
        );
        assert_eq!(
            aathoos_study_session_total_duration(store.handle, physics.as_ptr()),
            0
        );
        assert_eq!(
            aathoos_study_session_total_duration(store.handle, ptr::null()),
            -1
        );

        let listed = take_json(aathoos_study_session_list_by_subject(
            store.handle,
            calculus.as_ptr(),
        ));
        assert_eq!(listed.as_array().expect("array").len(), 3);

        let negative =
            aathoos_study_session_create(store.handle, calculus.as_ptr(), -5, ptr::null());
        assert!(negative.is_null());
    }

    #[test]
    fn null_handles_collapse_to_the_failure_vocabulary() {
        let id = c("some-id");
        assert!(aathoos_task_get(ptr::null_mut(), id.as_ptr()).is_null());
        assert!(aathoos_task_list_all(ptr::null_mut()).is_null());
        assert!(!aathoos_task_delete(ptr::null_mut(), id.as_ptr()));
        assert!(!aathoos_goal_set_progress(ptr::null_mut(), id.as_ptr(), 0.5));
        assert_eq!(
            aathoos_study_session_total_duration(ptr::null_mut(), id.as_ptr()),
            -1
        );
    }
}
