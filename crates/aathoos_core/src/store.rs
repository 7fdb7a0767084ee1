//! Opaque store handle and concurrency guard.
//!
//! # Responsibility
//! - Own the single SQLite connection behind one opened store.
//! - Serialize all engine access from concurrently calling threads.
//!
//! # Invariants
//! - One handle per `open`; the handle is `Send + Sync` and may be shared
//!   across caller threads.
//! - Mutations on the same handle are linearizable; no caller observes a
//!   partially-committed write.
//! - A panicking lock holder must not permanently brick the handle.

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use rusqlite::Connection;

use crate::db::{open_db, open_db_in_memory, DbResult};

/// One opened store. All record access goes through this handle.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    /// Opens or creates the store at `path`, creating parent directories
    /// as needed.
    ///
    /// # Errors
    /// - `DbError` when the location is inaccessible or the on-disk format
    ///   is unreadable; the caller treats this as unrecoverable.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        Ok(Self {
            conn: Mutex::new(open_db(path)?),
        })
    }

    /// Opens a throwaway in-memory store.
    pub fn open_in_memory() -> DbResult<Self> {
        Ok(Self {
            conn: Mutex::new(open_db_in_memory()?),
        })
    }

    /// Enters the handle's exclusive section.
    ///
    /// Blocks while another thread holds the section. Recovers the guard
    /// from a poisoned lock: SQLite's transactional commits keep the
    /// connection state consistent even if a previous holder panicked.
    pub fn conn(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
