//! SQLite-backed sessions.
//!
//! # Invariants
//! - Each session owns exactly one connection with migrations applied.
//! - Dropping an unclosed session still releases its connection.

use super::{Session, SessionFactory};
use crate::db::{open_db, DbResult};
use crate::repo::{StoreError, StoreResult};
use async_trait::async_trait;
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

/// Session wrapping a single SQLite connection.
pub struct SqliteSession {
    session_id: u64,
    conn: Mutex<Connection>,
}

impl SqliteSession {
    /// Wraps an already bootstrapped connection.
    pub fn from_connection(session_id: u64, conn: Connection) -> Self {
        Self {
            session_id,
            conn: Mutex::new(conn),
        }
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    /// Runs `f` with exclusive access to the session connection.
    pub fn with_connection<T>(
        &self,
        f: impl FnOnce(&Connection) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let guard = self.conn.lock().map_err(|_| StoreError::SessionPoisoned)?;
        f(&guard)
    }
}

#[async_trait]
impl Session for SqliteSession {
    async fn close(self) -> StoreResult<()> {
        let session_id = self.session_id;
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| StoreError::SessionPoisoned)?;

        match conn.close() {
            Ok(()) => {
                info!("event=session_close module=session status=ok session_id={session_id}");
                Ok(())
            }
            Err((_conn, err)) => {
                error!(
                    "event=session_close module=session status=error session_id={} error={}",
                    session_id, err
                );
                Err(err.into())
            }
        }
    }
}

/// Opens one SQLite connection per session against a database file.
pub struct SqliteSessionFactory {
    db_path: PathBuf,
    next_session_id: AtomicU64,
}

impl SqliteSessionFactory {
    /// Creates a factory without touching the database.
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
            next_session_id: AtomicU64::new(1),
        }
    }

    /// Creates a factory after checking the database opens and migrates.
    ///
    /// # Errors
    /// - Returns `DbError` when the file cannot be opened or its schema is
    ///   newer than this binary supports.
    pub fn bootstrap(db_path: impl Into<PathBuf>) -> DbResult<Self> {
        let factory = Self::new(db_path);
        let conn = open_db(&factory.db_path)?;
        drop(conn);
        Ok(factory)
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

#[async_trait]
impl SessionFactory for SqliteSessionFactory {
    type Session = SqliteSession;

    async fn open(&self) -> StoreResult<SqliteSession> {
        let session_id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        let conn = open_db(&self.db_path)?;
        info!("event=session_open module=session status=ok session_id={session_id}");
        Ok(SqliteSession::from_connection(session_id, conn))
    }
}
