//! Database session contracts.
//!
//! # Responsibility
//! - Define how sessions are produced (`SessionFactory`) and released
//!   (`Session::close`).
//!
//! # Invariants
//! - `close` consumes the session; only the owner of a session value can
//!   release it, a holder of `&Session` never can.

use crate::repo::StoreResult;
use async_trait::async_trait;

mod sqlite;

pub use sqlite::{SqliteSession, SqliteSessionFactory};

/// A unit of database work bound to one connection.
#[async_trait]
pub trait Session: Send + Sync + Sized {
    /// Releases the underlying connection.
    async fn close(self) -> StoreResult<()>;
}

/// Produces new sessions on demand.
#[async_trait]
pub trait SessionFactory: Send + Sync {
    type Session: Session;

    /// Opens a new session owned by the caller.
    async fn open(&self) -> StoreResult<Self::Session>;
}
