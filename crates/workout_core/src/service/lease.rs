//! Per-operation session acquisition with guaranteed release.
//!
//! Services validate their input before calling [`SessionScope::acquire`],
//! so rejected input never opens (or closes) a session. Only input that
//! reaches the controller costs a connection.

use crate::repo::StoreResult;
use crate::session::{Session, SessionFactory};
use log::{debug, warn};

/// Session handle for the duration of one service operation.
///
/// `Owned` sessions were opened for this operation and are closed by
/// [`SessionLease::release`]. `Borrowed` sessions belong to the caller.
pub enum SessionLease<'s, S: Session> {
    Borrowed(&'s S),
    Owned(S),
}

impl<S: Session> SessionLease<'_, S> {
    pub fn session(&self) -> &S {
        match self {
            Self::Borrowed(session) => *session,
            Self::Owned(session) => session,
        }
    }

    pub fn is_owned(&self) -> bool {
        matches!(self, Self::Owned(_))
    }

    /// Ends the lease and hands back the operation outcome.
    ///
    /// Owned sessions are closed here regardless of `outcome`. When both the
    /// operation and the close fail, the operation error is returned and the
    /// close error is logged.
    pub async fn release<T>(self, outcome: StoreResult<T>) -> StoreResult<T> {
        let session = match self {
            Self::Borrowed(_) => return outcome,
            Self::Owned(session) => session,
        };

        match (outcome, session.close().await) {
            (Ok(value), Ok(())) => Ok(value),
            (Ok(_), Err(close_err)) => Err(close_err),
            (Err(err), Ok(())) => Err(err),
            (Err(err), Err(close_err)) => {
                warn!(
                    "event=session_release module=service status=error error={} close_error={}",
                    err, close_err
                );
                Err(err)
            }
        }
    }
}

/// Decides per operation whether to borrow the caller's session or open one.
pub struct SessionScope<'s, F: SessionFactory> {
    factory: &'s F,
    session: Option<&'s F::Session>,
}

impl<'s, F: SessionFactory> SessionScope<'s, F> {
    pub fn new(factory: &'s F, session: Option<&'s F::Session>) -> Self {
        Self { factory, session }
    }

    /// Switches the scope to borrow `session` for every operation.
    pub fn with_session(self, session: &'s F::Session) -> Self {
        Self {
            session: Some(session),
            ..self
        }
    }

    /// Reuses the caller session when present, otherwise opens a new one.
    pub async fn acquire(&self) -> StoreResult<SessionLease<'s, F::Session>> {
        match self.session {
            Some(session) => Ok(SessionLease::Borrowed(session)),
            None => {
                let session = self.factory.open().await?;
                debug!("event=session_acquire module=service status=ok owned=true");
                Ok(SessionLease::Owned(session))
            }
        }
    }

    pub fn has_caller_session(&self) -> bool {
        self.session.is_some()
    }
}
