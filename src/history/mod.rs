//! Per-session conversation history
//!
//! Each browser session owns exactly one ordered list of [`ChatTurn`]s.
//! A session without an entry behaves as an empty history; entries are
//! materialized by `get_or_create` or the first `append` and only grow.
//!
//! Every store operation is atomic on its own, but nothing locks a session
//! for the duration of a request: two concurrent requests against the same
//! session may interleave their turns.

mod types;

pub use types::{ChatTurn, Role, SessionId};

use crate::error::{JewelError, Result};
use std::collections::HashMap;
use std::sync::RwLock;

/// Storage for session-scoped conversation histories
pub trait HistoryStore: Send + Sync {
    /// Returns a snapshot of the session's history, creating an empty one if absent
    fn get_or_create(&self, session: &SessionId) -> Result<Vec<ChatTurn>>;

    /// Appends a turn to the end of the session's history
    fn append(&self, session: &SessionId, turn: ChatTurn) -> Result<()>;

    /// Number of turns recorded for the session (0 when absent)
    fn len(&self, session: &SessionId) -> Result<usize>;
}

/// In-process history store keyed by session id
///
/// Histories live for the lifetime of the process. There is no size cap and
/// no expiry.
///
/// # Examples
///
/// ```
/// use jewel::history::{ChatTurn, HistoryStore, MemoryHistoryStore, SessionId};
///
/// # fn main() -> anyhow::Result<()> {
/// let store = MemoryHistoryStore::new();
/// let session = SessionId::generate();
/// assert!(store.get_or_create(&session)?.is_empty());
///
/// store.append(&session, ChatTurn::user("hello"))?;
/// assert_eq!(store.len(&session)?, 1);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    sessions: RwLock<HashMap<SessionId, Vec<ChatTurn>>>,
}

impl MemoryHistoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of sessions with a history
    pub fn session_count(&self) -> Result<usize> {
        Ok(self
            .sessions
            .read()
            .map_err(|_| lock_error())?
            .len())
    }

    /// Ids of all sessions with a history, in no particular order
    pub fn session_ids(&self) -> Result<Vec<SessionId>> {
        Ok(self
            .sessions
            .read()
            .map_err(|_| lock_error())?
            .keys()
            .cloned()
            .collect())
    }
}

fn lock_error() -> JewelError {
    JewelError::Storage("Failed to acquire lock on session histories".to_string())
}

impl HistoryStore for MemoryHistoryStore {
    fn get_or_create(&self, session: &SessionId) -> Result<Vec<ChatTurn>> {
        if let Some(turns) = self
            .sessions
            .read()
            .map_err(|_| lock_error())?
            .get(session)
        {
            return Ok(turns.clone());
        }

        let mut sessions = self.sessions.write().map_err(|_| lock_error())?;
        let turns = sessions.entry(session.clone()).or_insert_with(|| {
            tracing::debug!(session = %session, "Created empty history");
            Vec::new()
        });
        Ok(turns.clone())
    }

    fn append(&self, session: &SessionId, turn: ChatTurn) -> Result<()> {
        let mut sessions = self.sessions.write().map_err(|_| lock_error())?;
        let turns = sessions.entry(session.clone()).or_default();
        turns.push(turn);
        tracing::trace!(session = %session, turns = turns.len(), "Appended turn");
        Ok(())
    }

    fn len(&self, session: &SessionId) -> Result<usize> {
        Ok(self
            .sessions
            .read()
            .map_err(|_| lock_error())?
            .get(session)
            .map_or(0, Vec::len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_get_or_create_initializes_empty_history() {
        let store = MemoryHistoryStore::new();
        let session = SessionId::generate();

        assert_eq!(store.session_count().unwrap(), 0);
        assert!(store.get_or_create(&session).unwrap().is_empty());
        assert_eq!(store.session_count().unwrap(), 1);
        assert_eq!(store.session_ids().unwrap(), vec![session]);
    }

    #[test]
    fn test_append_preserves_order() {
        let store = MemoryHistoryStore::new();
        let session = SessionId::generate();

        store.append(&session, ChatTurn::user("one")).unwrap();
        store.append(&session, ChatTurn::model("two")).unwrap();
        store.append(&session, ChatTurn::user("three")).unwrap();

        let texts: Vec<String> = store
            .get_or_create(&session)
            .unwrap()
            .into_iter()
            .map(|t| t.text)
            .collect();
        assert_eq!(texts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_sessions_are_isolated() {
        let store = MemoryHistoryStore::new();
        let a = SessionId::generate();
        let b = SessionId::generate();

        store.append(&a, ChatTurn::user("for a")).unwrap();

        assert_eq!(store.len(&a).unwrap(), 1);
        assert_eq!(store.len(&b).unwrap(), 0);
        assert!(store.get_or_create(&b).unwrap().is_empty());
    }

    #[test]
    fn test_snapshot_is_detached_from_store() {
        let store = MemoryHistoryStore::new();
        let session = SessionId::generate();
        store.append(&session, ChatTurn::user("first")).unwrap();

        let snapshot = store.get_or_create(&session).unwrap();
        store.append(&session, ChatTurn::model("second")).unwrap();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(&session).unwrap(), 2);
    }

    #[test]
    fn test_len_does_not_create_history() {
        let store = MemoryHistoryStore::new();
        let session = SessionId::generate();

        assert_eq!(store.len(&session).unwrap(), 0);
        assert_eq!(store.session_count().unwrap(), 0);
    }

    #[test]
    fn test_concurrent_appends_across_sessions() {
        let store = Arc::new(MemoryHistoryStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    let session = SessionId::generate();
                    for i in 0..50 {
                        store.append(&session, ChatTurn::user(i.to_string())).unwrap();
                    }
                    store.len(&session).unwrap()
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), 50);
        }
        assert_eq!(store.session_count().unwrap(), 8);
    }
}
