//! Session store trait and the in-process implementation

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::record::{SessionPatch, SessionRecord};

/// Session store contract.
///
/// All operations are safe under concurrent invocation from turns of
/// different sessions. Serializing turns of the *same* session is the
/// engine's job, not the store's, so a networked backend can satisfy this
/// trait without changing call sites.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Fetch the record for a session, if one exists.
    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>>;

    /// Merge `patch` into the session's record, creating a record in the
    /// default `initial` state when none exists. Returns the merged record.
    async fn upsert(&self, session_id: &str, patch: SessionPatch) -> Result<SessionRecord>;

    /// Discard the session's record. Deleting an absent session is not an
    /// error.
    async fn delete(&self, session_id: &str) -> Result<()>;
}

/// In-process session store for single-instance deployments.
///
/// There is no eviction for abandoned sessions; that leak is an accepted
/// trade-off for the gateway's short interaction window.
#[derive(Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, SessionRecord>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live session records, for diagnostics.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, session_id: &str) -> Result<Option<SessionRecord>> {
        Ok(self.sessions.read().await.get(session_id).cloned())
    }

    async fn upsert(&self, session_id: &str, patch: SessionPatch) -> Result<SessionRecord> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.entry(session_id.to_string()).or_default();
        record.apply(&patch);
        tracing::debug!(session_id, state = ?record.state, "session upserted");
        Ok(record.clone())
    }

    async fn delete(&self, session_id: &str) -> Result<()> {
        if self.sessions.write().await.remove(session_id).is_some() {
            tracing::debug!(session_id, "session discarded");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MenuState;

    #[tokio::test]
    async fn upsert_creates_record_in_initial_state() {
        let store = MemorySessionStore::new();
        let record = store
            .upsert("s1", SessionPatch::default())
            .await
            .unwrap();
        assert_eq!(record.state, MenuState::Initial);
        assert!(store.get("s1").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn upsert_merges_instead_of_replacing() {
        let store = MemorySessionStore::new();
        store
            .upsert(
                "s1",
                SessionPatch::state(MenuState::SendTokensAmount).recipient("bob"),
            )
            .await
            .unwrap();
        let record = store
            .upsert("s1", SessionPatch::state(MenuState::SendTokensConfirm).amount(0.5))
            .await
            .unwrap();

        assert_eq!(record.recipient.as_deref(), Some("bob"));
        assert_eq!(record.amount, Some(0.5));
        assert_eq!(record.state, MenuState::SendTokensConfirm);
    }

    #[tokio::test]
    async fn delete_removes_record_and_tolerates_absence() {
        let store = MemorySessionStore::new();
        store
            .upsert("s1", SessionPatch::state(MenuState::WalletAccess))
            .await
            .unwrap();
        store.delete("s1").await.unwrap();
        assert!(store.get("s1").await.unwrap().is_none());
        store.delete("s1").await.unwrap();
    }

    #[tokio::test]
    async fn distinct_sessions_do_not_interfere() {
        let store = std::sync::Arc::new(MemorySessionStore::new());
        let mut handles = Vec::new();
        for i in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("session-{i}");
                store
                    .upsert(&id, SessionPatch::state(MenuState::WalletAccess))
                    .await
                    .unwrap();
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }
        assert_eq!(store.len().await, 16);
    }
}
