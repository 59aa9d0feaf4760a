//! Per-session turn serialization
//!
//! A session record is a single-writer resource for the duration of one
//! turn: two overlapping callbacks for the same session id must not
//! interleave state transitions. Locks are never evicted, the same accepted
//! leak as abandoned session records.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};

#[derive(Default)]
pub struct SessionLocks {
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl SessionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the turn lock for a session, waiting behind any in-flight turn
    /// for the same id. Guards for distinct ids never contend.
    pub async fn acquire(&self, session_id: &str) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(session_id.to_string())
            .or_default()
            .clone();
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn same_session_turns_serialize() {
        let locks = SessionLocks::new();
        let guard = locks.acquire("s1").await;

        let second = tokio::time::timeout(Duration::from_millis(20), locks.acquire("s1")).await;
        assert!(second.is_err());

        drop(guard);
        let second = tokio::time::timeout(Duration::from_millis(20), locks.acquire("s1")).await;
        assert!(second.is_ok());
    }

    #[tokio::test]
    async fn distinct_sessions_do_not_contend() {
        let locks = SessionLocks::new();
        let _a = locks.acquire("s1").await;
        let b = tokio::time::timeout(Duration::from_millis(20), locks.acquire("s2")).await;
        assert!(b.is_ok());
    }
}
