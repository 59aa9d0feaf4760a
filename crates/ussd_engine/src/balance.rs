//! Balance freshness policy
//!
//! Serves the cached balance while it is younger than the freshness window,
//! otherwise fetches from the ledger and writes the new value and timestamp
//! back through the directory. Refreshes are single-flight per account:
//! concurrent resolvers for the same account queue behind one fetch and the
//! waiters re-check freshness before fetching again.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dashmap::DashMap;
use ledger_client::LedgerClient;
use tokio::sync::Mutex;
use user_directory::{UserAccount, UserDirectory};
use ussd_core::EngineConfig;

use crate::bound::bounded;
use crate::error::Result;

pub struct BalanceResolver {
    directory: Arc<dyn UserDirectory>,
    ledger: Arc<dyn LedgerClient>,
    freshness: chrono::Duration,
    call_timeout: Duration,
    inflight: DashMap<String, Arc<Mutex<()>>>,
}

impl BalanceResolver {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn LedgerClient>,
        config: &EngineConfig,
    ) -> Self {
        let freshness = chrono::Duration::from_std(config.balance_freshness)
            .unwrap_or_else(|_| chrono::Duration::seconds(10));
        Self {
            directory,
            ledger,
            freshness,
            call_timeout: config.collaborator_timeout,
            inflight: DashMap::new(),
        }
    }

    fn is_fresh(&self, account: &UserAccount) -> bool {
        account
            .last_balance_update
            .map(|refreshed_at| Utc::now() - refreshed_at < self.freshness)
            .unwrap_or(false)
    }

    /// Resolve an account's balance per the freshness policy.
    pub async fn resolve(&self, account: &UserAccount) -> Result<f64> {
        if self.is_fresh(account) {
            return Ok(account.balance);
        }

        let gate = self
            .inflight
            .entry(account.phone_number.clone())
            .or_default()
            .clone();
        let _inflight = gate.lock().await;

        // A queued waiter may find the balance already refreshed by the
        // fetch it waited behind.
        let current = bounded(
            self.call_timeout,
            "directory.find_by_phone",
            self.directory.find_by_phone(&account.phone_number),
        )
        .await?
        .unwrap_or_else(|| account.clone());
        if self.is_fresh(&current) {
            return Ok(current.balance);
        }

        let balance = bounded(
            self.call_timeout,
            "ledger.get_balance",
            self.ledger.get_balance(&current.public_key),
        )
        .await?;
        let refreshed_at = Utc::now();
        bounded(
            self.call_timeout,
            "directory.update_balance",
            self.directory
                .update_balance(&current.phone_number, balance, refreshed_at),
        )
        .await?;
        tracing::debug!(
            phone = %current.phone_number,
            balance,
            "balance refreshed from ledger"
        );
        Ok(balance)
    }
}
