//! Transfer orchestration
//!
//! The execute step of the recipient → amount → confirm sub-flow. The
//! gateway may redeliver the "confirm" callback, so execution is memoized
//! per session id: the first confirmed intent runs the ledger transfer at
//! most once, and any redelivery replays the terminal reply of that first
//! execution instead of re-invoking the ledger. The memo is consulted under
//! the engine's per-session turn lock, which makes the check-and-execute
//! pair atomic.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use ledger_client::LedgerClient;
use session_store::SessionRecord;
use user_directory::UserDirectory;
use ussd_core::{EngineConfig, Reply};

use crate::bound::bounded;
use crate::error::EngineError;
use crate::menu;

pub struct TransferOrchestrator {
    directory: Arc<dyn UserDirectory>,
    ledger: Arc<dyn LedgerClient>,
    call_timeout: Duration,
    completed: DashMap<String, Reply>,
}

impl TransferOrchestrator {
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn LedgerClient>,
        config: &EngineConfig,
    ) -> Self {
        Self {
            directory,
            ledger,
            call_timeout: config.collaborator_timeout,
            completed: DashMap::new(),
        }
    }

    /// The terminal reply of an already-executed confirmation for this
    /// session, if any. A redelivered confirm callback gets this instead of
    /// a second execution.
    pub fn completed_reply(&self, session_id: &str) -> Option<Reply> {
        self.completed.get(session_id).map(|reply| reply.clone())
    }

    /// Execute a confirmed intent exactly once and memoize the outcome.
    ///
    /// Whatever happens, the reply is terminal: on failure the session goes
    /// back to square one rather than being left retryable, because the
    /// gateway has no retry-with-context mechanism.
    pub async fn execute(&self, session_id: &str, phone: &str, record: &SessionRecord) -> Reply {
        let reply = self.run(phone, record).await;
        self.completed.insert(session_id.to_string(), reply.clone());
        reply
    }

    async fn run(&self, phone: &str, record: &SessionRecord) -> Reply {
        let (Some(recipient), Some(amount)) = (record.recipient.as_deref(), record.amount) else {
            tracing::warn!(phone, "confirm reached without a stored intent");
            return Reply::terminate(menu::GENERIC_ERROR);
        };
        if !amount.is_finite() || amount <= 0.0 {
            return Reply::terminate(menu::INVALID_AMOUNT);
        }

        let sender = match bounded(
            self.call_timeout,
            "directory.find_by_phone",
            self.directory.find_by_phone(phone),
        )
        .await
        {
            Ok(Some(sender)) => sender,
            Ok(None) => return Reply::terminate(menu::SIGN_UP_FIRST),
            Err(err) => return self.transient(err),
        };

        // Resolution failure is a validation error, not a transient one.
        let recipient_account = match bounded(
            self.call_timeout,
            "directory.find_by_identifier",
            self.directory.find_by_identifier(recipient),
        )
        .await
        {
            Ok(Some(account)) => account,
            Ok(None) => return Reply::terminate(menu::RECIPIENT_NOT_FOUND),
            Err(err) => return self.transient(err),
        };

        match bounded(
            self.call_timeout,
            "ledger.transfer",
            self.ledger
                .transfer(&sender.secret_key, &recipient_account.public_key, amount),
        )
        .await
        {
            Ok(signature) => {
                tracing::info!(
                    from = %sender.phone_number,
                    to = %recipient_account.public_key,
                    amount,
                    %signature,
                    "transfer confirmed"
                );
                Reply::terminate(menu::transfer_success(&signature))
            }
            Err(err) => {
                tracing::error!(error = %err, from = %sender.phone_number, "transfer failed");
                Reply::terminate(menu::TRANSFER_FAILED)
            }
        }
    }

    fn transient(&self, err: EngineError) -> Reply {
        tracing::error!(error = %err, "transfer aborted by collaborator failure");
        Reply::terminate(menu::GENERIC_ERROR)
    }
}
