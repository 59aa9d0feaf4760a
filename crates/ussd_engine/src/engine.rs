//! The menu state machine dispatcher

use std::sync::Arc;

use ledger_client::LedgerClient;
use session_store::{MenuState, SessionPatch, SessionStore};
use user_directory::{NewUserProfile, UserDirectory};
use ussd_core::{
    latest_token, split_signup, title_case, validate_username, EngineConfig, InboundTurn, Reply,
};

use crate::balance::BalanceResolver;
use crate::bound::bounded;
use crate::error::EngineError;
use crate::locks::SessionLocks;
use crate::menu;
use crate::transfer::TransferOrchestrator;

/// What one handler produced: the reply, plus the session patch to apply
/// atomically once the handler is done. Terminal replies never carry a
/// patch; the record is deleted instead.
struct TurnOutcome {
    reply: Reply,
    patch: Option<SessionPatch>,
}

impl TurnOutcome {
    fn reply(reply: Reply) -> Self {
        Self { reply, patch: None }
    }

    fn transition(reply: Reply, patch: SessionPatch) -> Self {
        Self {
            reply,
            patch: Some(patch),
        }
    }
}

/// The session engine. Collaborators are constructor-injected so the
/// transport adapter and the tests wire the same type.
pub struct UssdEngine {
    store: Arc<dyn SessionStore>,
    directory: Arc<dyn UserDirectory>,
    balance: BalanceResolver,
    transfer: TransferOrchestrator,
    locks: SessionLocks,
    config: EngineConfig,
}

impl UssdEngine {
    pub fn new(
        store: Arc<dyn SessionStore>,
        directory: Arc<dyn UserDirectory>,
        ledger: Arc<dyn LedgerClient>,
        config: EngineConfig,
    ) -> Self {
        Self {
            balance: BalanceResolver::new(directory.clone(), ledger.clone(), &config),
            transfer: TransferOrchestrator::new(directory.clone(), ledger, &config),
            store,
            directory,
            locks: SessionLocks::new(),
            config,
        }
    }

    /// Process one inbound turn and produce its reply.
    ///
    /// Never fails: every internal error maps onto a terminal reply from the
    /// error taxonomy, and an unknown session state is fatal for that
    /// session only.
    pub async fn process_turn(&self, turn: &InboundTurn) -> Reply {
        let _turn_guard = self.locks.acquire(&turn.session_id).await;

        if let Some(reply) = self.transfer.completed_reply(&turn.session_id) {
            tracing::info!(
                session_id = %turn.session_id,
                "redelivered confirmation; replaying first outcome"
            );
            return reply;
        }

        let record = match self.store.get(&turn.session_id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::error!(error = %err, session_id = %turn.session_id, "session load failed");
                return Reply::terminate(menu::GENERIC_ERROR);
            }
        };
        let state = record.as_ref().map(|r| r.state).unwrap_or_default();
        let token = latest_token(&turn.text);
        tracing::debug!(session_id = %turn.session_id, ?state, token, "dispatching turn");

        let outcome = match state {
            MenuState::Initial => self.handle_initial(turn, token).await,
            MenuState::ExistingUser => self.handle_existing_user(token),
            MenuState::SignupUsername => self.handle_signup_username(turn, token).await,
            MenuState::WalletAccess => self.handle_wallet_access(turn, token).await,
            MenuState::ViewBalance => TurnOutcome::reply(self.view_balance_reply(turn).await),
            MenuState::SendTokensRecipient => Self::handle_send_recipient(token),
            MenuState::SendTokensAmount => {
                Self::handle_send_amount(record.as_ref().and_then(|r| r.recipient.clone()), token)
            }
            MenuState::SendTokensConfirm => {
                self.handle_send_confirm(turn, record.as_ref(), token).await
            }
            MenuState::Unknown => {
                tracing::warn!(session_id = %turn.session_id, "unrecognized session state tag");
                TurnOutcome::reply(Reply::terminate(menu::GENERIC_ERROR))
            }
        };

        self.finish_turn(&turn.session_id, outcome).await
    }

    /// Apply the outcome's session mutation in one step, after the handler
    /// has computed its full result.
    async fn finish_turn(&self, session_id: &str, outcome: TurnOutcome) -> Reply {
        if outcome.reply.is_terminal() {
            if let Err(err) = self.store.delete(session_id).await {
                tracing::warn!(error = %err, session_id, "session delete failed");
            }
            return outcome.reply;
        }
        if let Some(patch) = outcome.patch {
            if let Err(err) = self.store.upsert(session_id, patch).await {
                tracing::error!(error = %err, session_id, "session upsert failed");
                if let Err(err) = self.store.delete(session_id).await {
                    tracing::warn!(error = %err, session_id, "session delete failed");
                }
                return Reply::terminate(menu::GENERIC_ERROR);
            }
        }
        outcome.reply
    }

    async fn handle_initial(&self, turn: &InboundTurn, token: &str) -> TurnOutcome {
        match token {
            "" => {
                let lookup = bounded(
                    self.config.collaborator_timeout,
                    "directory.find_by_phone",
                    self.directory.find_by_phone(&turn.phone_number),
                )
                .await;
                match lookup {
                    Ok(Some(account)) => TurnOutcome::transition(
                        Reply::continue_with(menu::welcome_back(
                            &account.username,
                            account.balance,
                        )),
                        SessionPatch::state(MenuState::ExistingUser).user_id(account.id),
                    ),
                    Ok(None) => TurnOutcome::transition(
                        Reply::continue_with(menu::WELCOME_MENU),
                        SessionPatch::state(MenuState::Initial),
                    ),
                    Err(err) => Self::fail(err),
                }
            }
            "1" => TurnOutcome::transition(
                Reply::continue_with(menu::SIGNUP_PROMPT),
                SessionPatch::state(MenuState::SignupUsername),
            ),
            "2" => TurnOutcome::transition(
                Reply::continue_with(menu::WALLET_MENU),
                SessionPatch::state(MenuState::WalletAccess),
            ),
            _ => TurnOutcome::reply(Reply::terminate(menu::INVALID_INPUT)),
        }
    }

    fn handle_existing_user(&self, token: &str) -> TurnOutcome {
        match token {
            "1" => TurnOutcome::transition(
                Reply::continue_with(menu::WALLET_MENU),
                SessionPatch::state(MenuState::WalletAccess),
            ),
            "2" => TurnOutcome::reply(Reply::terminate(menu::GOODBYE)),
            _ => TurnOutcome::reply(Reply::terminate(menu::INVALID_INPUT)),
        }
    }

    async fn handle_signup_username(&self, turn: &InboundTurn, token: &str) -> TurnOutcome {
        // Malformed answers re-prompt; more input is still plausible here.
        let Some((username, full_name)) = split_signup(token) else {
            return TurnOutcome::reply(Reply::continue_with(menu::SIGNUP_FORMAT_HINT));
        };
        if !validate_username(username) {
            return TurnOutcome::reply(Reply::continue_with(menu::INVALID_USERNAME));
        }

        let profile = NewUserProfile {
            username: username.to_string(),
            full_name: title_case(full_name),
            phone_number: turn.phone_number.clone(),
        };
        let created = bounded(
            self.config.collaborator_timeout,
            "directory.create",
            self.directory.create(profile),
        )
        .await;
        match created {
            Ok(account) => TurnOutcome::reply(Reply::terminate(menu::signup_success(
                username,
                &account.public_key,
            ))),
            Err(EngineError::Directory(user_directory::DirectoryError::DuplicatePhone)) => {
                TurnOutcome::reply(Reply::terminate(menu::USER_EXISTS))
            }
            Err(err) => Self::fail(err),
        }
    }

    async fn handle_wallet_access(&self, turn: &InboundTurn, token: &str) -> TurnOutcome {
        match token {
            "1" => TurnOutcome::reply(self.view_balance_reply(turn).await),
            "2" => TurnOutcome::transition(
                Reply::continue_with(menu::RECIPIENT_PROMPT),
                SessionPatch::state(MenuState::SendTokensRecipient),
            ),
            // Back to the main menu; a dropped transfer attempt must not
            // leave its fields behind.
            "3" => TurnOutcome::transition(
                Reply::continue_with(menu::WELCOME_MENU),
                SessionPatch::state(MenuState::Initial).clear_intent(),
            ),
            _ => TurnOutcome::reply(Reply::terminate(menu::INVALID_INPUT)),
        }
    }

    async fn view_balance_reply(&self, turn: &InboundTurn) -> Reply {
        let lookup = bounded(
            self.config.collaborator_timeout,
            "directory.find_by_phone",
            self.directory.find_by_phone(&turn.phone_number),
        )
        .await;
        match lookup {
            Ok(Some(account)) => match self.balance.resolve(&account).await {
                Ok(balance) => Reply::terminate(menu::balance_message(balance)),
                Err(err) => {
                    tracing::error!(error = %err, phone = %turn.phone_number, "balance resolution failed");
                    Reply::terminate(menu::GENERIC_ERROR)
                }
            },
            Ok(None) => Reply::terminate(menu::SIGN_UP_FIRST),
            Err(err) => Self::fail(err).reply,
        }
    }

    fn handle_send_recipient(token: &str) -> TurnOutcome {
        if token.is_empty() {
            return TurnOutcome::reply(Reply::terminate(menu::INVALID_INPUT));
        }
        TurnOutcome::transition(
            Reply::continue_with(menu::AMOUNT_PROMPT),
            SessionPatch::state(MenuState::SendTokensAmount).recipient(token),
        )
    }

    fn handle_send_amount(recipient: Option<String>, token: &str) -> TurnOutcome {
        let Some(recipient) = recipient else {
            tracing::warn!("amount step reached without a stored recipient");
            return TurnOutcome::reply(Reply::terminate(menu::GENERIC_ERROR));
        };
        match token.parse::<f64>() {
            Ok(amount) if amount.is_finite() && amount > 0.0 => TurnOutcome::transition(
                Reply::continue_with(menu::confirm_prompt(amount, &recipient)),
                SessionPatch::state(MenuState::SendTokensConfirm).amount(amount),
            ),
            _ => TurnOutcome::reply(Reply::terminate(menu::INVALID_AMOUNT)),
        }
    }

    async fn handle_send_confirm(
        &self,
        turn: &InboundTurn,
        record: Option<&session_store::SessionRecord>,
        token: &str,
    ) -> TurnOutcome {
        match token {
            "1" => {
                let Some(record) = record else {
                    return TurnOutcome::reply(Reply::terminate(menu::GENERIC_ERROR));
                };
                TurnOutcome::reply(
                    self.transfer
                        .execute(&turn.session_id, &turn.phone_number, record)
                        .await,
                )
            }
            "2" => TurnOutcome::reply(Reply::terminate(menu::TRANSFER_CANCELLED)),
            _ => TurnOutcome::reply(Reply::terminate(menu::INVALID_INPUT)),
        }
    }

    fn fail(err: EngineError) -> TurnOutcome {
        tracing::error!(error = %err, "turn aborted by collaborator failure");
        TurnOutcome::reply(Reply::terminate(menu::GENERIC_ERROR))
    }
}
