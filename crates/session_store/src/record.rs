//! Session record - per-session state and transient flow fields

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The menu position a session currently occupies.
///
/// Serialized `snake_case` so a networked store backend can exchange tags
/// with other processes; a tag this version does not know deserializes to
/// [`MenuState::Unknown`], which the engine treats as a fatal error for
/// that session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuState {
    /// Entry state for any session without a record.
    Initial,
    /// Registered caller deciding between wallet access and quitting.
    ExistingUser,
    /// Awaiting the `username, full name` signup answer.
    SignupUsername,
    /// Inside the wallet menu.
    WalletAccess,
    /// Awaiting a transfer recipient identifier.
    SendTokensRecipient,
    /// Awaiting a transfer amount.
    SendTokensAmount,
    /// Awaiting explicit yes/no transfer confirmation.
    SendTokensConfirm,
    /// Balance display; always resolves within a single turn.
    ViewBalance,
    /// Unrecognized tag from a newer or corrupted record.
    #[serde(other)]
    Unknown,
}

impl Default for MenuState {
    fn default() -> Self {
        MenuState::Initial
    }
}

/// Mutable per-session record, keyed by the gateway session identifier.
///
/// The transient fields are only meaningful for the states that set them:
/// `recipient` and `amount` belong to the transfer flow and are cleared
/// whenever a flow resets to the main menu, so an aborted transfer can never
/// leak into an unrelated flow reusing the same session identifier.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub state: MenuState,
    /// Directory id of the caller, set once an account lookup succeeds.
    pub user_id: Option<Uuid>,
    /// Transfer recipient identifier (username, phone, or address).
    pub recipient: Option<String>,
    /// Transfer amount in SOL.
    pub amount: Option<f64>,
}

/// A partial update merged into a [`SessionRecord`] by `upsert`.
///
/// `None` fields are left untouched; `clear_intent` wipes the transfer
/// fields before the rest of the patch applies.
#[derive(Debug, Clone, Default)]
pub struct SessionPatch {
    pub state: Option<MenuState>,
    pub user_id: Option<Uuid>,
    pub recipient: Option<String>,
    pub amount: Option<f64>,
    pub clear_intent: bool,
}

impl SessionPatch {
    pub fn state(state: MenuState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn clear_intent(mut self) -> Self {
        self.clear_intent = true;
        self
    }
}

impl SessionRecord {
    /// Merge a patch into this record.
    pub fn apply(&mut self, patch: &SessionPatch) {
        if patch.clear_intent {
            self.recipient = None;
            self.amount = None;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(user_id) = patch.user_id {
            self.user_id = Some(user_id);
        }
        if let Some(recipient) = &patch.recipient {
            self.recipient = Some(recipient.clone());
        }
        if let Some(amount) = patch.amount {
            self.amount = Some(amount);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_merges_without_erasing_earlier_fields() {
        let mut record = SessionRecord::default();
        record.apply(
            &SessionPatch::state(MenuState::SendTokensAmount).recipient("alice"),
        );
        record.apply(&SessionPatch::state(MenuState::SendTokensConfirm).amount(1.5));

        assert_eq!(record.state, MenuState::SendTokensConfirm);
        assert_eq!(record.recipient.as_deref(), Some("alice"));
        assert_eq!(record.amount, Some(1.5));
    }

    #[test]
    fn clear_intent_wipes_transfer_fields_only() {
        let mut record = SessionRecord {
            state: MenuState::SendTokensConfirm,
            user_id: Some(Uuid::new_v4()),
            recipient: Some("alice".into()),
            amount: Some(2.0),
        };
        record.apply(&SessionPatch::state(MenuState::Initial).clear_intent());

        assert_eq!(record.state, MenuState::Initial);
        assert!(record.user_id.is_some());
        assert!(record.recipient.is_none());
        assert!(record.amount.is_none());
    }

    #[test]
    fn unknown_state_tag_deserializes_to_unknown() {
        let state: MenuState = serde_json::from_str("\"pin_reset\"").unwrap();
        assert_eq!(state, MenuState::Unknown);

        let state: MenuState = serde_json::from_str("\"send_tokens_confirm\"").unwrap();
        assert_eq!(state, MenuState::SendTokensConfirm);
    }
}
