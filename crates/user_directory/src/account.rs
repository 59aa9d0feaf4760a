//! User account entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, keyed externally by phone number.
///
/// The engine treats accounts as read-mostly; only `balance` and
/// `last_balance_update` are written back after a ledger fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    pub id: Uuid,
    pub username: String,
    pub full_name: String,
    pub phone_number: String,
    /// Printable wallet address.
    pub public_key: String,
    /// Opaque signing credential for the ledger collaborator.
    pub secret_key: String,
    /// Cached ledger balance in SOL.
    pub balance: f64,
    /// When `balance` was last refreshed from the ledger; `None` until the
    /// first fetch.
    pub last_balance_update: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// The fields a caller supplies at signup; keys are generated by the
/// directory backing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUserProfile {
    pub username: String,
    pub full_name: String,
    pub phone_number: String,
}
