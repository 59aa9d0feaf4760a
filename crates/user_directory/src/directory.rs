//! The directory collaborator trait

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::account::{NewUserProfile, UserAccount};
use crate::error::Result;

/// User directory contract consumed by the session engine.
///
/// Implementations are injected as `Arc<dyn UserDirectory>`; the engine
/// never constructs one itself.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Look up an account by its phone number.
    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserAccount>>;

    /// Look up an account by phone number, username, or wallet address.
    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserAccount>>;

    /// Create an account, generating its wallet keys. Fails with
    /// [`crate::DirectoryError::DuplicatePhone`] when the phone number is
    /// already registered.
    async fn create(&self, profile: NewUserProfile) -> Result<UserAccount>;

    /// Persist a freshly fetched balance and its refresh timestamp.
    async fn update_balance(
        &self,
        phone: &str,
        balance: f64,
        refreshed_at: DateTime<Utc>,
    ) -> Result<()>;
}
