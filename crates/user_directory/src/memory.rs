//! In-memory directory backing

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::account::{NewUserProfile, UserAccount};
use crate::directory::UserDirectory;
use crate::error::{DirectoryError, Result};
use crate::wallet::generate_wallet;

/// Phone-keyed in-memory account map.
#[derive(Default)]
pub struct MemoryUserDirectory {
    accounts: RwLock<HashMap<String, UserAccount>>,
}

impl MemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed an account directly, for tests and development wiring.
    pub async fn insert(&self, account: UserAccount) {
        self.accounts
            .write()
            .await
            .insert(account.phone_number.clone(), account);
    }
}

#[async_trait]
impl UserDirectory for MemoryUserDirectory {
    async fn find_by_phone(&self, phone: &str) -> Result<Option<UserAccount>> {
        Ok(self.accounts.read().await.get(phone).cloned())
    }

    async fn find_by_identifier(&self, identifier: &str) -> Result<Option<UserAccount>> {
        let accounts = self.accounts.read().await;
        if let Some(account) = accounts.get(identifier) {
            return Ok(Some(account.clone()));
        }
        Ok(accounts
            .values()
            .find(|account| account.username == identifier || account.public_key == identifier)
            .cloned())
    }

    async fn create(&self, profile: NewUserProfile) -> Result<UserAccount> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&profile.phone_number) {
            return Err(DirectoryError::DuplicatePhone);
        }

        let keys = generate_wallet();
        let account = UserAccount {
            id: Uuid::new_v4(),
            username: profile.username,
            full_name: profile.full_name,
            phone_number: profile.phone_number.clone(),
            public_key: keys.public_key,
            secret_key: keys.secret_key,
            balance: 0.0,
            last_balance_update: None,
            created_at: Utc::now(),
        };
        tracing::info!(
            phone = %account.phone_number,
            username = %account.username,
            "account created"
        );
        accounts.insert(profile.phone_number, account.clone());
        Ok(account)
    }

    async fn update_balance(
        &self,
        phone: &str,
        balance: f64,
        refreshed_at: DateTime<Utc>,
    ) -> Result<()> {
        let mut accounts = self.accounts.write().await;
        let account = accounts.get_mut(phone).ok_or(DirectoryError::NotFound)?;
        account.balance = balance;
        account.last_balance_update = Some(refreshed_at);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(username: &str, phone: &str) -> NewUserProfile {
        NewUserProfile {
            username: username.to_string(),
            full_name: "Ade Obi".to_string(),
            phone_number: phone.to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_phone() {
        let directory = MemoryUserDirectory::new();
        directory.create(profile("idris", "+234111")).await.unwrap();

        let result = directory.create(profile("other", "+234111")).await;
        assert!(matches!(result, Err(DirectoryError::DuplicatePhone)));
    }

    #[tokio::test]
    async fn find_by_identifier_matches_phone_username_and_address() {
        let directory = MemoryUserDirectory::new();
        let account = directory.create(profile("idris", "+234111")).await.unwrap();

        for identifier in ["+234111", "idris", account.public_key.as_str()] {
            let found = directory.find_by_identifier(identifier).await.unwrap();
            assert_eq!(found.as_ref().map(|a| a.id), Some(account.id));
        }
        assert!(directory
            .find_by_identifier("nobody")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn update_balance_persists_value_and_timestamp() {
        let directory = MemoryUserDirectory::new();
        directory.create(profile("idris", "+234111")).await.unwrap();

        let refreshed_at = Utc::now();
        directory
            .update_balance("+234111", 3.25, refreshed_at)
            .await
            .unwrap();

        let account = directory.find_by_phone("+234111").await.unwrap().unwrap();
        assert_eq!(account.balance, 3.25);
        assert_eq!(account.last_balance_update, Some(refreshed_at));
    }

    #[tokio::test]
    async fn update_balance_for_unknown_phone_fails() {
        let directory = MemoryUserDirectory::new();
        let result = directory.update_balance("+000", 1.0, Utc::now()).await;
        assert!(matches!(result, Err(DirectoryError::NotFound)));
    }
}
