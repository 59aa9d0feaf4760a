//! In-memory development ledger

use std::collections::HashMap;

use async_trait::async_trait;
use rand::RngCore;
use tokio::sync::RwLock;

use crate::client::LedgerClient;
use crate::error::{LedgerError, Result};
use crate::lamports::{lamports_to_sol, sol_to_lamports};

#[derive(Debug, Default, Clone)]
struct WalletSlot {
    secret: Option<String>,
    lamports: u64,
}

/// Address-keyed in-process ledger.
///
/// Addresses unknown to the ledger read as zero balance, matching how a
/// fresh devnet wallet behaves before its first airdrop.
#[derive(Default)]
pub struct MemoryLedger {
    wallets: RwLock<HashMap<String, WalletSlot>>,
}

impl MemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Associate a signing credential with an address so transfers from it
    /// can be resolved.
    pub async fn register(&self, address: &str, secret: &str) {
        let mut wallets = self.wallets.write().await;
        wallets.entry(address.to_string()).or_default().secret = Some(secret.to_string());
    }

    /// Credit an address, creating its wallet if needed.
    pub async fn airdrop(&self, address: &str, sol: f64) {
        let mut wallets = self.wallets.write().await;
        wallets.entry(address.to_string()).or_default().lamports += sol_to_lamports(sol);
    }
}

#[async_trait]
impl LedgerClient for MemoryLedger {
    async fn get_balance(&self, address: &str) -> Result<f64> {
        let wallets = self.wallets.read().await;
        Ok(wallets
            .get(address)
            .map(|slot| lamports_to_sol(slot.lamports))
            .unwrap_or(0.0))
    }

    async fn transfer(
        &self,
        sender_secret: &str,
        recipient_address: &str,
        amount_sol: f64,
    ) -> Result<String> {
        let lamports = sol_to_lamports(amount_sol);
        if lamports == 0 {
            return Err(LedgerError::InvalidAmount(amount_sol));
        }

        let mut wallets = self.wallets.write().await;
        let sender_address = wallets
            .iter()
            .find(|(_, slot)| slot.secret.as_deref() == Some(sender_secret))
            .map(|(address, _)| address.clone())
            .ok_or(LedgerError::UnknownSigner)?;

        let sender = wallets
            .get_mut(&sender_address)
            .ok_or(LedgerError::UnknownSigner)?;
        if sender.lamports < lamports {
            return Err(LedgerError::InsufficientFunds);
        }
        sender.lamports -= lamports;
        wallets
            .entry(recipient_address.to_string())
            .or_default()
            .lamports += lamports;

        let mut raw = [0u8; 64];
        rand::thread_rng().fill_bytes(&mut raw);
        let signature = hex::encode(raw);
        tracing::debug!(
            from = %sender_address,
            to = %recipient_address,
            lamports,
            %signature,
            "transfer executed"
        );
        Ok(signature)
    }
}
