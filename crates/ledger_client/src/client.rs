//! The ledger collaborator trait

use async_trait::async_trait;

use crate::error::Result;

/// Ledger contract consumed by the session engine.
///
/// Both calls are network-bound in a real implementation and may take
/// arbitrarily long; the engine wraps them in its own timeout.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Current balance of an address, in SOL.
    async fn get_balance(&self, address: &str) -> Result<f64>;

    /// Move `amount_sol` from the wallet holding `sender_secret` to
    /// `recipient_address`. Returns the transaction signature.
    async fn transfer(
        &self,
        sender_secret: &str,
        recipient_address: &str,
        amount_sol: f64,
    ) -> Result<String>;
}
