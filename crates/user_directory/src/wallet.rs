//! Wallet key generation for the in-memory backing
//!
//! Real chain-specific key derivation lives behind the ledger collaborator;
//! these keys are opaque printable strings with the same shape guarantees
//! the engine relies on (stable, unique, splittable for display).

use rand::RngCore;
use sha2::{Digest, Sha256};

/// A freshly generated wallet keypair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletKeys {
    pub public_key: String,
    pub secret_key: String,
}

/// Generate a random secret and derive its printable public address.
pub fn generate_wallet() -> WalletKeys {
    let mut seed = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut seed);
    let secret_key = hex::encode(seed);
    let public_key = hex::encode(Sha256::digest(seed));
    WalletKeys {
        public_key,
        secret_key,
    }
}
