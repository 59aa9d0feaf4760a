//! Ledger client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("ledger rpc failure: {0}")]
    Rpc(String),

    #[error("unknown signer credential")]
    UnknownSigner,

    #[error("insufficient funds")]
    InsufficientFunds,

    #[error("invalid transfer amount: {0}")]
    InvalidAmount(f64),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
