//! Engine error types
//!
//! None of these reach the end user directly; the engine maps them onto the
//! generic terminal replies of the error taxonomy and logs the detail.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("session store error: {0}")]
    Store(#[from] session_store::StoreError),

    #[error("user directory error: {0}")]
    Directory(#[from] user_directory::DirectoryError),

    #[error("ledger error: {0}")]
    Ledger(#[from] ledger_client::LedgerError),

    #[error("collaborator call timed out: {0}")]
    Timeout(&'static str),
}

pub type Result<T> = std::result::Result<T, EngineError>;
