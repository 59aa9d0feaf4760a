//! Session store error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("session not found")]
    NotFound,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
