//! User directory error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("an account with this phone number already exists")]
    DuplicatePhone,

    #[error("account not found")]
    NotFound,

    #[error("directory backend error: {0}")]
    Backend(String),
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
