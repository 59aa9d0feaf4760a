//! # User Directory
//!
//! The user-account collaborator of the session engine: phone-keyed account
//! lookup, signup with wallet creation, and cached-balance bookkeeping.
//!
//! The engine only ever sees the [`UserDirectory`] trait; the in-memory
//! backing here serves tests and single-instance development deployments.
//! A database-backed implementation can replace it without call-site
//! changes.

pub mod account;
pub mod directory;
pub mod error;
pub mod memory;
pub mod wallet;

// Re-exports
pub use account::{NewUserProfile, UserAccount};
pub use directory::UserDirectory;
pub use error::DirectoryError;
pub use memory::MemoryUserDirectory;
pub use wallet::{generate_wallet, WalletKeys};
