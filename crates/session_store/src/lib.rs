//! # Session Store
//!
//! Concurrency-safe mapping from a gateway session identifier to its
//! [`SessionRecord`]. Records are ephemeral by design: the gateway's
//! interaction window is short and nothing survives a process restart.
//!
//! Updates use merge semantics only: later steps of a multi-step flow must
//! retain fields set by earlier steps, so `upsert` folds a [`SessionPatch`]
//! into the existing record instead of replacing it.

pub mod error;
pub mod record;
pub mod store;

// Re-exports
pub use error::StoreError;
pub use record::{MenuState, SessionPatch, SessionRecord};
pub use store::{MemorySessionStore, SessionStore};
