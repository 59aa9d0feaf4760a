//! # Ledger Client
//!
//! The value-transfer collaborator of the session engine. The engine only
//! depends on the [`LedgerClient`] trait; latency and failure modes of a
//! real RPC implementation are opaque to it, and any failure maps to the
//! generic transient-failure reply.
//!
//! [`MemoryLedger`] is the in-process backing used by tests and the
//! standalone development server.

pub mod client;
pub mod error;
pub mod lamports;
pub mod memory;

// Re-exports
pub use client::LedgerClient;
pub use error::LedgerError;
pub use lamports::{lamports_to_sol, sol_to_lamports, LAMPORTS_PER_SOL};
pub use memory::MemoryLedger;
