//! # USSD Engine
//!
//! The session/state-machine core. Every inbound gateway callback becomes
//! one turn: the tokenizer extracts the latest answer from the cumulative
//! text, the session store supplies the current [`session_store::MenuState`],
//! and the dispatcher runs the handler for that state. Handlers compute a
//! [`ussd_core::Reply`] plus an atomic session patch; the engine applies the
//! patch (or deletes the record on a terminal reply) only after the handler
//! has fully finished, so a turn that dies mid-flight never leaves a
//! half-mutated record.
//!
//! Turns of the same session are serialized through a per-session lock;
//! turns of distinct sessions run fully in parallel.

pub mod balance;
pub mod bound;
pub mod engine;
pub mod error;
pub mod locks;
pub mod menu;
pub mod transfer;

// Re-exports
pub use balance::BalanceResolver;
pub use engine::UssdEngine;
pub use error::EngineError;
pub use transfer::TransferOrchestrator;
