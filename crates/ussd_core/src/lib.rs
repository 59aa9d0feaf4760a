//! ussd_core - Core types for the USSD wallet engine
//!
//! This crate provides the foundational types shared by the engine and the
//! transport adapter:
//! - `turn` - the inbound callback value per USSD turn
//! - `reply` - the structured continue/terminate outcome
//! - `tokenizer` - cumulative input text parsing
//! - `validate` - signup input validation
//! - `config` - engine tunables

pub mod config;
pub mod reply;
pub mod tokenizer;
pub mod turn;
pub mod validate;

// Re-export commonly used types
pub use config::EngineConfig;
pub use reply::Reply;
pub use tokenizer::{latest_token, tokenize, TURN_DELIMITER};
pub use turn::InboundTurn;
pub use validate::{split_signup, title_case, validate_username};
