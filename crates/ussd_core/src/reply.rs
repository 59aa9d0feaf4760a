//! Reply - the structured per-turn outcome
//!
//! The gateway protocol is two-token: a response body starting with `CON`
//! keeps the session open and prompts for more input, `END` closes it.
//! Handlers never build those prefixes themselves; they return a [`Reply`]
//! and the transport renders it exactly once.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Prefix for a response that keeps the session open.
pub const CONTINUE_PREFIX: &str = "CON";

/// Prefix for a response that terminates the session.
pub const TERMINATE_PREFIX: &str = "END";

/// The outcome of one turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Reply {
    /// Session stays open; the gateway will redeliver the cumulative text
    /// including the user's next answer.
    Continue(String),
    /// Session is closed; the engine must discard all session state.
    Terminate(String),
}

impl Reply {
    pub fn continue_with(text: impl Into<String>) -> Self {
        Reply::Continue(text.into())
    }

    pub fn terminate(text: impl Into<String>) -> Self {
        Reply::Terminate(text.into())
    }

    /// Whether this reply closes the session.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Reply::Terminate(_))
    }

    /// The user-visible message body, without the protocol prefix.
    pub fn text(&self) -> &str {
        match self {
            Reply::Continue(text) | Reply::Terminate(text) => text,
        }
    }

    /// Render the wire form, e.g. `CON Welcome to YouSSD. ...`.
    pub fn render(&self) -> String {
        match self {
            Reply::Continue(text) => format!("{CONTINUE_PREFIX} {text}"),
            Reply::Terminate(text) => format!("{TERMINATE_PREFIX} {text}"),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_continue_prefix() {
        let reply = Reply::continue_with("Enter amount:");
        assert_eq!(reply.render(), "CON Enter amount:");
        assert!(!reply.is_terminal());
    }

    #[test]
    fn render_terminate_prefix() {
        let reply = Reply::terminate("Goodbye!");
        assert_eq!(reply.render(), "END Goodbye!");
        assert!(reply.is_terminal());
    }

    #[test]
    fn text_strips_nothing() {
        let reply = Reply::terminate("Your balance is: 3 SOL");
        assert_eq!(reply.text(), "Your balance is: 3 SOL");
    }
}
