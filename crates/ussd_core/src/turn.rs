//! Inbound turn - the per-callback value delivered by the USSD gateway

use serde::{Deserialize, Serialize};

/// One inbound callback from the USSD gateway.
///
/// The gateway delivers every keystroke as an independent HTTP callback
/// carrying the full accumulated input in `text`, with turns separated by
/// [`crate::tokenizer::TURN_DELIMITER`]. `service_code` and `network_code`
/// are opaque gateway metadata, passed through unused by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundTurn {
    /// Opaque session identifier, stable for the life of one interaction.
    pub session_id: String,
    /// The caller's phone number, the external user key.
    pub phone_number: String,
    /// The dialed service code, e.g. `*384*23273#`.
    pub service_code: String,
    /// Mobile network operator code.
    pub network_code: String,
    /// Full cumulative input since session start, delimiter separated.
    pub text: String,
}

impl InboundTurn {
    pub fn new(
        session_id: impl Into<String>,
        phone_number: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            session_id: session_id.into(),
            phone_number: phone_number.into(),
            service_code: String::new(),
            network_code: String::new(),
            text: text.into(),
        }
    }
}
