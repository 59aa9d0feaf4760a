//! Engine configuration
//!
//! Tunables are read from the environment with coded defaults, so the
//! standalone binary can adjust them without a config file.

use std::time::Duration;

/// Tunables for the session engine.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Maximum age of a cached balance before a ledger refresh is required.
    pub balance_freshness: Duration,
    /// Upper bound on any single directory or ledger call.
    pub collaborator_timeout: Duration,
}

const DEFAULT_FRESHNESS_SECS: u64 = 10;
const DEFAULT_COLLABORATOR_TIMEOUT_SECS: u64 = 10;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            balance_freshness: Duration::from_secs(DEFAULT_FRESHNESS_SECS),
            collaborator_timeout: Duration::from_secs(DEFAULT_COLLABORATOR_TIMEOUT_SECS),
        }
    }
}

impl EngineConfig {
    /// Build a config from `USSD_FRESHNESS_SECS` and
    /// `USSD_COLLABORATOR_TIMEOUT_SECS`, falling back to defaults for
    /// missing or unparseable values.
    pub fn from_env() -> Self {
        Self {
            balance_freshness: Duration::from_secs(parse_secs_env(
                "USSD_FRESHNESS_SECS",
                DEFAULT_FRESHNESS_SECS,
            )),
            collaborator_timeout: Duration::from_secs(parse_secs_env(
                "USSD_COLLABORATOR_TIMEOUT_SECS",
                DEFAULT_COLLABORATOR_TIMEOUT_SECS,
            )),
        }
    }
}

fn parse_secs_env(key: &str, default: u64) -> u64 {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("ignoring unparseable {key}={value:?}");
            default
        }),
        Err(_) => default,
    }
}
