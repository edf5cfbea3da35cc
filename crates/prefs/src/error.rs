//! Error types for the preference layer.
//!
//! Responsibilities:
//! - Report a required preference that has no valid value.
//! - Report invalid namespace configuration and malformed sync configs.
//!
//! Does NOT handle:
//! - Host store write or observer failures; those reach the caller as the
//!   store's own error type, unwrapped.
//! - Type mismatches on read, which convert to an absent value.
//!
//! Invariants:
//! - `MissingPreference` always names the preference that was requested.
//! - Token values never appear in error messages.

use thiserror::Error;

use crate::registry::NoteroPref;

/// Errors raised by the accessor and its helpers.
#[derive(Error, Debug)]
pub enum PrefError {
    #[error("Missing required preference: {0}")]
    MissingPreference(NoteroPref),

    #[error("Invalid preference namespace '{namespace}': {message}")]
    InvalidNamespace { namespace: String, message: String },

    #[error("Failed to parse collection sync configs: {0}")]
    InvalidSyncConfigs(#[source] serde_json::Error),

    #[error("Failed to serialize collection sync configs: {0}")]
    SerializeSyncConfigs(#[source] serde_json::Error),
}

impl PrefError {
    /// The preference a `MissingPreference` error refers to.
    pub fn missing_pref(&self) -> Option<NoteroPref> {
        match self {
            Self::MissingPreference(pref) => Some(*pref),
            _ => None,
        }
    }
}
