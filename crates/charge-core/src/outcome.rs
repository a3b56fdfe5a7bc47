//! # Payment Outcome
//!
//! The immutable result record of a single charge attempt.

use serde::{Deserialize, Serialize};

/// Result of one charge attempt through a payment provider.
///
/// Produced exactly once per invocation and returned as-is through the
/// service: the orchestration layer never merges, mutates, or enriches it.
/// Both authorized and declined charges are represented here; the `success`
/// flag is the only thing that distinguishes them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentOutcome {
    /// Whether the charge was authorized
    pub success: bool,

    /// Transaction identifier, `<prefix>-<epoch-millis>-<random token>`.
    /// Uniqueness is probabilistic, not guaranteed.
    pub transaction_id: String,

    /// Human-readable result message from the provider
    pub message: String,

    /// Display name of the provider that handled the charge
    pub provider: String,
}

impl PaymentOutcome {
    /// Create an outcome record
    pub fn new(
        success: bool,
        transaction_id: impl Into<String>,
        message: impl Into<String>,
        provider: impl Into<String>,
    ) -> Self {
        Self {
            success,
            transaction_id: transaction_id.into(),
            message: message.into(),
            provider: provider.into(),
        }
    }
}
