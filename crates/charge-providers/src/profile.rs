//! # Provider Profile
//!
//! Fixed processing characteristics of a simulated backend.

use std::time::Duration;

/// Constants describing how one backend variant behaves.
///
/// Profiles are compile-time constants; a provider owns nothing mutable
/// beyond the draw source it was constructed with.
pub struct ProviderProfile {
    /// Display name, surfaced as `PaymentOutcome::provider`
    pub name: &'static str,

    /// Simulated network round-trip
    pub latency: Duration,

    /// Probability in [0, 1] that a charge is authorized
    pub success_rate: f64,

    /// Message returned on authorization
    pub success_message: &'static str,

    /// Message returned on decline
    pub failure_message: &'static str,

    /// Two-letter transaction-id prefix
    pub id_prefix: &'static str,
}
