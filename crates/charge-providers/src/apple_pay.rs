//! # Apple Pay Backend
//!
//! Fast authorization with a high success rate.

use crate::profile::ProviderProfile;
use crate::util::{simulate_delay, transaction_id, DrawSource};
use async_trait::async_trait;
use charge_core::{PaymentOutcome, PaymentProvider};
use std::time::Duration;
use tracing::debug;

/// Processing characteristics of the simulated Apple Pay gateway
pub const APPLE_PAY_PROFILE: ProviderProfile = ProviderProfile {
    name: "Apple Pay",
    latency: Duration::from_millis(800),
    success_rate: 0.95,
    success_message: "✓ Payment authorized via Apple Pay",
    failure_message: "✗ Apple Pay authentication failed",
    id_prefix: "AP",
};

/// Simulated Apple Pay provider.
///
/// Created fresh per charge attempt by [`crate::ApplePayFactory`];
/// never reused.
pub struct ApplePayProvider {
    draw: DrawSource,
}

impl ApplePayProvider {
    /// Provider with the production draw source
    pub fn new() -> Self {
        Self {
            draw: DrawSource::default(),
        }
    }

    /// Provider with a substituted draw source (deterministic tests)
    pub fn with_draw_source(draw: DrawSource) -> Self {
        Self { draw }
    }
}

impl Default for ApplePayProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProvider for ApplePayProvider {
    fn name(&self) -> &'static str {
        APPLE_PAY_PROFILE.name
    }

    async fn process_payment(&self, _amount: f64) -> PaymentOutcome {
        let profile = &APPLE_PAY_PROFILE;

        // Simulated wallet round-trip
        simulate_delay(profile.latency).await;

        let success = self.draw.sample() < profile.success_rate;
        debug!(provider = profile.name, success, "simulated gateway response");

        PaymentOutcome::new(
            success,
            transaction_id(profile.id_prefix),
            if success {
                profile.success_message
            } else {
                profile.failure_message
            },
            profile.name,
        )
    }
}
