//! # PayPal Backend
//!
//! Medium-speed processing with a good success rate.

use crate::profile::ProviderProfile;
use crate::util::{simulate_delay, transaction_id, DrawSource};
use async_trait::async_trait;
use charge_core::{PaymentOutcome, PaymentProvider};
use std::time::Duration;
use tracing::debug;

/// Processing characteristics of the simulated PayPal gateway
pub const PAYPAL_PROFILE: ProviderProfile = ProviderProfile {
    name: "PayPal",
    latency: Duration::from_millis(1500),
    success_rate: 0.90,
    success_message: "✓ Payment successful via PayPal",
    failure_message: "✗ PayPal payment declined - insufficient funds",
    id_prefix: "PP",
};

/// Simulated PayPal provider.
pub struct PayPalProvider {
    draw: DrawSource,
}

impl PayPalProvider {
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

impl Default for PayPalProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProvider for PayPalProvider {
    fn name(&self) -> &'static str {
        PAYPAL_PROFILE.name
    }

    async fn process_payment(&self, _amount: f64) -> PaymentOutcome {
        let profile = &PAYPAL_PROFILE;

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
