//! # Credit Card Backend
//!
//! Slower processing (bank validation) with a lower success rate.

use crate::profile::ProviderProfile;
use crate::util::{simulate_delay, transaction_id, DrawSource};
use async_trait::async_trait;
use charge_core::{PaymentOutcome, PaymentProvider};
use std::time::Duration;
use tracing::debug;

/// Processing characteristics of the simulated card network
pub const CREDIT_CARD_PROFILE: ProviderProfile = ProviderProfile {
    name: "Credit Card",
    latency: Duration::from_millis(2000),
    success_rate: 0.85,
    success_message: "✓ Credit Card charged successfully",
    failure_message: "✗ Credit Card declined - contact your bank",
    id_prefix: "CC",
};

/// Simulated credit card provider.
pub struct CreditCardProvider {
    draw: DrawSource,
}

impl CreditCardProvider {
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

impl Default for CreditCardProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentProvider for CreditCardProvider {
    fn name(&self) -> &'static str {
        CREDIT_CARD_PROFILE.name
    }

    async fn process_payment(&self, _amount: f64) -> PaymentOutcome {
        let profile = &CREDIT_CARD_PROFILE;

        // Bank validation takes longer than the wallet providers
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
