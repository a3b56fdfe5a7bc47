//! # Payment Service
//!
//! Orchestrates a charge attempt: validates the amount, asks the factory
//! for a fresh provider, and returns the provider's outcome verbatim.

use crate::error::{PaymentError, PaymentResult};
use crate::factory::PaymentFactory;
use crate::outcome::PaymentOutcome;
use tracing::{info, instrument, warn};

/// Stateless orchestration service.
///
/// Holds nothing between calls; one instance can be shared across all
/// concurrent checkouts. Each call walks Validating → Delegating →
/// AwaitingProvider → Completed, with an early exit to Rejected when the
/// amount is invalid. On that path no factory or provider is ever
/// touched, so an invalid request costs no latency and no random draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentService;

impl PaymentService {
    /// Create a new service
    pub fn new() -> Self {
        Self
    }

    /// Process a charge of `amount` through whichever backend `factory`
    /// produces.
    ///
    /// Returns `Err(PaymentError::InvalidAmount)` for amounts that are not
    /// strictly positive (non-finite values are rejected on the same path).
    /// Every other result, including a declined charge, is `Ok` with the
    /// provider's outcome, untouched.
    #[instrument(skip(self, factory))]
    pub async fn process_payment(
        &self,
        factory: &dyn PaymentFactory,
        amount: f64,
    ) -> PaymentResult<PaymentOutcome> {
        if !amount.is_finite() || amount <= 0.0 {
            warn!(amount, "rejected charge attempt");
            return Err(PaymentError::InvalidAmount);
        }

        let provider = factory.create_provider();
        info!(provider = provider.name(), "processing ${:.2}", amount);

        let outcome = provider.process_payment(amount).await;

        if outcome.success {
            info!(
                transaction_id = %outcome.transaction_id,
                "{}", outcome.message
            );
        } else {
            warn!(
                transaction_id = %outcome.transaction_id,
                "{}", outcome.message
            );
        }

        Ok(outcome)
    }
}
