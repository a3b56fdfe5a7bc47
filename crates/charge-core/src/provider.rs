//! # Payment Provider Trait
//!
//! Core capability trait for payment backends.
//! Implementations: Apple Pay, PayPal, Credit Card.
//!
//! ## Design Pattern
//!
//! Each backend implements `PaymentProvider`, and the orchestration
//! service only ever sees the trait object, so backends can be swapped
//! at runtime without touching client code.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   PaymentProvider (trait)                   │
//! │  ├── process_payment()                                      │
//! │  └── name()                                                 │
//! └─────────────────────────────────────────────────────────────┘
//!                            ▲
//!          ┌─────────────────┼─────────────────┐
//!          │                 │                 │
//!  ┌───────┴───────┐ ┌───────┴───────┐ ┌───────┴───────┐
//!  │ ApplePay      │ │ PayPal        │ │ CreditCard    │
//!  │ Provider      │ │ Provider      │ │ Provider      │
//!  └───────────────┘ └───────────────┘ └───────────────┘
//! ```

use crate::outcome::PaymentOutcome;
use async_trait::async_trait;

/// Core trait for payment backend implementations.
///
/// A provider is created fresh for each charge attempt, holds no mutable
/// state, and dies once its outcome is returned.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Display name of the backend (for logging and receipts)
    fn name(&self) -> &'static str;

    /// Attempt to charge `amount`.
    ///
    /// This call always resolves with a [`PaymentOutcome`]: a business
    /// decline is a normal outcome with `success == false`, never an error.
    /// The only suspension point is the backend's simulated network
    /// round-trip.
    async fn process_payment(&self, amount: f64) -> PaymentOutcome;
}
