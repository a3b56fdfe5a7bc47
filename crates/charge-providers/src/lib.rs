//! # charge-providers
//!
//! Simulated payment backends for chargeflow-rs.
//!
//! Three interchangeable variants implement the core
//! [`charge_core::PaymentProvider`] trait, each modeling a remote gateway
//! with a fixed latency and success probability:
//!
//! | Variant     | Latency | Success rate | Id prefix |
//! |-------------|---------|--------------|-----------|
//! | Apple Pay   |  800 ms | 0.95         | `AP`      |
//! | PayPal      | 1500 ms | 0.90         | `PP`      |
//! | Credit Card | 2000 ms | 0.85         | `CC`      |
//!
//! No network traffic is involved; the latency is a plain timer sleep and
//! the outcome is a random draw. A declined charge still resolves
//! normally, only the `success` flag differs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use charge_core::{PaymentFactory, PaymentService};
//! use charge_providers::PayPalFactory;
//!
//! let outcome = PaymentService::new()
//!     .process_payment(&PayPalFactory, 49.99)
//!     .await?;
//!
//! println!("{} -> {}", outcome.transaction_id, outcome.message);
//! ```

pub mod apple_pay;
pub mod credit_card;
pub mod factories;
pub mod paypal;
pub mod profile;
pub mod util;

// Re-exports
pub use apple_pay::{ApplePayProvider, APPLE_PAY_PROFILE};
pub use credit_card::{CreditCardProvider, CREDIT_CARD_PROFILE};
pub use factories::{ApplePayFactory, CreditCardFactory, PayPalFactory};
pub use paypal::{PayPalProvider, PAYPAL_PROFILE};
pub use profile::ProviderProfile;
pub use util::{simulate_delay, transaction_id, DrawSource};
