//! # charge-core
//!
//! Core types and traits for the chargeflow payment engine.
//!
//! This crate provides:
//! - `PaymentProvider` trait for payment backend implementations
//! - `PaymentFactory` trait and `FactoryRegistry` for provider creation
//! - `PaymentService` orchestrating validation and delegation
//! - `PaymentOutcome` result record
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use charge_core::{FactoryRegistry, PaymentService};
//!
//! // Registry wired by the checkout surface, one factory per method label
//! let registry = FactoryRegistry::new()
//!     .with_factory("PayPal", Arc::new(PayPalFactory));
//!
//! // Look up the selected method and charge the cart total
//! let factory = registry.get("PayPal").ok_or(...)?;
//! let outcome = PaymentService::new()
//!     .process_payment(factory.as_ref(), 49.99)
//!     .await?;
//!
//! // A decline still lands here, with outcome.success == false
//! println!("{}", outcome.message);
//! ```

pub mod error;
pub mod factory;
pub mod outcome;
pub mod provider;
pub mod service;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use factory::{BoxedPaymentFactory, FactoryRegistry, PaymentFactory};
pub use outcome::PaymentOutcome;
pub use provider::PaymentProvider;
pub use service::PaymentService;
