//! # Payment Error Types
//!
//! Typed error handling for the chargeflow payment engine.
//! Fallible payment operations return `Result<T, PaymentError>`.
//!
//! A declined charge is NOT an error. Providers always resolve with a
//! [`crate::PaymentOutcome`], and a decline is an outcome with
//! `success == false`. The variants here cover the only genuine failure
//! modes: bad input, an unresolvable payment-method label, and the
//! plumbing around them.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Charge amount was zero or negative (or not a finite number).
    /// Raised by the service before any provider is touched.
    #[error("Payment amount must be greater than zero")]
    InvalidAmount,

    /// The selected payment-method label has no registered factory.
    /// Raised by the caller that owns the registry, never by the service.
    #[error("Unknown payment provider: {label}")]
    UnknownProvider { label: String },

    /// Checkout attempted with an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Product not found in catalog
    #[error("Product not found: {product_id}")]
    ProductNotFound { product_id: String },

    /// Configuration errors (missing files, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::InvalidAmount => 400,
            PaymentError::UnknownProvider { .. } => 400,
            PaymentError::EmptyCart => 400,
            PaymentError::ProductNotFound { .. } => 404,
            PaymentError::Configuration(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;
