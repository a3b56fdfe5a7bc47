//! # Concrete Payment Factories
//!
//! One creator per backend variant, in a fixed 1:1 mapping. Factories
//! are stateless unit types: creating a provider has no effect on any
//! later creation, and the same factory value can be reused for the
//! lifetime of the process.

use crate::apple_pay::ApplePayProvider;
use crate::credit_card::CreditCardProvider;
use crate::paypal::PayPalProvider;
use charge_core::{PaymentFactory, PaymentProvider};

/// Creator for [`ApplePayProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ApplePayFactory;

impl PaymentFactory for ApplePayFactory {
    fn create_provider(&self) -> Box<dyn PaymentProvider> {
        Box::new(ApplePayProvider::new())
    }
}

/// Creator for [`PayPalProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct PayPalFactory;

impl PaymentFactory for PayPalFactory {
    fn create_provider(&self) -> Box<dyn PaymentProvider> {
        Box::new(PayPalProvider::new())
    }
}

/// Creator for [`CreditCardProvider`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CreditCardFactory;

impl PaymentFactory for CreditCardFactory {
    fn create_provider(&self) -> Box<dyn PaymentProvider> {
        Box::new(CreditCardProvider::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_create_matching_providers() {
        assert_eq!(ApplePayFactory.create_provider().name(), "Apple Pay");
        assert_eq!(PayPalFactory.create_provider().name(), "PayPal");
        assert_eq!(CreditCardFactory.create_provider().name(), "Credit Card");
    }

    #[test]
    fn test_factory_creates_fresh_instances() {
        let factory = CreditCardFactory;

        let p1 = factory.create_provider();
        let p2 = factory.create_provider();

        assert!(
            !std::ptr::eq(&*p1, &*p2),
            "each call must produce a new provider instance"
        );
    }

    #[test]
    fn test_factories_usable_polymorphically() {
        let factories: Vec<Box<dyn PaymentFactory>> = vec![
            Box::new(CreditCardFactory),
            Box::new(PayPalFactory),
            Box::new(ApplePayFactory),
        ];

        let names: Vec<&str> = factories
            .iter()
            .map(|f| f.create_provider().name())
            .collect();

        assert_eq!(names, vec!["Credit Card", "PayPal", "Apple Pay"]);
    }
}
