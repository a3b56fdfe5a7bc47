//! # Payment Factory Trait & Registry
//!
//! Factory Method side of the provider abstraction: one stateless creator
//! per backend variant, plus the label → factory registry the checkout
//! flow selects from.

use crate::provider::PaymentProvider;
use std::collections::HashMap;
use std::sync::Arc;

/// Creator trait: produces payment providers of one fixed variant.
///
/// Implementations are pure and stateless. Every call MUST return a new
/// provider instance: the service relies on never receiving a shared
/// one, so no result caching or cross-call state can leak between
/// charge attempts.
pub trait PaymentFactory: Send + Sync {
    /// Create a fresh provider instance
    fn create_provider(&self) -> Box<dyn PaymentProvider>;
}

/// Type alias for a shared payment factory (dynamic dispatch)
pub type BoxedPaymentFactory = Arc<dyn PaymentFactory>;

/// Registry mapping user-facing payment-method labels to factories.
///
/// Built once at startup by the checkout surface and handed to it by
/// reference; the core never constructs this mapping, it only consumes
/// [`FactoryRegistry::get`]. An unresolved label is the caller's
/// `UnknownProvider` error, so there is no default fallback here.
#[derive(Clone, Default)]
pub struct FactoryRegistry {
    factories: HashMap<String, BoxedPaymentFactory>,
}

impl FactoryRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a factory under a payment-method label
    pub fn register(&mut self, label: impl Into<String>, factory: BoxedPaymentFactory) {
        self.factories.insert(label.into(), factory);
    }

    /// Register with builder pattern
    pub fn with_factory(
        mut self,
        label: impl Into<String>,
        factory: BoxedPaymentFactory,
    ) -> Self {
        self.register(label, factory);
        self
    }

    /// Look up a factory by label
    pub fn get(&self, label: &str) -> Option<&BoxedPaymentFactory> {
        self.factories.get(label)
    }

    /// List all registered payment-method labels
    pub fn labels(&self) -> Vec<&str> {
        self.factories.keys().map(|s| s.as_str()).collect()
    }

    /// Check if a label is registered
    pub fn has_method(&self, label: &str) -> bool {
        self.factories.contains_key(label)
    }

    /// Number of registered methods
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
