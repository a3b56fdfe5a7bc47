//! # Cart & Receipt Stores
//!
//! In-memory storage for the checkout flow: one product list per cart,
//! and a one-shot receipt handoff between the checkout step and the
//! result view. Both are plumbing around the payment core and hold no
//! payment logic.

use crate::catalog::Product;
use charge_core::PaymentOutcome;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Shopping cart storage, keyed by cart id.
#[derive(Clone, Default)]
pub struct CartStore {
    inner: Arc<RwLock<HashMap<String, Vec<Product>>>>,
}

impl CartStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to a cart.
    ///
    /// Returns `false` if the product is already in the cart (one unit
    /// per product, matching the shop's single-quantity carts).
    pub fn add(&self, cart_id: &str, product: Product) -> bool {
        let mut carts = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let items = carts.entry(cart_id.to_string()).or_default();

        if items.iter().any(|p| p.id == product.id) {
            return false;
        }
        items.push(product);
        true
    }

    /// Snapshot of a cart's items
    pub fn items(&self, cart_id: &str) -> Vec<Product> {
        let carts = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        carts.get(cart_id).cloned().unwrap_or_default()
    }

    /// Number of items in a cart
    pub fn item_count(&self, cart_id: &str) -> usize {
        let carts = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        carts.get(cart_id).map(Vec::len).unwrap_or(0)
    }

    /// Total price of a cart's items
    pub fn total(&self, cart_id: &str) -> f64 {
        let carts = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        carts
            .get(cart_id)
            .map(|items| items.iter().map(|p| p.price).sum())
            .unwrap_or(0.0)
    }

    /// Remove a cart entirely
    pub fn clear(&self, cart_id: &str) {
        let mut carts = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        carts.remove(cart_id);
    }
}

/// The record handed to the result view after a charge attempt.
///
/// `amount` is appended here by the checkout flow; the payment core
/// returns only the outcome fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub success: bool,
    pub transaction_id: String,
    pub message: String,
    pub provider: String,
    pub amount: f64,
    pub created_at: DateTime<Utc>,
}

impl PaymentReceipt {
    /// Build a receipt from a payment outcome and the charged amount
    pub fn from_outcome(outcome: PaymentOutcome, amount: f64) -> Self {
        Self {
            success: outcome.success,
            transaction_id: outcome.transaction_id,
            message: outcome.message,
            provider: outcome.provider,
            amount,
            created_at: Utc::now(),
        }
    }
}

/// One receipt per cart, consumed when the result view reads it.
#[derive(Clone, Default)]
pub struct ReceiptStore {
    inner: Arc<RwLock<HashMap<String, PaymentReceipt>>>,
}

impl ReceiptStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the receipt for a cart, replacing any previous one
    pub fn store(&self, cart_id: &str, receipt: PaymentReceipt) {
        let mut receipts = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        receipts.insert(cart_id.to_string(), receipt);
    }

    /// Take the stored receipt, leaving nothing behind
    pub fn take(&self, cart_id: &str) -> Option<PaymentReceipt> {
        let mut receipts = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        receipts.remove(cart_id)
    }
}
