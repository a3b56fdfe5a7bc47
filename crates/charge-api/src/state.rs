//! # Application State
//!
//! Shared state for the Axum application: the payment-method registry,
//! the product catalog, cart and receipt stores, and configuration.
//!
//! The registry wiring lives here, at the edge: the payment core never
//! builds the label → factory mapping, it only consumes it.

use crate::cart::{CartStore, ReceiptStore};
use crate::catalog::ProductCatalog;
use charge_core::{FactoryRegistry, PaymentService};
use charge_providers::{
    ApplePayFactory, CreditCardFactory, PayPalFactory, APPLE_PAY_PROFILE, CREDIT_CARD_PROFILE,
    PAYPAL_PROFILE,
};
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Optional explicit catalog path (overrides the default lookup)
    pub catalog_path: Option<String>,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            catalog_path: std::env::var("CATALOG_PATH").ok(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment-method label → factory mapping
    pub registry: FactoryRegistry,
    /// Product catalog
    pub catalog: ProductCatalog,
    /// Shopping carts
    pub carts: CartStore,
    /// Receipt handoff for the result view
    pub receipts: ReceiptStore,
    /// Payment orchestration service (stateless, shared)
    pub service: PaymentService,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Create state from the environment, loading the product catalog
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();
        let catalog = load_product_catalog(config.catalog_path.as_deref())?;
        Ok(Self::with_catalog(config, catalog))
    }

    /// Create state with an explicit catalog (tests, embedded use)
    pub fn with_catalog(config: AppConfig, catalog: ProductCatalog) -> Self {
        Self {
            registry: default_registry(),
            catalog,
            carts: CartStore::new(),
            receipts: ReceiptStore::new(),
            service: PaymentService::new(),
            config,
        }
    }

    /// Payment-method labels offered at checkout, in stable order
    pub fn payment_methods(&self) -> Vec<String> {
        let mut labels: Vec<String> = self.registry.labels().iter().map(|l| l.to_string()).collect();
        labels.sort();
        labels
    }
}

/// Registry wiring: one factory per backend, keyed by display name.
///
/// This is the only place the concrete variants are named; everything
/// downstream works through the registry and the core traits.
pub fn default_registry() -> FactoryRegistry {
    FactoryRegistry::new()
        .with_factory(APPLE_PAY_PROFILE.name, Arc::new(ApplePayFactory))
        .with_factory(PAYPAL_PROFILE.name, Arc::new(PayPalFactory))
        .with_factory(CREDIT_CARD_PROFILE.name, Arc::new(CreditCardFactory))
}

/// Load product catalog from config file
fn load_product_catalog(explicit_path: Option<&str>) -> anyhow::Result<ProductCatalog> {
    let default_paths = [
        "config/products.toml",
        "../config/products.toml",
        "../../config/products.toml",
    ];

    let candidates: Vec<&str> = match explicit_path {
        Some(path) => vec![path],
        None => default_paths.to_vec(),
    };

    for path in candidates {
        if let Ok(content) = std::fs::read_to_string(path) {
            let catalog = ProductCatalog::from_toml(&content)
                .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path, e))?;
            tracing::info!("Loaded {} products from {}", catalog.products.len(), path);
            return Ok(catalog);
        }
    }

    // Return empty catalog if no config found
    tracing::warn!("No product catalog found, using empty catalog");
    Ok(ProductCatalog::new())
}
