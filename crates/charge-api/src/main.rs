//! # ChargeFlow RS
//!
//! Checkout engine with interchangeable simulated payment backends.
//!
//! ## Usage
//!
//! ```bash
//! # Optional configuration
//! export HOST=0.0.0.0
//! export PORT=8080
//! export CATALOG_PATH=config/products.toml
//!
//! # Run the server
//! chargeflow
//! ```

use charge_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.products.len());
    info!("Payment methods: {:?}", state.payment_methods());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("⚡ ChargeFlow starting on http://{}", addr);

    if !is_prod {
        info!("📝 Health: http://{}/health", addr);
        info!("🛒 Products: GET http://{}/api/v1/products", addr);
        info!("💳 Checkout: POST http://{}/api/v1/carts/{{cart_id}}/checkout", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn print_banner() {
    println!(
        r#"
  ⚡ ChargeFlow RS ⚡
  ━━━━━━━━━━━━━━━━━━━
  Simulated checkout engine
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
