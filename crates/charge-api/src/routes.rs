//! # Routes
//!
//! Axum router configuration for the checkout API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET    /health - Health check
/// - GET    /api/v1/products - List active products
/// - GET    /api/v1/products/{product_id} - Get product by ID
/// - GET    /api/v1/payment-methods - List payment-method labels
/// - POST   /api/v1/carts - Create a cart
/// - GET    /api/v1/carts/{cart_id} - Cart contents and total
/// - DELETE /api/v1/carts/{cart_id} - Empty a cart
/// - POST   /api/v1/carts/{cart_id}/items - Add product to cart
/// - POST   /api/v1/carts/{cart_id}/checkout - Charge the cart
/// - GET    /api/v1/carts/{cart_id}/receipt - Consume the last receipt
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - the shop frontend is served from a different origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/products", get(handlers::list_products))
        .route("/products/{product_id}", get(handlers::get_product))
        .route("/payment-methods", get(handlers::list_payment_methods))
        .route("/carts", post(handlers::create_cart))
        .route(
            "/carts/{cart_id}",
            get(handlers::get_cart).delete(handlers::clear_cart),
        )
        .route("/carts/{cart_id}/items", post(handlers::add_cart_item))
        .route("/carts/{cart_id}/checkout", post(handlers::checkout))
        .route("/carts/{cart_id}/receipt", get(handlers::get_receipt));

    Router::new()
        // Health check at root
        .route("/health", get(handlers::health))
        .route("/", get(handlers::health))
        // API v1
        .nest("/api/v1", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
