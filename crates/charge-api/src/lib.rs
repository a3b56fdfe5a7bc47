//! # charge-api
//!
//! HTTP checkout surface for chargeflow-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Product catalog and cart endpoints
//! - The checkout step that drives the payment core
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | GET | `/api/v1/products` | List products |
//! | GET | `/api/v1/payment-methods` | Payment methods |
//! | POST | `/api/v1/carts` | Create cart |
//! | POST | `/api/v1/carts/{id}/items` | Add to cart |
//! | POST | `/api/v1/carts/{id}/checkout` | Charge the cart |
//! | GET | `/api/v1/carts/{id}/receipt` | Consume last receipt |

pub mod cart;
pub mod catalog;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
