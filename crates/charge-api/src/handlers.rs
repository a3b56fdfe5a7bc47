//! # Request Handlers
//!
//! Axum request handlers for the checkout flow: catalog browsing, cart
//! management, and the checkout step that drives the payment core.

use crate::cart::PaymentReceipt;
use crate::catalog::Product;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use charge_core::PaymentError;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use uuid::Uuid;

// =============================================================================
// Request/Response Types
// =============================================================================

/// Response for cart creation
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCartResponse {
    /// Identifier to use for all subsequent cart operations
    pub cart_id: String,
}

/// Request to add a product to a cart
#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    /// Product ID from the catalog
    pub product_id: String,
}

/// Response after an add-to-cart attempt
#[derive(Debug, Serialize, Deserialize)]
pub struct AddItemResponse {
    /// false when the product was already in the cart
    pub added: bool,
    /// Items now in the cart
    pub item_count: usize,
}

/// Cart contents and totals
#[derive(Debug, Serialize, Deserialize)]
pub struct CartView {
    pub items: Vec<Product>,
    pub total: f64,
    /// Two-decimal rendering of `total`
    pub display_total: String,
}

/// Request to charge a cart
#[derive(Debug, Deserialize)]
pub struct CheckoutRequest {
    /// Payment-method label, as listed by `/payment-methods`
    pub method: String,
}

/// Payment methods offered at checkout
#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentMethodsResponse {
    pub methods: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16) -> Self {
        Self {
            error: error.into(),
            code,
        }
    }
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status_code();
    let response = ErrorResponse::new(err.to_string(), code);
    (
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        Json(response),
    )
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "chargeflow",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// List all active products
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    Json(state.catalog.active_products().cloned().collect())
}

/// Get a single product by ID
pub async fn get_product(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<Product>, (StatusCode, Json<ErrorResponse>)> {
    state
        .catalog
        .get(&product_id)
        .cloned()
        .map(Json)
        .ok_or_else(|| payment_error_to_response(PaymentError::ProductNotFound { product_id }))
}

/// List the payment methods offered at checkout
pub async fn list_payment_methods(State(state): State<AppState>) -> Json<PaymentMethodsResponse> {
    Json(PaymentMethodsResponse {
        methods: state.payment_methods(),
    })
}

/// Create a new cart
pub async fn create_cart() -> Json<CreateCartResponse> {
    Json(CreateCartResponse {
        cart_id: Uuid::new_v4().to_string(),
    })
}

/// Add a catalog product to a cart
#[instrument(skip(state, request), fields(product_id = %request.product_id))]
pub async fn add_cart_item(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    Json(request): Json<AddItemRequest>,
) -> Result<Json<AddItemResponse>, (StatusCode, Json<ErrorResponse>)> {
    let product = state
        .catalog
        .get(&request.product_id)
        .filter(|p| p.active)
        .cloned()
        .ok_or_else(|| {
            payment_error_to_response(PaymentError::ProductNotFound {
                product_id: request.product_id.clone(),
            })
        })?;

    let added = state.carts.add(&cart_id, product);

    Ok(Json(AddItemResponse {
        added,
        item_count: state.carts.item_count(&cart_id),
    }))
}

/// Show a cart's items and total
pub async fn get_cart(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> Json<CartView> {
    let items = state.carts.items(&cart_id);
    let total = state.carts.total(&cart_id);

    Json(CartView {
        items,
        total,
        display_total: format!("{:.2}", total),
    })
}

/// Empty a cart
pub async fn clear_cart(State(state): State<AppState>, Path(cart_id): Path<String>) -> StatusCode {
    state.carts.clear(&cart_id);
    StatusCode::NO_CONTENT
}

/// Charge a cart through the selected payment method.
///
/// The label is resolved against the registry here, at the edge; the
/// payment service itself never sees an unresolved label. On success
/// the cart is emptied, and either way the receipt is stored for the
/// result view with the charged amount appended.
#[instrument(skip(state, request), fields(cart_id = %cart_id, method = %request.method))]
pub async fn checkout(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Json<PaymentReceipt>, (StatusCode, Json<ErrorResponse>)> {
    if state.carts.item_count(&cart_id) == 0 {
        return Err(payment_error_to_response(PaymentError::EmptyCart));
    }

    let factory = state.registry.get(&request.method).ok_or_else(|| {
        payment_error_to_response(PaymentError::UnknownProvider {
            label: request.method.clone(),
        })
    })?;

    let total = state.carts.total(&cart_id);

    let outcome = state
        .service
        .process_payment(factory.as_ref(), total)
        .await
        .map_err(payment_error_to_response)?;

    if outcome.success {
        state.carts.clear(&cart_id);
    }

    let receipt = PaymentReceipt::from_outcome(outcome, total);
    state.receipts.store(&cart_id, receipt.clone());

    info!(
        transaction_id = %receipt.transaction_id,
        success = receipt.success,
        "checkout completed"
    );

    Ok(Json(receipt))
}

/// Fetch (and consume) the receipt from the last charge attempt
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(cart_id): Path<String>,
) -> Result<Json<PaymentReceipt>, (StatusCode, Json<ErrorResponse>)> {
    state.receipts.take(&cart_id).map(Json).ok_or((
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::new("No receipt for this cart", 404)),
    ))
}
