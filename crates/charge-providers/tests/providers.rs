//! End-to-end conformance tests for the simulated backends, driven
//! through the orchestration service the way the checkout surface
//! drives them. Latency and concurrency assertions run on tokio's
//! virtual clock, so the profile figures are checked exactly.

use charge_core::{PaymentError, PaymentFactory, PaymentService};
use charge_providers::{
    ApplePayFactory, ApplePayProvider, CreditCardFactory, CreditCardProvider, DrawSource,
    PayPalFactory, PayPalProvider, APPLE_PAY_PROFILE, CREDIT_CARD_PROFILE, PAYPAL_PROFILE,
};
use std::time::Duration;

/// Asserts the `<prefix>-<epoch-millis>-<9-char base36 token>` shape.
fn assert_transaction_id(id: &str, prefix: &str) {
    let parts: Vec<&str> = id.split('-').collect();
    assert_eq!(parts.len(), 3, "unexpected id shape: {id}");
    assert_eq!(parts[0], prefix);
    assert!(!parts[1].is_empty() && parts[1].chars().all(|c| c.is_ascii_digit()));
    assert_eq!(parts[2].len(), 9);
    assert!(parts[2]
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
}

#[tokio::test(start_paused = true)]
async fn credit_card_checkout_scenario() {
    let service = PaymentService::new();

    let outcome = service
        .process_payment(&CreditCardFactory, 100.0)
        .await
        .expect("a positive amount must resolve");

    assert_eq!(outcome.provider, "Credit Card");
    assert_transaction_id(&outcome.transaction_id, "CC");
    if outcome.success {
        assert!(outcome.message.contains('✓'));
    } else {
        assert!(outcome.message.contains('✗'));
    }
}

#[tokio::test(start_paused = true)]
async fn zero_amount_rejected_for_every_variant() {
    let service = PaymentService::new();
    let factories: Vec<Box<dyn PaymentFactory>> = vec![
        Box::new(ApplePayFactory),
        Box::new(PayPalFactory),
        Box::new(CreditCardFactory),
    ];

    for factory in &factories {
        let err = service
            .process_payment(factory.as_ref(), 0.0)
            .await
            .unwrap_err();

        assert!(matches!(err, PaymentError::InvalidAmount));
        assert_eq!(err.to_string(), "Payment amount must be greater than zero");
    }
}

#[tokio::test(start_paused = true)]
async fn negative_amount_rejected_with_same_message() {
    let service = PaymentService::new();

    let err = service
        .process_payment(&PayPalFactory, -50.0)
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "Payment amount must be greater than zero");
}

#[tokio::test(start_paused = true)]
async fn sub_unit_amount_resolves_normally() {
    let service = PaymentService::new();

    let outcome = service
        .process_payment(&ApplePayFactory, 0.01)
        .await
        .expect("fractional amounts are valid");

    assert_eq!(outcome.provider, "Apple Pay");
    assert_transaction_id(&outcome.transaction_id, "AP");
}

#[tokio::test(start_paused = true)]
async fn invalid_amount_costs_no_latency() {
    let service = PaymentService::new();

    let start = tokio::time::Instant::now();
    let result = service.process_payment(&CreditCardFactory, -1.0).await;

    assert!(result.is_err());
    assert_eq!(start.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn latency_conformance_per_variant() {
    let service = PaymentService::new();

    let start = tokio::time::Instant::now();
    service.process_payment(&ApplePayFactory, 10.0).await.unwrap();
    assert_eq!(start.elapsed(), APPLE_PAY_PROFILE.latency);

    let start = tokio::time::Instant::now();
    service.process_payment(&PayPalFactory, 10.0).await.unwrap();
    assert_eq!(start.elapsed(), PAYPAL_PROFILE.latency);

    let start = tokio::time::Instant::now();
    service.process_payment(&CreditCardFactory, 10.0).await.unwrap();
    assert_eq!(start.elapsed(), CREDIT_CARD_PROFILE.latency);
}

#[tokio::test(start_paused = true)]
async fn concurrent_charges_overlap_their_latencies() {
    let service = PaymentService::new();

    let start = tokio::time::Instant::now();
    let (a, b, c) = tokio::join!(
        service.process_payment(&ApplePayFactory, 10.0),
        service.process_payment(&ApplePayFactory, 20.0),
        service.process_payment(&ApplePayFactory, 30.0),
    );

    assert!(a.is_ok() && b.is_ok() && c.is_ok());
    // Wall time tracks the slowest individual charge, not the sum.
    assert_eq!(start.elapsed(), APPLE_PAY_PROFILE.latency);
}

#[tokio::test(start_paused = true)]
async fn mixed_variants_finish_with_the_slowest() {
    let service = PaymentService::new();

    let start = tokio::time::Instant::now();
    let _ = tokio::join!(
        service.process_payment(&ApplePayFactory, 10.0),
        service.process_payment(&PayPalFactory, 10.0),
        service.process_payment(&CreditCardFactory, 10.0),
    );

    assert_eq!(start.elapsed(), CREDIT_CARD_PROFILE.latency);
}

#[tokio::test(start_paused = true)]
async fn consecutive_charges_yield_distinct_transaction_ids() {
    let service = PaymentService::new();

    let first = service
        .process_payment(&CreditCardFactory, 100.0)
        .await
        .unwrap();
    let second = service
        .process_payment(&CreditCardFactory, 100.0)
        .await
        .unwrap();

    assert_ne!(first.transaction_id, second.transaction_id);
}

/// Empirical success rate over `n` seeded charges through fresh provider
/// instances sharing one draw stream.
async fn empirical_success_rate<P, F>(n: usize, seed: u64, make: F) -> f64
where
    P: charge_core::PaymentProvider,
    F: Fn(DrawSource) -> P,
{
    let draw = DrawSource::seeded(seed);
    let mut successes = 0usize;

    for _ in 0..n {
        let provider = make(draw.clone());
        if provider.process_payment(10.0).await.success {
            successes += 1;
        }
    }

    successes as f64 / n as f64
}

#[tokio::test(start_paused = true)]
async fn apple_pay_statistical_conformance() {
    let rate = empirical_success_rate(1000, 11, ApplePayProvider::with_draw_source).await;

    assert!(
        (rate - APPLE_PAY_PROFILE.success_rate).abs() < 0.05,
        "empirical rate {rate} too far from {}",
        APPLE_PAY_PROFILE.success_rate
    );
}

#[tokio::test(start_paused = true)]
async fn paypal_statistical_conformance() {
    let rate = empirical_success_rate(1000, 13, PayPalProvider::with_draw_source).await;

    assert!(
        (rate - PAYPAL_PROFILE.success_rate).abs() < 0.05,
        "empirical rate {rate} too far from {}",
        PAYPAL_PROFILE.success_rate
    );
}

#[tokio::test(start_paused = true)]
async fn credit_card_statistical_conformance() {
    let rate = empirical_success_rate(1000, 17, CreditCardProvider::with_draw_source).await;

    assert!(
        (rate - CREDIT_CARD_PROFILE.success_rate).abs() < 0.05,
        "empirical rate {rate} too far from {}",
        CREDIT_CARD_PROFILE.success_rate
    );
}
