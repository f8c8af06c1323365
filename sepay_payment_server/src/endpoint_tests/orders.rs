use actix_web::{http::StatusCode, web::ServiceConfig};
use sepay_payment_engine::{order_types::OrderStatusType, VerificationOutcome, VerificationUnavailable};
use serde_json::{json, Value};

use super::{
    helpers::{get_request, order_fixture, post_request, register_routes},
    mocks::{MockOrderStore, MockVerifier},
};

#[actix_web::test]
async fn create_order_returns_the_qr_link() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_insert_order().returning(|_| Ok(order_fixture(OrderStatusType::Unpaid)));
        register_routes(cfg, store, MockVerifier::new());
    }
    let (status, body) = post_request("/api/create-order", json!({ "name": "A", "amount": 100_000 }), configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["orderId"], "ORDER1700000000001");
    assert_eq!(body["status"], "Unpaid");
    assert_eq!(
        body["qrUrl"],
        "https://img.vietqr.io/image/MB-0917436401-print.png?amount=100000&addInfo=ORDER1700000000001"
    );
}

#[actix_web::test]
async fn create_order_with_blank_name_is_rejected() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        // no expectations: validation must fail before the registry is reached
        register_routes(cfg, MockOrderStore::new(), MockVerifier::new());
    }
    let (status, body) = post_request("/api/create-order", json!({ "name": "  ", "amount": 100_000 }), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("error"));
}

#[actix_web::test]
async fn create_order_without_an_amount_is_rejected() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        register_routes(cfg, MockOrderStore::new(), MockVerifier::new());
    }
    let (status, _) = post_request("/api/create-order", json!({ "name": "A" }), configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn check_status_of_unknown_order_is_not_found() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(None));
        register_routes(cfg, store, MockVerifier::new());
    }
    let (status, body) =
        post_request("/api/check-payment-status", json!({ "orderId": "ORDER0" }), configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body.contains("error"));
}

#[actix_web::test]
async fn check_status_short_circuits_when_already_paid() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Paid))));
        // no check_payment expectation: consulting the verifier here would fail the test
        register_routes(cfg, store, MockVerifier::new());
    }
    let (status, body) =
        post_request("/api/check-payment-status", json!({ "orderId": "ORDER1700000000001" }), configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "Paid");
}

#[actix_web::test]
async fn check_status_applies_a_confirmed_verification() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Unpaid))));
        store.expect_mark_paid().returning(|_| Ok((order_fixture(OrderStatusType::Paid), true)));
        let mut verifier = MockVerifier::new();
        verifier.expect_check_payment().returning(|_| Ok(VerificationOutcome::Confirmed));
        register_routes(cfg, store, verifier);
    }
    let (status, body) =
        post_request("/api/check-payment-status", json!({ "orderId": "ORDER1700000000001" }), configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["status"], "Paid");
    assert_eq!(body["name"], "A");
    assert_eq!(body["amount"], 100_000);
}

#[actix_web::test]
async fn check_status_reports_an_unavailable_verifier_as_503() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Unpaid))));
        let mut verifier = MockVerifier::new();
        verifier
            .expect_check_payment()
            .returning(|_| Err(VerificationUnavailable("connection timed out".to_string())));
        register_routes(cfg, store, verifier);
    }
    let (status, body) =
        post_request("/api/check-payment-status", json!({ "orderId": "ORDER1700000000001" }), configure).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.contains("unavailable"));
}

#[actix_web::test]
async fn list_orders_returns_the_snapshot() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_all_orders().returning(|| {
            Ok(vec![order_fixture(OrderStatusType::Paid), order_fixture(OrderStatusType::Unpaid)])
        });
        register_routes(cfg, store, MockVerifier::new());
    }
    let (status, body) = get_request("/api/orders", configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Vec<Value> = serde_json::from_str(&body).unwrap();
    assert_eq!(body.len(), 2);
}
