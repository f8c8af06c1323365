use actix_web::{http::StatusCode, web::ServiceConfig};
use sepay_payment_engine::order_types::OrderStatusType;
use serde_json::{json, Value};

use super::{
    helpers::{order_fixture, post_request, register_routes},
    mocks::{MockOrderStore, MockVerifier},
};

#[actix_web::test]
async fn transfer_notice_marks_the_order_paid() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Unpaid))));
        store.expect_mark_paid().returning(|_| Ok((order_fixture(OrderStatusType::Paid), true)));
        // the webhook path must never consult the verifier
        register_routes(cfg, store, MockVerifier::new());
    }
    let payload = json!({ "content": "random text ORDER1700000000001 extra", "transferAmount": 50_000 });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn status_notice_marks_the_order_paid() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Unpaid))));
        store.expect_mark_paid().returning(|_| Ok((order_fixture(OrderStatusType::Paid), true)));
        register_routes(cfg, store, MockVerifier::new());
    }
    let payload = json!({ "orderId": "ORDER1700000000001", "status": "Paid" });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn duplicate_deliveries_are_acknowledged() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Paid))));
        // the flip already happened, so the registry reports no transition
        store.expect_mark_paid().returning(|_| Ok((order_fixture(OrderStatusType::Paid), false)));
        register_routes(cfg, store, MockVerifier::new());
    }
    let payload = json!({ "content": "ORDER1700000000001", "transferAmount": 50_000 });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
}

#[actix_web::test]
async fn notice_without_a_token_is_rejected() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        register_routes(cfg, MockOrderStore::new(), MockVerifier::new());
    }
    let payload = json!({ "content": "no token in here", "transferAmount": 50_000 });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn notice_for_an_unknown_order_is_not_found() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(None));
        register_routes(cfg, store, MockVerifier::new());
    }
    let payload = json!({ "orderId": "ORDER_DOES_NOT_EXIST", "status": "Paid" });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], false);
}

#[actix_web::test]
async fn non_positive_amount_does_not_flip_the_order() {
    let _ = env_logger::try_init();
    fn configure(cfg: &mut ServiceConfig) {
        let mut store = MockOrderStore::new();
        store.expect_fetch_order().returning(|_| Ok(Some(order_fixture(OrderStatusType::Unpaid))));
        // no mark_paid expectation: flipping the order here would fail the test
        register_routes(cfg, store, MockVerifier::new());
    }
    let payload = json!({ "content": "ORDER1700000000001", "transferAmount": 0 });
    let (status, body) = post_request("/api/webhook", payload, configure).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);
}
