use actix_web::{
    http::StatusCode,
    test,
    test::TestRequest,
    web,
    web::ServiceConfig,
    App,
};
use chrono::{TimeZone, Utc};
use sepay_payment_engine::{
    events::EventProducers,
    order_types::{Order, OrderId, OrderStatusType},
    OrderFlowApi,
};
use spg_common::Vnd;

use super::mocks::{MockOrderStore, MockVerifier};
use crate::{
    config::VietQrConfig,
    routes::{check_payment_status, create_order, orders, sepay_webhook},
};

pub async fn get_request(path: &str, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::get().uri(path);
    send_request(req, configure).await
}

pub async fn post_request(path: &str, body: serde_json::Value, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let req = TestRequest::post().uri(path).set_json(&body);
    send_request(req, configure).await
}

async fn send_request(req: TestRequest, configure: fn(&mut ServiceConfig)) -> (StatusCode, String) {
    let app = App::new().configure(configure);
    let service = test::init_service(app).await;
    let res = test::call_service(&service, req.to_request()).await;
    let status = res.status();
    let body = test::read_body(res).await;
    (status, String::from_utf8_lossy(&body).into_owned())
}

/// Register the API routes against the given mocks, with fan-out disabled.
pub fn register_routes(cfg: &mut ServiceConfig, store: MockOrderStore, verifier: MockVerifier) {
    let api = OrderFlowApi::new(store, verifier, EventProducers::default());
    let vietqr = VietQrConfig { bank_code: "MB".to_string(), account_number: "0917436401".to_string() };
    cfg.app_data(web::Data::new(api))
        .app_data(web::Data::new(vietqr))
        .route("/api/create-order", web::post().to(create_order::<MockOrderStore, MockVerifier>))
        .route("/api/check-payment-status", web::post().to(check_payment_status::<MockOrderStore, MockVerifier>))
        .route("/api/orders", web::get().to(orders::<MockOrderStore, MockVerifier>))
        .route("/api/webhook", web::post().to(sepay_webhook::<MockOrderStore, MockVerifier>));
}

pub fn order_fixture(status: OrderStatusType) -> Order {
    Order {
        order_id: OrderId("ORDER1700000000001".into()),
        name: "A".to_string(),
        amount: Vnd::from(100_000),
        status,
        created_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2024, 2, 29, 13, 30, 0).unwrap(),
    }
}
