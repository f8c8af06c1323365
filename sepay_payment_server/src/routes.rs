//! Request handler definitions
//!
//! Define each route and its handler here.
//! Handlers that are more than a line or two MUST go into a separate module. Keep this module neat and tidy 🙏
//!
//! Handlers are generic over the engine's registry and verifier traits so that the endpoint tests can drive them
//! with mocks; the real instantiations happen once, in [`crate::server`].
use actix_web::{get, web, HttpResponse, Responder};
use log::*;
use sepay_payment_engine::{
    order_types::NewOrder,
    OrderFlowApi,
    OrderRegistry,
    PaymentEngineError,
    PaymentVerifier,
    SettlementNotice,
};
use sepay_tools::helpers::vietqr_image_url;

use crate::{
    config::VietQrConfig,
    data_objects::{JsonResponse, NewOrderParams, NewOrderResult, OrderStatusParams, OrderStatusResult},
    errors::ServerError,
};

#[get("/health")]
pub async fn health() -> impl Responder {
    trace!("💻️ Received health check request");
    HttpResponse::Ok().body("👍️\n")
}

//----------------------------------------------   Orders   ----------------------------------------------------

pub async fn create_order<B, V>(
    body: web::Json<NewOrderParams>,
    api: web::Data<OrderFlowApi<B, V>>,
    vietqr: web::Data<VietQrConfig>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderRegistry,
    V: PaymentVerifier,
{
    let params = body.into_inner();
    debug!("💻️ POST create-order for '{}'", params.name);
    let order = api.process_new_order(NewOrder::new(params.name, params.amount)).await?;
    let qr_url = vietqr_image_url(&vietqr.bank_code, &vietqr.account_number, order.amount, order.order_id.as_str());
    info!("💻️ Created order {}", order.order_id);
    Ok(HttpResponse::Ok().json(NewOrderResult { order_id: order.order_id, qr_url, status: order.status }))
}

/// The poll-driven status check. A still-unpaid order triggers a verification lookup against SePay; an
/// already-paid one is served straight from the registry. An unavailable verification service surfaces as a 503,
/// which is how callers tell "still unpaid" apart from "could not check".
pub async fn check_payment_status<B, V>(
    body: web::Json<OrderStatusParams>,
    api: web::Data<OrderFlowApi<B, V>>,
) -> Result<HttpResponse, ServerError>
where
    B: OrderRegistry,
    V: PaymentVerifier,
{
    let order_id = body.into_inner().order_id;
    debug!("💻️ POST check-payment-status for {order_id}");
    let order = api.poll_order_status(&order_id).await?;
    Ok(HttpResponse::Ok().json(OrderStatusResult::from(order)))
}

pub async fn orders<B, V>(api: web::Data<OrderFlowApi<B, V>>) -> Result<HttpResponse, ServerError>
where
    B: OrderRegistry,
    V: PaymentVerifier,
{
    let orders = api.fetch_all_orders().await?;
    debug!("💻️ GET orders. {} record(s)", orders.len());
    Ok(HttpResponse::Ok().json(orders))
}

//----------------------------------------------   Webhook   ----------------------------------------------------

/// The SePay settlement webhook. Duplicate deliveries are expected and resolve to a success acknowledgment, so
/// the sender's retry loop terminates; only a payload we cannot attribute to any order is answered with an error.
pub async fn sepay_webhook<B, V>(body: web::Json<SettlementNotice>, api: web::Data<OrderFlowApi<B, V>>) -> HttpResponse
where
    B: OrderRegistry,
    V: PaymentVerifier,
{
    let notice = body.into_inner();
    trace!("🏦️ Received settlement webhook");
    match api.process_settlement(notice).await {
        Ok(order) => {
            info!("🏦️ Settlement notice for order {} processed. Status is {}.", order.order_id, order.status);
            HttpResponse::Ok().json(JsonResponse::success("Webhook processed successfully."))
        },
        Err(PaymentEngineError::MalformedPayload(s)) => {
            warn!("🏦️ Could not attribute settlement notice. {s}");
            HttpResponse::BadRequest().json(JsonResponse::failure(s))
        },
        Err(PaymentEngineError::OrderNotFound(id)) => {
            warn!("🏦️ Settlement notice names order {id}, which does not exist.");
            HttpResponse::NotFound().json(JsonResponse::failure(format!("No order matching {id}")))
        },
        Err(e) => {
            warn!("🏦️ Unexpected error while handling settlement notice. {e}");
            HttpResponse::Ok().json(JsonResponse::failure("Unexpected error handling notice."))
        },
    }
}
