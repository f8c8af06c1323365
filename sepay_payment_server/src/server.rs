use std::time::Duration;

use actix_web::{dev::Server, http::KeepAlive, middleware::Logger, web, App, HttpServer};
use log::*;
use sepay_payment_engine::{
    events::{EventHandlers, EventHooks, EventProducers},
    MemoryOrderStore,
    OrderFlowApi,
};
use sepay_tools::SepayApi;

use crate::{
    config::ServerConfig,
    errors::ServerError,
    integrations::sepay::SepayVerifier,
    routes::{check_payment_status, create_order, health, orders, sepay_webhook},
};

/// How many paid events may queue up before publishers start applying backpressure.
const EVENT_BUFFER_SIZE: usize = 25;

pub async fn run_server(config: ServerConfig) -> Result<(), ServerError> {
    let api = SepayApi::new(config.sepay.clone()).map_err(|e| ServerError::InitializeError(e.to_string()))?;
    let verifier = SepayVerifier::new(api);
    let store = MemoryOrderStore::new();

    let mut hooks = EventHooks::default();
    hooks.on_order_paid(|event| {
        Box::pin(async move {
            info!("📬️ Order {} has been paid. Notifying subscribers.", event.order.order_id);
        })
    });
    let handlers = EventHandlers::new(EVENT_BUFFER_SIZE, hooks);
    let producers = handlers.producers();
    handlers.start_handlers().await;

    let srv = create_server_instance(config, store, verifier, producers)?;
    srv.await.map_err(|e| ServerError::Unspecified(e.to_string()))
}

pub fn create_server_instance(
    config: ServerConfig,
    store: MemoryOrderStore,
    verifier: SepayVerifier,
    producers: EventProducers,
) -> Result<Server, ServerError> {
    let host = config.host.clone();
    let port = config.port;
    let srv = HttpServer::new(move || {
        let orders_api = OrderFlowApi::new(store.clone(), verifier.clone(), producers.clone());
        let api_scope = web::scope("/api")
            .route("/create-order", web::post().to(create_order::<MemoryOrderStore, SepayVerifier>))
            .route("/check-payment-status", web::post().to(check_payment_status::<MemoryOrderStore, SepayVerifier>))
            .route("/orders", web::get().to(orders::<MemoryOrderStore, SepayVerifier>))
            .route("/webhook", web::post().to(sepay_webhook::<MemoryOrderStore, SepayVerifier>));
        App::new()
            .wrap(Logger::new("%t (%D ms) %s %a %{Host}i %U").log_target("spg::access_log"))
            .app_data(web::Data::new(orders_api))
            .app_data(web::Data::new(config.vietqr.clone()))
            .service(health)
            .service(api_scope)
    })
    .keep_alive(KeepAlive::Timeout(Duration::from_secs(600)))
    .bind((host.as_str(), port))?
    .run();
    Ok(srv)
}
