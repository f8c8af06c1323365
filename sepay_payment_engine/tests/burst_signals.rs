//! Floods one order with racing poll and webhook signals and checks that the registry's atomic check-and-flip
//! keeps the transition, and the notification, down to exactly one.
use std::sync::Arc;

use log::*;
use sepay_payment_engine::{
    order_types::{NewOrder, OrderStatusType},
    SettlementNotice,
};
use serde_json::json;
use spg_common::Vnd;
use tokio::runtime::Runtime;

use crate::support::{settle, setup, ScriptedVerifier};

mod support;

const NUM_SIGNALS: usize = 24;

#[test]
fn burst_of_racing_signals_pays_once() {
    let sys = Runtime::new().unwrap();

    sys.block_on(async move {
        let verifier = ScriptedVerifier::confirmed();
        let (api, hook_called) = setup(verifier).await;
        let api = Arc::new(api);

        let order = api.process_new_order(NewOrder::new("burst", Vnd::from(1_000_000))).await.unwrap();
        info!("🚀️ Injecting {NUM_SIGNALS} racing signals for {}", order.order_id);

        let mut tasks = Vec::with_capacity(NUM_SIGNALS);
        for i in 0..NUM_SIGNALS {
            let api = Arc::clone(&api);
            let order_id = order.order_id.clone();
            tasks.push(tokio::spawn(async move {
                if i % 2 == 0 {
                    api.poll_order_status(&order_id).await.expect("poll signal failed");
                } else {
                    let notice: SettlementNotice =
                        serde_json::from_value(json!({ "orderId": order_id.as_str(), "status": "Paid" })).unwrap();
                    api.process_settlement(notice).await.expect("webhook signal failed");
                }
            }));
        }
        for task in tasks {
            task.await.expect("signal task panicked");
        }
        settle().await;

        let order = api.fetch_order(&order.order_id).await.unwrap().unwrap();
        assert_eq!(order.status, OrderStatusType::Paid);
        assert_eq!(hook_called.count(), 1, "exactly one notification must fire");
        assert_eq!(api.fetch_all_orders().await.unwrap().len(), 1);
    });
    info!("🚀️ test complete");
}
