#![allow(dead_code)]

use std::sync::{
    atomic::{AtomicI32, Ordering},
    Arc,
    Mutex,
};

use log::*;
use sepay_payment_engine::{
    events::{EventHandlers, EventHooks},
    order_types::OrderId,
    MemoryOrderStore,
    OrderFlowApi,
    PaymentVerifier,
    VerificationOutcome,
    VerificationUnavailable,
};

/// Counts hook invocations across threads.
#[derive(Default, Clone)]
pub struct HookCalled {
    called: Arc<AtomicI32>,
}

impl HookCalled {
    pub fn called(&self) {
        let _ = self.called.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> i32 {
        self.called.load(Ordering::SeqCst)
    }
}

/// A verifier whose answer is scripted by the test. Counts how often it is consulted.
#[derive(Clone)]
pub struct ScriptedVerifier {
    outcome: Arc<Mutex<Result<VerificationOutcome, String>>>,
    calls: Arc<AtomicI32>,
}

impl ScriptedVerifier {
    pub fn confirmed() -> Self {
        Self::with_outcome(Ok(VerificationOutcome::Confirmed))
    }

    pub fn not_confirmed() -> Self {
        Self::with_outcome(Ok(VerificationOutcome::NotConfirmed))
    }

    pub fn unavailable(reason: &str) -> Self {
        Self::with_outcome(Err(reason.to_string()))
    }

    fn with_outcome(outcome: Result<VerificationOutcome, String>) -> Self {
        Self { outcome: Arc::new(Mutex::new(outcome)), calls: Arc::new(AtomicI32::new(0)) }
    }

    pub fn set_outcome(&self, outcome: Result<VerificationOutcome, String>) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> i32 {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PaymentVerifier for ScriptedVerifier {
    async fn check_payment(&self, order_id: &OrderId) -> Result<VerificationOutcome, VerificationUnavailable> {
        trace!("🧪️ Scripted verification of {order_id}");
        let _ = self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.lock().unwrap().clone().map_err(VerificationUnavailable)
    }
}

/// Build an engine over a fresh in-memory registry, with the paid hook wired to a counter.
pub async fn setup(verifier: ScriptedVerifier) -> (OrderFlowApi<MemoryOrderStore, ScriptedVerifier>, HookCalled) {
    let _ = env_logger::try_init();
    let hook_called = HookCalled::default();
    let counter = hook_called.clone();
    let mut hooks = EventHooks::default();
    hooks.on_order_paid(move |event| {
        let counter = counter.clone();
        Box::pin(async move {
            info!("🪝️ Paid hook fired for {}", event.order.order_id);
            counter.called();
        })
    });
    let handlers = EventHandlers::new(8, hooks);
    let producers = handlers.producers();
    handlers.start_handlers().await;
    let api = OrderFlowApi::new(MemoryOrderStore::new(), verifier, producers);
    (api, hook_called)
}

/// Give the event pump a moment to drain before asserting on hook counts.
pub async fn settle() {
    tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
}
