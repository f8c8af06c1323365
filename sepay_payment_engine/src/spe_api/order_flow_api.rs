use std::fmt::Debug;

use log::*;

use crate::{
    events::{EventProducers, OrderPaidEvent},
    order_types::{NewOrder, Order, OrderId, OrderStatusType},
    spe_api::{errors::PaymentEngineError, settlement::SettlementNotice},
    traits::{OrderRegistry, PaymentVerifier, VerificationOutcome},
};

/// `OrderFlowApi` is the reconciliation state machine: the single place where confirmation evidence, from whichever
/// channel it arrives on, is applied to an order.
///
/// Two event types drive transitions. The poll path consults the external verifier; the webhook path carries its
/// own evidence. Both converge on the registry's atomic `mark_paid`, whose transition flag gates the one-and-only
/// paid notification per order. Signals may race, repeat or arrive in any order, and the result is the same.
pub struct OrderFlowApi<B, V> {
    registry: B,
    verifier: V,
    producers: EventProducers,
}

impl<B, V> Debug for OrderFlowApi<B, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "OrderFlowApi")
    }
}

impl<B, V> OrderFlowApi<B, V> {
    pub fn new(registry: B, verifier: V, producers: EventProducers) -> Self {
        Self { registry, verifier, producers }
    }
}

impl<B, V> OrderFlowApi<B, V>
where
    B: OrderRegistry,
    V: PaymentVerifier,
{
    /// Validate and store a new payment order. The order starts `Unpaid` and the generated id is the correlation
    /// token every later signal must carry.
    pub async fn process_new_order(&self, order: NewOrder) -> Result<Order, PaymentEngineError> {
        if order.name.trim().is_empty() {
            return Err(PaymentEngineError::InvalidOrder("name must not be empty".to_string()));
        }
        if !order.amount.is_positive() {
            return Err(PaymentEngineError::InvalidOrder(format!("amount must be positive, got {}", order.amount)));
        }
        let order = self.registry.insert_order(order).await?;
        debug!("🔄️📦️ Created order {} for {}", order.order_id, order.amount);
        Ok(order)
    }

    /// The poll-triggered check: ask the external verifier whether the order has been paid, and apply the answer.
    ///
    /// An order that is already `Paid` is returned as-is without consulting the verifier. A `Confirmed` answer
    /// commits the transition and fires the paid hook iff this call won the flip. `NotConfirmed` changes nothing.
    /// An unavailable verifier propagates as [`PaymentEngineError::VerificationUnavailable`] with the order left
    /// untouched; the caller must be able to tell "still unpaid" from "could not check".
    pub async fn poll_order_status(&self, order_id: &OrderId) -> Result<Order, PaymentEngineError> {
        let order = self
            .registry
            .fetch_order(order_id)
            .await?
            .ok_or_else(|| PaymentEngineError::OrderNotFound(order_id.clone()))?;
        if order.is_paid() {
            trace!("🔄️🔍️ Order {order_id} is already Paid. Skipping verification.");
            return Ok(order);
        }
        // The verifier call happens before any registry commit, so a slow external lookup never blocks the webhook
        // path's access to the same order.
        match self.verifier.check_payment(order_id).await? {
            VerificationOutcome::Confirmed => {
                let (order, transitioned) = self.registry.mark_paid(order_id).await?;
                if transitioned {
                    info!("🔄️🔍️ Order {order_id} confirmed as paid by the verification API.");
                    self.call_order_paid_hook(&order).await;
                }
                Ok(order)
            },
            VerificationOutcome::NotConfirmed => {
                debug!("🔄️🔍️ No settled transaction for order {order_id} yet.");
                Ok(order)
            },
        }
    }

    /// The webhook-triggered path: apply a settlement notice pushed by the payer.
    ///
    /// The notice itself carries the evidence; the verifier is not consulted. Duplicate deliveries land on an
    /// already-`Paid` order and are absorbed by the idempotent `mark_paid`, so the sender always gets its
    /// acknowledgment back.
    pub async fn process_settlement(&self, notice: SettlementNotice) -> Result<Order, PaymentEngineError> {
        let order_id = notice.order_id()?;
        let order = self
            .registry
            .fetch_order(&order_id)
            .await?
            .ok_or_else(|| PaymentEngineError::OrderNotFound(order_id.clone()))?;
        if !notice.confirms_payment() {
            debug!("🔄️🏦️ Settlement notice for order {order_id} does not confirm payment. No change.");
            return Ok(order);
        }
        let (order, transitioned) = self.registry.mark_paid(&order_id).await?;
        if transitioned {
            info!("🔄️🏦️ Order {order_id} marked as Paid via webhook.");
            self.call_order_paid_hook(&order).await;
        } else {
            debug!("🔄️🏦️ Duplicate settlement notice for order {order_id} absorbed.");
        }
        Ok(order)
    }

    pub async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, PaymentEngineError> {
        Ok(self.registry.fetch_order(order_id).await?)
    }

    pub async fn fetch_all_orders(&self) -> Result<Vec<Order>, PaymentEngineError> {
        Ok(self.registry.fetch_all_orders().await?)
    }

    async fn call_order_paid_hook(&self, order: &Order) {
        debug_assert_eq!(order.status, OrderStatusType::Paid);
        for emitter in &self.producers.order_paid_producer {
            trace!("🔄️📬️ Notifying order paid hook subscribers for {}", order.order_id);
            let event = OrderPaidEvent::new(order.clone());
            emitter.publish_event(event).await;
        }
    }
}
