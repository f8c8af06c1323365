use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use log::*;
use tokio::sync::RwLock;

use crate::{
    order_types::{NewOrder, Order, OrderId, OrderStatusType},
    traits::{OrderRegistry, OrderRegistryError},
};

/// The in-process order registry.
///
/// Orders live in a single map behind one `RwLock`. Reads take the shared lock; every mutation (insert, mark-paid)
/// happens under the exclusive lock, so the check-and-flip in [`OrderRegistry::mark_paid`] is atomic with respect
/// to every other signal for the same order. Clones share the map, so one store can be handed to every server
/// worker.
///
/// Nothing is ever evicted. Unpaid orders are retained for the lifetime of the process.
#[derive(Clone, Default)]
pub struct MemoryOrderStore {
    orders: Arc<RwLock<HashMap<String, Order>>>,
}

impl MemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderRegistry for MemoryOrderStore {
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderRegistryError> {
        let mut orders = self.orders.write().await;
        let mut order_id = OrderId::generate();
        while orders.contains_key(order_id.as_str()) {
            order_id = bump_order_id(&order_id);
        }
        let now = Utc::now();
        let order = Order {
            order_id: order_id.clone(),
            name: order.name,
            amount: order.amount,
            status: OrderStatusType::Unpaid,
            created_at: now,
            updated_at: now,
        };
        orders.insert(order_id.as_str().to_string(), order.clone());
        debug!("🗃️️ Stored new order {}. {} orders in the registry.", order.order_id, orders.len());
        Ok(order)
    }

    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderRegistryError> {
        let orders = self.orders.read().await;
        Ok(orders.get(order_id.as_str()).cloned())
    }

    async fn fetch_all_orders(&self) -> Result<Vec<Order>, OrderRegistryError> {
        let orders = self.orders.read().await;
        Ok(orders.values().cloned().collect())
    }

    async fn mark_paid(&self, order_id: &OrderId) -> Result<(Order, bool), OrderRegistryError> {
        let mut orders = self.orders.write().await;
        let order = orders
            .get_mut(order_id.as_str())
            .ok_or_else(|| OrderRegistryError::OrderNotFound(order_id.clone()))?;
        if order.status == OrderStatusType::Paid {
            trace!("🗃️️ Order {} is already Paid; nothing to do.", order.order_id);
            return Ok((order.clone(), false));
        }
        order.status = OrderStatusType::Paid;
        order.updated_at = Utc::now();
        Ok((order.clone(), true))
    }
}

/// Next id in sequence when a generated id collides with an existing one. Ids are `ORDER<millis>`, so bumping the
/// numeric suffix by one keeps the wire format intact.
fn bump_order_id(order_id: &OrderId) -> OrderId {
    let digits = order_id.as_str().trim_start_matches("ORDER");
    let next = digits.parse::<i64>().map(|n| n + 1).unwrap_or_default();
    OrderId(format!("ORDER{next}"))
}

#[cfg(test)]
mod test {
    use spg_common::Vnd;

    use super::*;

    #[test]
    fn bumping_increments_the_suffix() {
        let id = OrderId("ORDER1700000000001".into());
        assert_eq!(bump_order_id(&id).as_str(), "ORDER1700000000002");
    }

    #[tokio::test]
    async fn mark_paid_flips_exactly_once() {
        let store = MemoryOrderStore::new();
        let order = store.insert_order(NewOrder::new("A", Vnd::from(100_000))).await.unwrap();
        assert_eq!(order.status, OrderStatusType::Unpaid);

        let (paid, transitioned) = store.mark_paid(&order.order_id).await.unwrap();
        assert!(transitioned);
        assert_eq!(paid.status, OrderStatusType::Paid);

        let (paid_again, transitioned) = store.mark_paid(&order.order_id).await.unwrap();
        assert!(!transitioned);
        assert_eq!(paid_again.status, OrderStatusType::Paid);
    }

    #[tokio::test]
    async fn mark_paid_on_unknown_order_is_an_error() {
        let store = MemoryOrderStore::new();
        let missing = OrderId("ORDER0".into());
        let err = store.mark_paid(&missing).await.unwrap_err();
        assert!(matches!(err, OrderRegistryError::OrderNotFound(_)));
        // and it must not have created anything as a side effect
        assert!(store.fetch_all_orders().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn snapshot_returns_every_order() {
        let store = MemoryOrderStore::new();
        for i in 1..=5i64 {
            store.insert_order(NewOrder::new(format!("order-{i}"), Vnd::from(10_000 * i))).await.unwrap();
        }
        let all = store.fetch_all_orders().await.unwrap();
        assert_eq!(all.len(), 5);
        assert!(all.iter().all(|o| o.status == OrderStatusType::Unpaid));
    }
}
