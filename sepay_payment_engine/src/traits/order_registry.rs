use thiserror::Error;

use crate::order_types::{NewOrder, Order, OrderId};

#[derive(Debug, Clone, Error)]
pub enum OrderRegistryError {
    #[error("Order {0} does not exist")]
    OrderNotFound(OrderId),
    #[error("Order id {0} already exists")]
    DuplicateOrderId(OrderId),
}

/// The storage contract for payment orders.
///
/// All mutation of a given order is serialized inside the registry; in particular [`Self::mark_paid`] must perform
/// its check-and-flip atomically with respect to concurrent callers on the same order id. Callers may not assume
/// anything about ordering across different orders.
#[allow(async_fn_in_trait)]
pub trait OrderRegistry {
    /// Store a brand-new order with a freshly generated unique id and `Unpaid` status, and return the full record.
    async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderRegistryError>;

    /// Fetch a single order by id. `None` if no such order exists.
    async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderRegistryError>;

    /// A point-in-time snapshot of every order in the registry. Callers must not rely on the ordering.
    async fn fetch_all_orders(&self) -> Result<Vec<Order>, OrderRegistryError>;

    /// Flip the order to `Paid` if it is currently `Unpaid`.
    ///
    /// Returns the (possibly updated) record and a flag telling whether this call performed the transition. The flag
    /// is `true` for exactly one caller over the lifetime of an order, no matter how many signals race in; it is the
    /// sole trigger for the paid-order notification fan-out.
    async fn mark_paid(&self, order_id: &OrderId) -> Result<(Order, bool), OrderRegistryError>;
}
