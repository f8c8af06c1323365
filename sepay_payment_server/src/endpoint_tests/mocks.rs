use mockall::mock;
use sepay_payment_engine::{
    order_types::{NewOrder, Order, OrderId},
    OrderRegistry,
    OrderRegistryError,
    PaymentVerifier,
    VerificationOutcome,
    VerificationUnavailable,
};

mock! {
    pub OrderStore {}
    impl OrderRegistry for OrderStore {
        async fn insert_order(&self, order: NewOrder) -> Result<Order, OrderRegistryError>;
        async fn fetch_order(&self, order_id: &OrderId) -> Result<Option<Order>, OrderRegistryError>;
        async fn fetch_all_orders(&self) -> Result<Vec<Order>, OrderRegistryError>;
        async fn mark_paid(&self, order_id: &OrderId) -> Result<(Order, bool), OrderRegistryError>;
    }
}

mock! {
    pub Verifier {}
    impl PaymentVerifier for Verifier {
        async fn check_payment(&self, order_id: &OrderId) -> Result<VerificationOutcome, VerificationUnavailable>;
    }
}
