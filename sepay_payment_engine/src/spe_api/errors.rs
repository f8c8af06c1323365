use thiserror::Error;

use crate::{
    order_types::OrderId,
    traits::{OrderRegistryError, VerificationUnavailable},
};

#[derive(Debug, Error)]
pub enum PaymentEngineError {
    #[error("Invalid order: {0}")]
    InvalidOrder(String),
    #[error("Order {0} does not exist")]
    OrderNotFound(OrderId),
    #[error("Could not process the settlement notice: {0}")]
    MalformedPayload(String),
    #[error(transparent)]
    VerificationUnavailable(#[from] VerificationUnavailable),
    #[error("Order registry error: {0}")]
    RegistryError(String),
}

impl From<OrderRegistryError> for PaymentEngineError {
    fn from(e: OrderRegistryError) -> Self {
        match e {
            OrderRegistryError::OrderNotFound(id) => Self::OrderNotFound(id),
            e @ OrderRegistryError::DuplicateOrderId(_) => Self::RegistryError(e.to_string()),
        }
    }
}
