use std::fmt::Display;

use sepay_payment_engine::order_types::{Order, OrderId, OrderStatusType};
use serde::{Deserialize, Serialize};
use spg_common::Vnd;

/// The acknowledgment envelope for webhook deliveries. SePay retries on anything it does not understand, so even
/// failures it can do nothing about come back wrapped in this rather than a bare error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonResponse {
    pub success: bool,
    pub message: String,
}

impl JsonResponse {
    pub fn success<S: Display>(message: S) -> Self {
        Self { success: true, message: message.to_string() }
    }

    pub fn failure<S: Display>(message: S) -> Self {
        Self { success: false, message: message.to_string() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrderParams {
    pub name: String,
    pub amount: Vnd,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusParams {
    pub order_id: OrderId,
}

/// Response to a creation request: the correlation token plus the VietQR link the payer scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrderResult {
    pub order_id: OrderId,
    pub qr_url: String,
    pub status: OrderStatusType,
}

/// The order view served by the status-check endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderStatusResult {
    pub order_id: OrderId,
    pub name: String,
    pub amount: Vnd,
    pub status: OrderStatusType,
}

impl From<Order> for OrderStatusResult {
    fn from(order: Order) -> Self {
        Self { order_id: order.order_id, name: order.name, amount: order.amount, status: order.status }
    }
}
