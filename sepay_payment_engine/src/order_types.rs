use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use spg_common::Vnd;
use thiserror::Error;

//--------------------------------------   OrderStatusType     -------------------------------------------------------
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatusType {
    /// The order is newly created and no settled payment has been matched to it.
    Unpaid,
    /// A settled payment has been matched to the order. Terminal.
    Paid,
}

impl Display for OrderStatusType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatusType::Unpaid => write!(f, "Unpaid"),
            OrderStatusType::Paid => write!(f, "Paid"),
        }
    }
}

#[derive(Debug, Clone, Error)]
#[error("Invalid order status: {0}")]
pub struct ConversionError(String);

impl FromStr for OrderStatusType {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Unpaid" => Ok(Self::Unpaid),
            "Paid" => Ok(Self::Paid),
            s => Err(ConversionError(format!("Invalid order status: {s}"))),
        }
    }
}

//--------------------------------------        OrderId        -------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub String);

impl OrderId {
    /// A fresh order id, `ORDER` followed by the current epoch milliseconds. The registry resolves the (rare)
    /// same-millisecond collision at insert time, so two calls in the same instant are still safe.
    pub fn generate() -> Self {
        Self(format!("ORDER{}", Utc::now().timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for OrderId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<String> for OrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

//--------------------------------------       NewOrder        -------------------------------------------------------
/// A request to create a payment order. Validated by the engine before it reaches the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrder {
    /// Display label supplied by the caller. Carries no meaning inside the engine.
    pub name: String,
    pub amount: Vnd,
}

impl NewOrder {
    pub fn new<S: Into<String>>(name: S, amount: Vnd) -> Self {
        Self { name: name.into(), amount }
    }
}

impl Display for NewOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NewOrder({} for {})", self.name, self.amount)
    }
}

//--------------------------------------        Order          -------------------------------------------------------
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub name: String,
    pub amount: Vnd,
    pub status: OrderStatusType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Order {
    pub fn is_paid(&self) -> bool {
        self.status == OrderStatusType::Paid
    }
}

impl Display for Order {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Order {} ({}, {}, {})", self.order_id, self.name, self.amount, self.status)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn status_round_trips_through_strings() {
        assert_eq!("Unpaid".parse::<OrderStatusType>().unwrap(), OrderStatusType::Unpaid);
        assert_eq!("Paid".parse::<OrderStatusType>().unwrap(), OrderStatusType::Paid);
        assert!("Cancelled".parse::<OrderStatusType>().is_err());
        assert_eq!(OrderStatusType::Paid.to_string(), "Paid");
    }

    #[test]
    fn generated_ids_have_the_wire_format() {
        let id = OrderId::generate();
        assert!(id.as_str().starts_with("ORDER"));
        assert!(id.as_str()["ORDER".len()..].chars().all(|c| c.is_ascii_digit()));
    }
}
