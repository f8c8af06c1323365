use serde::Deserialize;
use spg_common::Vnd;

use crate::{helpers::extract_order_id, order_types::OrderId, spe_api::errors::PaymentEngineError};

/// A settlement notice as delivered by the payer's webhook.
///
/// SePay has two generations of this payload in the wild and does not version them, so the notice is parsed as a
/// tagged variant: either an explicit status report naming the order id directly, or a raw bank-transfer record
/// whose free-text description embeds the order id. The sender retries deliveries, so a notice we cannot act on
/// must still be answered, not crashed on.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SettlementNotice {
    Status(StatusNotice),
    Transfer(TransferNotice),
}

/// `{ "orderId": "...", "status": "Paid" }`: the order id is given directly and an explicit status string carries
/// the confirmation.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusNotice {
    #[serde(rename = "orderId")]
    pub order_id: OrderId,
    pub status: String,
}

/// A raw transfer record: the order id is buried in the free-text `content` (or `description`) field, and a
/// positive transferred amount is the confirmation signal.
#[derive(Debug, Clone, Deserialize)]
pub struct TransferNotice {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "transferAmount")]
    pub transfer_amount: Vnd,
}

impl TransferNotice {
    fn text(&self) -> &str {
        self.content.as_deref().or(self.description.as_deref()).unwrap_or("")
    }
}

impl SettlementNotice {
    /// The order this notice refers to.
    pub fn order_id(&self) -> Result<OrderId, PaymentEngineError> {
        match self {
            SettlementNotice::Status(notice) => Ok(notice.order_id.clone()),
            SettlementNotice::Transfer(notice) => extract_order_id(notice.text()).ok_or_else(|| {
                PaymentEngineError::MalformedPayload(format!("No order id found in '{}'", notice.text()))
            }),
        }
    }

    /// Whether the notice actually confirms payment. A non-positive transfer amount, or a status string other than
    /// the paid sentinel, is a notice about the order but not a confirmation.
    pub fn confirms_payment(&self) -> bool {
        match self {
            SettlementNotice::Status(notice) => notice.status.eq_ignore_ascii_case("paid"),
            SettlementNotice::Transfer(notice) => notice.transfer_amount.is_positive(),
        }
    }
}

#[cfg(test)]
mod test {
    use serde_json::json;

    use super::*;

    fn parse(value: serde_json::Value) -> SettlementNotice {
        serde_json::from_value(value).expect("notice should parse")
    }

    #[test]
    fn transfer_shape_with_embedded_order_id() {
        let notice = parse(json!({
            "content": "random text ORDER1700000000001 extra",
            "transferAmount": 50_000,
        }));
        assert_eq!(notice.order_id().unwrap().as_str(), "ORDER1700000000001");
        assert!(notice.confirms_payment());
    }

    #[test]
    fn transfer_shape_falls_back_to_description() {
        let notice = parse(json!({
            "description": "CK den ORDER1700000000002",
            "transferAmount": 120_000,
        }));
        assert_eq!(notice.order_id().unwrap().as_str(), "ORDER1700000000002");
    }

    #[test]
    fn status_shape_names_the_order_directly() {
        let notice = parse(json!({ "orderId": "ORDER1700000000003", "status": "Paid" }));
        assert_eq!(notice.order_id().unwrap().as_str(), "ORDER1700000000003");
        assert!(notice.confirms_payment());
    }

    #[test]
    fn status_shape_with_other_status_does_not_confirm() {
        let notice = parse(json!({ "orderId": "ORDER1700000000004", "status": "Pending" }));
        assert!(!notice.confirms_payment());
    }

    #[test]
    fn non_positive_amount_does_not_confirm() {
        let notice = parse(json!({ "content": "ORDER1700000000005", "transferAmount": 0 }));
        assert!(!notice.confirms_payment());
        let notice = parse(json!({ "content": "ORDER1700000000005", "transferAmount": -10_000 }));
        assert!(!notice.confirms_payment());
    }

    #[test]
    fn missing_order_id_is_malformed() {
        let notice = parse(json!({ "content": "no token in here", "transferAmount": 50_000 }));
        let err = notice.order_id().unwrap_err();
        assert!(matches!(err, PaymentEngineError::MalformedPayload(_)));
    }

    #[test]
    fn notice_with_no_text_at_all_is_malformed() {
        let notice = parse(json!({ "transferAmount": 50_000 }));
        assert!(notice.order_id().is_err());
    }
}
