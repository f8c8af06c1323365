use serde::{Deserialize, Serialize};
use spg_common::Vnd;

/// The status string SePay attaches to a settled transfer.
pub const SEPAY_PAID_STATUS: &str = "PAID";

/// A single incoming bank transfer as reported by the SePay user API.
///
/// Only the fields the gateway acts on are typed strictly; everything else is optional because SePay has shipped
/// several revisions of this record and older accounts still return the older shapes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SepayTransaction {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub gateway: Option<String>,
    #[serde(default)]
    pub transaction_date: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    /// The free-text transfer description. Payers copy the order id in here.
    #[serde(default, alias = "addInfo")]
    pub content: Option<String>,
    #[serde(default, alias = "transferAmount")]
    pub amount: Option<Vnd>,
    #[serde(default)]
    pub reference_number: Option<String>,
    pub status: String,
}

impl SepayTransaction {
    /// Whether SePay regards this transfer as settled.
    pub fn is_settled(&self) -> bool {
        self.status.eq_ignore_ascii_case(SEPAY_PAID_STATUS)
    }
}

/// The `data` field of a search response. Current accounts get a result list; some legacy tenants still receive the
/// matching transaction as a single object. Either way, the first (only) match is the one that counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TransactionList {
    Many(Vec<SepayTransaction>),
    One(SepayTransaction),
}

impl TransactionList {
    pub fn into_vec(self) -> Vec<SepayTransaction> {
        match self {
            TransactionList::Many(list) => list,
            TransactionList::One(tx) => vec![tx],
        }
    }

    pub fn into_first(self) -> Option<SepayTransaction> {
        self.into_vec().into_iter().next()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionSearchResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Option<TransactionList>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_result_list() {
        let json = r#"{
            "success": true,
            "data": [
                { "id": 92704, "content": "thanh toan ORDER1700000000001", "amount": 50000, "status": "PAID" },
                { "id": 92705, "content": "something else", "amount": 10000, "status": "PENDING" }
            ]
        }"#;
        let response: TransactionSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.success);
        let first = response.data.unwrap().into_first().unwrap();
        assert_eq!(first.id, Some(92704));
        assert!(first.is_settled());
    }

    #[test]
    fn parses_single_object() {
        let json = r#"{
            "success": true,
            "data": { "addInfo": "ORDER1700000000001", "transferAmount": 50000, "status": "paid" }
        }"#;
        let response: TransactionSearchResponse = serde_json::from_str(json).unwrap();
        let tx = response.data.unwrap().into_first().unwrap();
        assert_eq!(tx.content.as_deref(), Some("ORDER1700000000001"));
        assert_eq!(tx.amount, Some(Vnd::from(50_000)));
        assert!(tx.is_settled());
    }

    #[test]
    fn parses_empty_result() {
        let json = r#"{ "success": true, "data": [] }"#;
        let response: TransactionSearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.data.unwrap().into_first().is_none());
    }

    #[test]
    fn unsettled_statuses_are_not_paid() {
        let json = r#"{ "id": 1, "status": "FAILED" }"#;
        let tx: SepayTransaction = serde_json::from_str(json).unwrap();
        assert!(!tx.is_settled());
    }
}
