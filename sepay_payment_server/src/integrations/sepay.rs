use log::*;
use sepay_payment_engine::{
    order_types::OrderId,
    PaymentVerifier,
    VerificationOutcome,
    VerificationUnavailable,
};
use sepay_tools::SepayApi;

/// [`PaymentVerifier`] backed by the SePay transaction-search API.
///
/// Confirmation is by correlation token alone: a settled transfer whose description carries the order id settles
/// the matter, and the transfer amount is not cross-checked against the order.
#[derive(Clone)]
pub struct SepayVerifier {
    api: SepayApi,
}

impl SepayVerifier {
    pub fn new(api: SepayApi) -> Self {
        Self { api }
    }
}

impl PaymentVerifier for SepayVerifier {
    async fn check_payment(&self, order_id: &OrderId) -> Result<VerificationOutcome, VerificationUnavailable> {
        match self.api.find_settled_transaction(order_id.as_str()).await {
            Ok(Some(_)) => Ok(VerificationOutcome::Confirmed),
            Ok(None) => Ok(VerificationOutcome::NotConfirmed),
            Err(e) => {
                warn!("🏦️ SePay lookup failed for order {order_id}. {e}");
                Err(VerificationUnavailable(e.to_string()))
            },
        }
    }
}
