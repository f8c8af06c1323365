use thiserror::Error;

use crate::order_types::OrderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// The external authority reports a settled transaction matching this order id.
    Confirmed,
    /// The lookup succeeded but found no settled matching transaction.
    NotConfirmed,
}

/// The lookup could not be completed: network failure, a non-success response, or an unparseable body. This is not
/// the same thing as [`VerificationOutcome::NotConfirmed`]; the caller learns nothing about the order and must not
/// treat the order as unpaid-and-checked.
#[derive(Debug, Clone, Error)]
#[error("Payment verification is unavailable: {0}")]
pub struct VerificationUnavailable(pub String);

/// The contract for the external payment authority.
#[allow(async_fn_in_trait)]
pub trait PaymentVerifier {
    /// Ask the authority whether a settled payment exists for this order id.
    ///
    /// One best-effort attempt. Implementations must not retry internally, and must report failure as
    /// [`VerificationUnavailable`] rather than mapping it to `NotConfirmed`.
    async fn check_payment(&self, order_id: &OrderId) -> Result<VerificationOutcome, VerificationUnavailable>;
}
