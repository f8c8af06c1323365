//! SePay Payment Engine
//!
//! The engine is the reconciliation core of the payment gateway: it owns the order registry and the single rule by
//! which an order moves from `Unpaid` to `Paid`. Confirmation evidence arrives over two independent channels (a
//! client-driven poll that consults the external verification API, and the webhook push from the payer's bank) and
//! both funnel into the same idempotent transition, so it does not matter which channel reports first or how many
//! times it repeats itself.
//!
//! The library is split into three main sections:
//! 1. The storage and verification seams ([`mod@traits`]). The engine never talks to a concrete store or a concrete
//!    verification service; it is written against the [`OrderRegistry`] and [`PaymentVerifier`] traits. The bundled
//!    [`MemoryOrderStore`] is the registry used in production (durable storage is out of scope for this gateway).
//! 2. The engine public API ([`OrderFlowApi`]), which exposes order creation, the poll-triggered check, the
//!    webhook-triggered settlement path and the read-only queries.
//! 3. The event hooks ([`mod@events`]). A genuine `Unpaid → Paid` transition emits exactly one
//!    [`events::OrderPaidEvent`] to every subscribed producer; everything downstream of that is fire-and-forget.
pub mod events;
pub mod helpers;
pub mod order_types;
mod spe_api;
mod store;
pub mod traits;

pub use spe_api::{
    errors::PaymentEngineError,
    order_flow_api::OrderFlowApi,
    settlement::{SettlementNotice, StatusNotice, TransferNotice},
};
pub use store::MemoryOrderStore;
pub use traits::{OrderRegistry, OrderRegistryError, PaymentVerifier, VerificationOutcome, VerificationUnavailable};
