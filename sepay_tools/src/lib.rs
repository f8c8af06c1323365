//! Client library for the SePay user API.
//!
//! SePay watches a linked bank account and exposes the incoming transfers over a REST API, as well as pushing them
//! out via webhooks. This crate wraps the REST side: searching transfers by the free-text `addInfo` field that
//! payers copy into their bank transfer. The webhook side is handled by the payment server directly.
mod api;
mod config;
mod error;

mod data_objects;

pub mod helpers;

pub use api::SepayApi;
pub use config::SepayConfig;
pub use data_objects::{SepayTransaction, TransactionList, TransactionSearchResponse, SEPAY_PAID_STATUS};
pub use error::SepayApiError;
