use std::sync::Arc;

use log::*;
use reqwest::{
    header::{HeaderMap, HeaderValue},
    Client,
    Method,
};
use serde::de::DeserializeOwned;

use crate::{
    config::SepayConfig,
    data_objects::{SepayTransaction, TransactionList, TransactionSearchResponse},
    SepayApiError,
};

#[derive(Clone)]
pub struct SepayApi {
    config: SepayConfig,
    client: Arc<Client>,
}

impl SepayApi {
    pub fn new(config: SepayConfig) -> Result<Self, SepayApiError> {
        let mut headers = HeaderMap::with_capacity(2);
        let bearer = format!("Bearer {}", config.api_key.reveal());
        let val = HeaderValue::from_str(&bearer).map_err(|e| SepayApiError::Initialization(e.to_string()))?;
        headers.insert("Authorization", val);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| SepayApiError::Initialization(e.to_string()))?;
        Ok(Self { config, client: Arc::new(client) })
    }

    pub async fn rest_query<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, SepayApiError> {
        let url = self.url(path);
        trace!("Sending REST query: {url}");
        let mut req = self.client.request(method, url);
        if !params.is_empty() {
            req = req.query(params);
        }
        let response = req.send().await.map_err(|e| SepayApiError::RestResponseError(e.to_string()))?;
        if response.status().is_success() {
            trace!("REST query successful. {}", response.status());
            response.json::<T>().await.map_err(|e| SepayApiError::JsonError(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.map_err(|e| SepayApiError::RestResponseError(e.to_string()))?;
            Err(SepayApiError::QueryError { status, message })
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/userapi{path}", self.config.base_url)
    }

    /// Search the account's incoming transfers for ones whose description contains the given text.
    pub async fn search_transactions(&self, add_info: &str) -> Result<Vec<SepayTransaction>, SepayApiError> {
        debug!("Searching SePay transactions for '{add_info}'");
        let response = self
            .rest_query::<TransactionSearchResponse>(Method::GET, "/transactions/search", &[("addInfo", add_info)])
            .await?;
        if !response.success {
            let message = response.message.unwrap_or_else(|| "no reason given".to_string());
            return Err(SepayApiError::RejectedQuery(message));
        }
        let transactions = response.data.map(TransactionList::into_vec).unwrap_or_default();
        debug!("SePay returned {} matching transaction(s) for '{add_info}'", transactions.len());
        Ok(transactions)
    }

    /// The first transfer matching the given order id, provided it has settled. A matching transfer that has not
    /// settled yet does not count.
    pub async fn find_settled_transaction(&self, order_id: &str) -> Result<Option<SepayTransaction>, SepayApiError> {
        let tx = self.search_transactions(order_id).await?.into_iter().next().filter(SepayTransaction::is_settled);
        if let Some(tx) = &tx {
            info!("Found settled SePay transaction {:?} for '{order_id}'", tx.id);
        }
        Ok(tx)
    }
}
