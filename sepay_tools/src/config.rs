use log::*;
use spg_common::Secret;

const DEFAULT_SEPAY_BASE_URL: &str = "https://my.sepay.vn";

#[derive(Debug, Clone, Default)]
pub struct SepayConfig {
    /// Base URL of the SePay user API, without a trailing slash.
    pub base_url: String,
    pub api_key: Secret<String>,
}

impl SepayConfig {
    pub fn new<S: Into<String>>(base_url: S, api_key: Secret<String>) -> Self {
        Self { base_url: base_url.into(), api_key }
    }

    pub fn new_from_env_or_default() -> Self {
        let base_url = std::env::var("SPG_SEPAY_BASE_URL").unwrap_or_else(|_| {
            debug!("SPG_SEPAY_BASE_URL not set, using {DEFAULT_SEPAY_BASE_URL}");
            DEFAULT_SEPAY_BASE_URL.to_string()
        });
        let api_key = Secret::new(std::env::var("SPG_SEPAY_API_KEY").unwrap_or_else(|_| {
            warn!("SPG_SEPAY_API_KEY not set, using (probably useless) default");
            "00000000000000".to_string()
        }));
        Self { base_url, api_key }
    }
}
