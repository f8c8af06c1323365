use std::env;

use log::*;
use sepay_tools::SepayConfig;

const DEFAULT_SPG_HOST: &str = "127.0.0.1";
const DEFAULT_SPG_PORT: u16 = 4000;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Credentials and endpoint for the SePay user API, used by the poll-driven verification path.
    pub sepay: SepayConfig,
    /// The bank account the VietQR payment links point at.
    pub vietqr: VietQrConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_SPG_HOST.to_string(),
            port: DEFAULT_SPG_PORT,
            sepay: SepayConfig::default(),
            vietqr: VietQrConfig::default(),
        }
    }
}

impl ServerConfig {
    pub fn new(host: &str, port: u16) -> Self {
        Self { host: host.to_string(), port, ..Default::default() }
    }

    pub fn from_env_or_default() -> Self {
        let host = env::var("SPG_HOST").ok().unwrap_or_else(|| DEFAULT_SPG_HOST.into());
        let port = env::var("SPG_PORT")
            .map(|s| {
                s.parse::<u16>().unwrap_or_else(|e| {
                    error!(
                        "🪛️ {s} is not a valid port for SPG_PORT. {e} Using the default, {DEFAULT_SPG_PORT}, instead."
                    );
                    DEFAULT_SPG_PORT
                })
            })
            .ok()
            .unwrap_or(DEFAULT_SPG_PORT);
        let sepay = SepayConfig::new_from_env_or_default();
        let vietqr = VietQrConfig::from_env_or_default();
        Self { host, port, sepay, vietqr }
    }
}

#[derive(Clone, Debug, Default)]
pub struct VietQrConfig {
    /// Bank code as VietQR knows it, e.g. "MB".
    pub bank_code: String,
    pub account_number: String,
}

impl VietQrConfig {
    pub fn from_env_or_default() -> Self {
        let bank_code = env::var("SPG_VIETQR_BANK_CODE").unwrap_or_else(|_| {
            warn!("🪛️ SPG_VIETQR_BANK_CODE not set. Payment QR codes will use the MB placeholder.");
            "MB".to_string()
        });
        let account_number = env::var("SPG_VIETQR_ACCOUNT_NUMBER").unwrap_or_else(|_| {
            warn!("🪛️ SPG_VIETQR_ACCOUNT_NUMBER not set. Payment QR codes will point at a useless account.");
            "0000000000".to_string()
        });
        Self { bank_code, account_number }
    }
}
