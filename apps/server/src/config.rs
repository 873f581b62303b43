use std::{net::SocketAddr, time::Duration};

/// Fallback signing secret for local development only.
const DEV_SECRET_KEY: &str = "dev-key-only-for-local-testing";

pub struct Config {
    pub listen_addr: SocketAddr,
    pub data_dir: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Metal Price API credential; absence selects fallback prices.
    pub metal_price_api_key: Option<String>,
    /// Session/signing secret, with a development default.
    pub secret_key: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("MF_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .expect("Invalid MF_LISTEN_ADDR");
        let data_dir = std::env::var("MF_DATA_DIR").unwrap_or_else(|_| "./instance".into());
        let cors_allow = std::env::var("MF_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("MF_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .unwrap_or(30000);
        let metal_price_api_key = std::env::var("METAL_PRICE_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());
        let secret_key = std::env::var("SECRET_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .unwrap_or_else(|| DEV_SECRET_KEY.to_string());
        Self {
            listen_addr,
            data_dir,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            metal_price_api_key,
            secret_key,
        }
    }

    /// True when no secret was configured and the development fallback is live.
    pub fn secret_key_is_dev(&self) -> bool {
        self.secret_key == DEV_SECRET_KEY
    }
}
