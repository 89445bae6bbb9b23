use anyhow::Context;

/// Process-wide configuration, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    /// Merchant id assigned by the gateway.
    pub paygate_id: String,
    /// Shared secret appended to every checksum source. Never logged.
    pub paygate_key: String,
    /// Public origin of this service, used to build the callback URLs the
    /// gateway redirects/POSTs to.
    pub base_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let paygate_id = std::env::var("PAYGATE_ID").context("PAYGATE_ID is not set")?;
        let paygate_key = std::env::var("PAYGATE_KEY").context("PAYGATE_KEY is not set")?;
        let base_url =
            std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(3000);
        Ok(Self {
            paygate_id,
            paygate_key,
            base_url,
            port,
        })
    }

    pub fn return_url(&self) -> String {
        format!("{}/pay/return", self.base_url)
    }

    pub fn notify_url(&self) -> String {
        format!("{}/pay/notify", self.base_url)
    }
}
