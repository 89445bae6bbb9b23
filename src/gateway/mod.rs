use std::{collections::HashMap, time::Duration};

use crate::gateway::error::GatewayError;

pub mod checksum;
mod error;
pub mod initiate;

pub type Result<T> = std::result::Result<T, GatewayError>;

/// Fields the gateway hands back after a successful initiate. Both are passed
/// verbatim to the browser form that POSTs the payer to the hosted page.
#[derive(Debug)]
pub struct Initiated {
    pub pay_request_id: String,
    pub checksum: String,
}

#[derive(Debug, Clone)]
pub struct PayWeb3Gateway {
    client: reqwest::Client,
}

impl PayWeb3Gateway {
    /// Protocol constants, not configuration.
    pub const INITIATE_URL: &str = "https://secure.paygate.co.za/payweb3/initiate.trans";
    pub const PROCESS_URL: &str = "https://secure.paygate.co.za/payweb3/process.trans";

    const TIMEOUT: Duration = Duration::from_secs(30);

    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(Self::TIMEOUT)
            .build()
            .expect("client configuration is valid");
        Self { client }
    }

    /// Single form-encoded POST to the initiate endpoint. The gateway answers
    /// with a form-encoded body that must carry `PAY_REQUEST_ID` and
    /// `CHECKSUM`; anything else is a gateway-side failure.
    pub async fn initiate(&self, payload: &initiate::InitiatePayload) -> Result<Initiated> {
        let logged = serde_urlencoded::to_string(payload).expect("payload serialization is infallible");
        tracing::debug!(url = Self::INITIATE_URL, data = %redact_form(&logged), "Gateway initiate request");
        let res = self
            .client
            .post(Self::INITIATE_URL)
            .form(payload)
            .send()
            .await?;
        let status = res.status();
        let body = res.text().await?;
        tracing::debug!(%status, data = %redact_form(&body), "Gateway initiate response");
        if !status.is_success() {
            return Err(GatewayError::Status { status, body });
        }
        let fields: HashMap<String, String> = serde_urlencoded::from_str(&body)?;
        let pay_request_id = fields.get("PAY_REQUEST_ID").filter(|v| !v.is_empty());
        let response_checksum = fields.get("CHECKSUM").filter(|v| !v.is_empty());
        match (pay_request_id, response_checksum) {
            (Some(pay_request_id), Some(response_checksum)) => Ok(Initiated {
                pay_request_id: pay_request_id.clone(),
                checksum: response_checksum.clone(),
            }),
            _ => Err(GatewayError::Incomplete { body }),
        }
    }
}

/// Mask checksum values before a form-encoded body reaches the logs.
fn redact_form(body: &str) -> String {
    body.split('&')
        .map(|pair| match pair.split_once('=') {
            Some((key, _)) if key.eq_ignore_ascii_case("checksum") => format!("{key}=***"),
            _ => pair.to_string(),
        })
        .collect::<Vec<_>>()
        .join("&")
}
