use std::fmt::Display;

#[derive(Debug)]
pub enum GatewayError {
    Request(reqwest::Error),
    /// Non-2xx status from the initiate endpoint, body preserved for the
    /// diagnostic the caller surfaces.
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    Decode(serde_urlencoded::de::Error),
    /// 2xx response that lacks `PAY_REQUEST_ID` or `CHECKSUM`.
    Incomplete {
        body: String,
    },
}

impl From<reqwest::Error> for GatewayError {
    fn from(value: reqwest::Error) -> Self {
        Self::Request(value)
    }
}

impl From<serde_urlencoded::de::Error> for GatewayError {
    fn from(value: serde_urlencoded::de::Error) -> Self {
        Self::Decode(value)
    }
}

impl std::error::Error for GatewayError {}

impl Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Request(e) => write!(f, "http request error: {e}"),
            GatewayError::Status { status, body } => {
                write!(f, "gateway returned {status}: {body}")
            }
            GatewayError::Decode(e) => write!(f, "gateway response decode: {e}"),
            GatewayError::Incomplete { body } => {
                write!(f, "gateway response is missing PAY_REQUEST_ID or CHECKSUM: {body}")
            }
        }
    }
}
