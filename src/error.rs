use thiserror::Error;

pub type Result<T> = core::result::Result<T, ApiError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (fetch rejected).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `detail` is whatever the server put in `{"detail": ...}`.
    #[error("Request rejected with HTTP {status}")]
    Rejected { status: u16, detail: Option<String> },

    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn rejected(status: u16, detail: Option<String>) -> Self {
        ApiError::Rejected { status, detail }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Network(_) | ApiError::Malformed(_))
    }

    /// Text shown to the user. Server detail wins when present and non-blank.
    pub fn user_message(&self, rejected_fallback: &str, transport_fallback: &str) -> String {
        match self {
            ApiError::Rejected { detail, .. } => detail
                .as_deref()
                .map(str::trim)
                .filter(|d| !d.is_empty())
                .unwrap_or(rejected_fallback)
                .to_string(),
            ApiError::Network(_) | ApiError::Malformed(_) => transport_fallback.to_string(),
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Malformed(e.to_string())
    }
}
