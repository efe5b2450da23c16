use thiserror::Error;

/// Failures of the request pipeline itself.
///
/// A 4xx/5xx reply is not an error here, see [`super::ApiResponse::ok`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("endpoint must start with {prefix}: {endpoint}")]
    InvalidEndpoint { endpoint: String, prefix: &'static str },

    #[error("failed to serialize request body: {0}")]
    Encode(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when no response was obtained from the server
    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }
}
