use thiserror::Error;

/// Error types that can occur while exchanging messages with the inference endpoint.
#[derive(Debug, Error)]
pub enum ChatError {
    /// HTTP transport errors
    #[error("HTTP error: {0}")]
    HttpError(String),
    /// Missing or rejected credential
    #[error("Auth error: {0}")]
    AuthError(String),
    /// Invalid client configuration or request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    /// Non-success status returned by the provider
    #[error("Provider error: {0}")]
    ProviderError(String),
    /// API response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormatError {
        message: String,
        raw_response: String,
    },
}

/// Converts reqwest HTTP errors into ChatErrors
impl From<reqwest::Error> for ChatError {
    fn from(err: reqwest::Error) -> Self {
        ChatError::HttpError(err.to_string())
    }
}
