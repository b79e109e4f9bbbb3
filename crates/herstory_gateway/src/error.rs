//! Error types for the inference gateway.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors raised by the HTTP client and configuration loading.
///
/// Remote-call variants never cross the [`crate::InferenceGateway`]
/// boundary; they are turned into fallback values there.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("Inference API error {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Invalid settings: {0}")]
    Settings(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for GatewayError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}
