//! HTTP client for the hosted inference endpoints.

use std::time::Duration;

use image::DynamicImage;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::error::{GatewayError, GatewayResult};

/// Client issuing one POST per call, no retries.
pub struct InferenceClient {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl InferenceClient {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Render an image for `prompt` and decode it.
    pub async fn try_generate_avatar(&self, prompt: &str) -> GatewayResult<DynamicImage> {
        let url = self.config.image_endpoint();
        let request = ImageRequest { inputs: prompt };
        debug!("POST {} (image, timeout {:?})", url, self.config.image_timeout);

        let bytes = self
            .post(&url, &request, self.config.image_timeout)
            .await?;
        decode_image(&bytes)
    }

    /// Generate a completion for `prompt` and return its text.
    pub async fn try_generate_text(&self, prompt: &str) -> GatewayResult<String> {
        let url = self.config.text_endpoint();
        let request = TextRequest {
            inputs: prompt,
            parameters: TextParameters {
                max_new_tokens: self.config.max_new_tokens,
            },
        };
        debug!("POST {} (text, timeout {:?})", url, self.config.text_timeout);

        let bytes = self.post(&url, &request, self.config.text_timeout).await?;
        parse_text_response(&bytes)
    }

    async fn post<T: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &T,
        timeout: Duration,
    ) -> GatewayResult<Vec<u8>> {
        let mut request = self.client.post(url).json(body).timeout(timeout);
        if let Some(token) = self.config.api_token() {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| classify(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| classify(e, timeout))?;
        Ok(bytes.to_vec())
    }
}

fn classify(err: reqwest::Error, timeout: Duration) -> GatewayError {
    if err.is_timeout() {
        GatewayError::Timeout(timeout.as_secs())
    } else {
        GatewayError::Http(err)
    }
}

/// Decode raw bytes returned by the image model.
pub fn decode_image(bytes: &[u8]) -> GatewayResult<DynamicImage> {
    Ok(image::load_from_memory(bytes)?)
}

/// Extract the first `generated_text` from a text model response.
///
/// Expected shape: `[{"generated_text": "..."}, ...]`.
pub fn parse_text_response(bytes: &[u8]) -> GatewayResult<String> {
    let outputs: Vec<TextOutput> = serde_json::from_slice(bytes)?;
    outputs
        .into_iter()
        .next()
        .map(|o| o.generated_text)
        .ok_or_else(|| GatewayError::MalformedPayload("empty generation list".to_string()))
}

// Inference API types
#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Serialize)]
struct TextRequest<'a> {
    inputs: &'a str,
    parameters: TextParameters,
}

#[derive(Debug, Serialize)]
struct TextParameters {
    max_new_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct TextOutput {
    generated_text: String,
}
