//! The never-failing gateway contract.

use async_trait::async_trait;
use tracing::warn;

use crate::avatar::Avatar;
use crate::client::InferenceClient;

/// Answer shown in the transcript when text generation fails.
pub const TEXT_FALLBACK: &str = "⚠️ Unable to generate response right now.";

/// Boundary to the remote inference services.
///
/// Both methods always produce something displayable; failures surface as
/// [`Avatar::placeholder`] and [`TEXT_FALLBACK`].
#[async_trait]
pub trait InferenceGateway: Send + Sync {
    /// Render the avatar for an image prompt.
    async fn generate_avatar(&self, prompt: &str) -> Avatar;

    /// Generate answer text for a composite prompt.
    async fn generate_text(&self, prompt: &str) -> String;
}

#[async_trait]
impl InferenceGateway for InferenceClient {
    async fn generate_avatar(&self, prompt: &str) -> Avatar {
        match self.try_generate_avatar(prompt).await {
            Ok(image) => Avatar::generated(image),
            Err(e) => {
                warn!("Avatar generation failed, using placeholder: {}", e);
                Avatar::placeholder()
            }
        }
    }

    async fn generate_text(&self, prompt: &str) -> String {
        match self.try_generate_text(prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!("Text generation failed: {}", e);
                TEXT_FALLBACK.to_string()
            }
        }
    }
}
