//! Mock gateway for testing.
//!
//! Captures every prompt and returns predefined responses, so sessions can
//! be exercised without reaching a remote inference service.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use image::{DynamicImage, Rgb, RgbImage};
use parking_lot::RwLock;

use crate::avatar::Avatar;
use crate::gateway::{InferenceGateway, TEXT_FALLBACK};

/// Captured call information for verification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPrompt {
    pub method: String,
    pub prompt: String,
}

/// Mock inference gateway.
///
/// Text responses cycle through the configured list; with no responses
/// configured every text call returns [`TEXT_FALLBACK`]. Avatars are small
/// generated images unless placeholders are forced.
#[derive(Clone)]
pub struct MockGateway {
    text_responses: Arc<RwLock<Vec<String>>>,
    response_index: Arc<AtomicUsize>,
    captured: Arc<RwLock<Vec<CapturedPrompt>>>,
    placeholder_avatars: Arc<RwLock<bool>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            text_responses: Arc::new(RwLock::new(Vec::new())),
            response_index: Arc::new(AtomicUsize::new(0)),
            captured: Arc::new(RwLock::new(Vec::new())),
            placeholder_avatars: Arc::new(RwLock::new(false)),
        }
    }

    /// Add a text response for the next generate_text call.
    pub fn add_text_response(self, text: impl Into<String>) -> Self {
        self.text_responses.write().push(text.into());
        self
    }

    /// Return placeholder avatars, as if the image model were down.
    pub fn with_placeholder_avatars(self) -> Self {
        *self.placeholder_avatars.write() = true;
        self
    }

    /// Get all captured prompts.
    pub fn get_calls(&self) -> Vec<CapturedPrompt> {
        self.captured.read().clone()
    }

    /// Prompts passed to a specific method, in call order.
    pub fn prompts_for(&self, method: &str) -> Vec<String> {
        self.captured
            .read()
            .iter()
            .filter(|c| c.method == method)
            .map(|c| c.prompt.clone())
            .collect()
    }

    pub fn call_count(&self) -> usize {
        self.captured.read().len()
    }

    fn record(&self, method: &str, prompt: &str) {
        self.captured.write().push(CapturedPrompt {
            method: method.to_string(),
            prompt: prompt.to_string(),
        });
    }

    fn next_text(&self) -> String {
        let responses = self.text_responses.read();
        if responses.is_empty() {
            return TEXT_FALLBACK.to_string();
        }
        let index = self.response_index.fetch_add(1, Ordering::SeqCst);
        responses[index % responses.len()].clone()
    }
}

#[async_trait]
impl InferenceGateway for MockGateway {
    async fn generate_avatar(&self, prompt: &str) -> Avatar {
        self.record("generate_avatar", prompt);
        if *self.placeholder_avatars.read() {
            return Avatar::placeholder();
        }
        // Width encodes prompt length so tests can tell avatars apart
        let width = (prompt.len() as u32).max(1);
        Avatar::generated(DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            2,
            Rgb([0, 0, 0]),
        )))
    }

    async fn generate_text(&self, prompt: &str) -> String {
        self.record("generate_text", prompt);
        self.next_text()
    }
}
