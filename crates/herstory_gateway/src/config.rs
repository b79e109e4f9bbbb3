//! Gateway configuration.
//!
//! Values are layered, later layers winning:
//! 1. built-in defaults
//! 2. workspace settings at `.herstory/settings.json`
//! 3. environment variables (`HF_API_TOKEN`, `HERSTORY_API_BASE`,
//!    `HERSTORY_IMAGE_MODEL`, `HERSTORY_TEXT_MODEL`)
//! 4. explicit overrides from the caller (CLI flags)

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{GatewayError, GatewayResult};

pub const DEFAULT_API_BASE: &str = "https://api-inference.huggingface.co/models";
pub const DEFAULT_IMAGE_MODEL: &str = "stabilityai/stable-diffusion-2";
pub const DEFAULT_TEXT_MODEL: &str = "TheBloke/gpt4all-lora-quantized";
pub const DEFAULT_IMAGE_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_TEXT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_MAX_NEW_TOKENS: u32 = 200;

pub const ENV_API_TOKEN: &str = "HF_API_TOKEN";
pub const ENV_API_BASE: &str = "HERSTORY_API_BASE";
pub const ENV_IMAGE_MODEL: &str = "HERSTORY_IMAGE_MODEL";
pub const ENV_TEXT_MODEL: &str = "HERSTORY_TEXT_MODEL";

/// Connection settings for both inference endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct GatewayConfig {
    /// Base URL; model identifiers are appended as path segments
    pub api_base: String,
    /// Bearer token, `None` means no Authorization header
    api_token: Option<String>,
    pub image_model: String,
    pub text_model: String,
    pub image_timeout: Duration,
    pub text_timeout: Duration,
    pub max_new_tokens: u32,
}

/// On-disk settings file, every key optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    api_base: Option<String>,
    api_token: Option<String>,
    image_model: Option<String>,
    text_model: Option<String>,
    image_timeout_secs: Option<u64>,
    text_timeout_secs: Option<u64>,
    max_new_tokens: Option<u32>,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            api_token: None,
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_timeout: DEFAULT_IMAGE_TIMEOUT,
            text_timeout: DEFAULT_TEXT_TIMEOUT,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
        }
    }
}

impl GatewayConfig {
    /// Location of the settings file inside a workspace.
    pub fn settings_path(workspace_root: &Path) -> PathBuf {
        workspace_root.join(".herstory").join("settings.json")
    }

    /// Defaults, then the workspace settings file, then the process environment.
    pub fn load(workspace_root: &Path) -> GatewayResult<Self> {
        let config = Self::default().with_settings_file(&Self::settings_path(workspace_root))?;
        Ok(config.with_env())
    }

    /// Apply a settings file. A missing file leaves the config unchanged.
    pub fn with_settings_file(mut self, path: &Path) -> GatewayResult<Self> {
        if !path.exists() {
            debug!("No settings file at {}", path.display());
            return Ok(self);
        }

        let content = std::fs::read_to_string(path)?;
        let settings: SettingsFile = serde_json::from_str(&content)
            .map_err(|e| GatewayError::Settings(format!("{}: {}", path.display(), e)))?;
        debug!("Loaded settings from {}", path.display());

        if let Some(base) = settings.api_base {
            self.api_base = base;
        }
        if let Some(token) = settings.api_token {
            self = self.with_api_token(token);
        }
        if let Some(model) = settings.image_model {
            self.image_model = model;
        }
        if let Some(model) = settings.text_model {
            self.text_model = model;
        }
        if let Some(secs) = settings.image_timeout_secs {
            self.image_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = settings.text_timeout_secs {
            self.text_timeout = Duration::from_secs(secs);
        }
        if let Some(tokens) = settings.max_new_tokens {
            self.max_new_tokens = tokens;
        }
        Ok(self)
    }

    /// Apply overrides from the process environment.
    pub fn with_env(self) -> Self {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply environment-style overrides from an arbitrary lookup.
    pub fn with_overrides_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(token) = lookup(ENV_API_TOKEN) {
            self = self.with_api_token(token);
        }
        if let Some(base) = lookup(ENV_API_BASE).filter(|v| !v.is_empty()) {
            self.api_base = base;
        }
        if let Some(model) = lookup(ENV_IMAGE_MODEL).filter(|v| !v.is_empty()) {
            self.image_model = model;
        }
        if let Some(model) = lookup(ENV_TEXT_MODEL).filter(|v| !v.is_empty()) {
            self.text_model = model;
        }
        self
    }

    /// Set the bearer token. An empty string clears it.
    pub fn with_api_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.api_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    pub fn image_endpoint(&self) -> String {
        self.endpoint(&self.image_model)
    }

    pub fn text_endpoint(&self) -> String {
        self.endpoint(&self.text_model)
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}",
            self.api_base.trim_end_matches('/'),
            model.trim_start_matches('/')
        )
    }
}
