//! CLI command definitions.
//!
//! Each subcommand maps to one way of talking to the leaders.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use herstory_chat::ChatApp;
use herstory_gateway::{GatewayConfig, InferenceClient};
use herstory_personas::PersonaRegistry;

pub mod ask;
pub mod chat;
pub mod personas;

/// Her Story - leadership and financial literacy advice from historical leaders
#[derive(Parser)]
#[command(name = "herstory")]
#[command(version, about = "Her Story - chat with women leaders from history")]
#[command(long_about = r#"
Her Story lets a student pick a leader and ask for leadership and financial
literacy advice. Answers come from a hosted text-generation model; each
leader's avatar is rendered once at startup by a hosted image model.

COMMANDS:
  personas  → List the available leaders
  ask       → Ask one leader a single question
  chat      → Interactive chat session

CONFIGURATION (later wins):
  .herstory/settings.json   apiBase, apiToken, imageModel, textModel, ...
  HF_API_TOKEN, HERSTORY_API_BASE, HERSTORY_IMAGE_MODEL, HERSTORY_TEXT_MODEL
  --api-token, --api-base, --image-model, --text-model

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments (including unknown leader)
  3 - Configuration error
"#)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub gateway: GatewayArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available leaders
    Personas(personas::PersonasArgs),

    /// Ask a leader a single question
    Ask(ask::AskArgs),

    /// Start an interactive chat session
    Chat(chat::ChatArgs),
}

/// Inference endpoint overrides shared by every command.
#[derive(Args, Debug, Default)]
pub struct GatewayArgs {
    /// Workspace holding .herstory/settings.json
    #[arg(long, global = true, env = "HERSTORY_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Bearer token for the inference API
    #[arg(long, global = true)]
    pub api_token: Option<String>,

    /// Base URL of the inference API
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Image model used for avatars
    #[arg(long, global = true)]
    pub image_model: Option<String>,

    /// Text model used for answers
    #[arg(long, global = true)]
    pub text_model: Option<String>,
}

impl GatewayArgs {
    /// Resolve the final gateway configuration: file, then env, then flags.
    pub fn resolve(&self) -> Result<GatewayConfig> {
        let workspace = match &self.workspace {
            Some(path) => path.clone(),
            None => std::env::current_dir()?,
        };
        let mut config =
            GatewayConfig::load(&workspace).context("Failed to load gateway configuration")?;

        if let Some(token) = &self.api_token {
            config = config.with_api_token(token.clone());
        }
        if let Some(base) = &self.api_base {
            config.api_base = base.clone();
        }
        if let Some(model) = &self.image_model {
            config.image_model = model.clone();
        }
        if let Some(model) = &self.text_model {
            config.text_model = model.clone();
        }

        debug!(
            "Gateway: image={} text={} token={}",
            config.image_endpoint(),
            config.text_endpoint(),
            if config.api_token().is_some() { "set" } else { "unset" }
        );
        Ok(config)
    }
}

/// Build the chat app, rendering every avatar before returning.
pub async fn bootstrap(args: &GatewayArgs) -> Result<ChatApp> {
    let config = args.resolve()?;
    let gateway = Arc::new(InferenceClient::new(config));
    Ok(ChatApp::bootstrap(PersonaRegistry::builtin(), gateway).await)
}
