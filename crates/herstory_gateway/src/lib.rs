//! # herstory_gateway - Inference Gateway
//!
//! Talks to two remote inference endpoints:
//! - an image model that renders persona avatars
//! - a text model that answers student questions
//!
//! ## Failure policy
//!
//! Both operations of [`InferenceGateway`] always return a displayable
//! value. Network errors, timeouts, error statuses and malformed payloads
//! are logged and collapsed into a fallback: a gray placeholder
//! [`Avatar`] or [`TEXT_FALLBACK`]. The typed, fallible forms live on
//! [`InferenceClient`] for callers that want the cause.
//!
//! ```text
//! ┌──────────────────┐   try_generate_*   ┌──────────────────┐
//! │ InferenceGateway │──────────────────▶│ InferenceClient  │──▶ HTTP POST
//! │  (never fails)   │◀── GatewayResult ──│   (reqwest)      │
//! └──────────────────┘                    └──────────────────┘
//! ```

pub mod avatar;
pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod mock;

pub use avatar::{Avatar, AvatarSource, PLACEHOLDER_COLOR, PLACEHOLDER_HEIGHT, PLACEHOLDER_WIDTH};
pub use client::{decode_image, parse_text_response, InferenceClient};
pub use config::GatewayConfig;
pub use error::{GatewayError, GatewayResult};
pub use gateway::{InferenceGateway, TEXT_FALLBACK};
pub use mock::{CapturedPrompt, MockGateway};
