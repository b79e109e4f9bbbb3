//! # herstory_chat - Conversation sessions
//!
//! A student picks a leader and asks questions. Each question is wrapped in
//! a persona prompt, sent through the [`InferenceGateway`], and recorded as
//! an [`Exchange`] in the session's [`Transcript`].
//!
//! ## Lifecycle
//!
//! [`ChatApp::bootstrap`] renders an avatar for every persona before it
//! returns. Sessions can only be opened from a bootstrapped app, so every
//! persona has a cached avatar by the time the first question is asked.
//!
//! ```text
//! ┌─────────────┐  ask  ┌─────────────────────┐ generate_text ┌──────────────────┐
//! │     CLI     │──────▶│ ConversationSession │──────────────▶│ InferenceGateway │
//! └─────────────┘       └──────────┬──────────┘               └──────────────────┘
//!                                  │
//!                    ┌─────────────┴─────────────┐
//!                    ▼                           ▼
//!            ┌───────────────┐          ┌─────────────────┐
//!            │  Transcript   │          │   AvatarCache   │
//!            └───────────────┘          └─────────────────┘
//! ```
//!
//! [`InferenceGateway`]: herstory_gateway::InferenceGateway

pub mod app;
pub mod avatars;
pub mod error;
pub mod prompt;
pub mod session;
pub mod transcript;

pub use app::ChatApp;
pub use avatars::AvatarCache;
pub use error::{ChatError, ChatResult};
pub use prompt::compose_prompt;
pub use session::{ChatReply, ConversationSession};
pub use transcript::{Exchange, Transcript};
