//! Application bootstrap.

use std::sync::Arc;

use tracing::info;

use herstory_gateway::InferenceGateway;
use herstory_personas::PersonaRegistry;

use crate::avatars::AvatarCache;
use crate::session::ConversationSession;

/// Shared, read-only state behind every session.
#[derive(Clone)]
pub struct ChatApp {
    registry: Arc<PersonaRegistry>,
    avatars: Arc<AvatarCache>,
    gateway: Arc<dyn InferenceGateway>,
}

impl ChatApp {
    /// Prefetch every persona's avatar, then return a ready app.
    pub async fn bootstrap(registry: PersonaRegistry, gateway: Arc<dyn InferenceGateway>) -> Self {
        let avatars = AvatarCache::prefetch(&registry, gateway.as_ref()).await;
        info!("Chat app ready with {} personas", registry.len());
        Self {
            registry: Arc::new(registry),
            avatars: Arc::new(avatars),
            gateway,
        }
    }

    pub fn registry(&self) -> &PersonaRegistry {
        &self.registry
    }

    pub fn avatars(&self) -> &AvatarCache {
        &self.avatars
    }

    /// Open a fresh session with an empty transcript.
    pub fn session(&self) -> ConversationSession {
        ConversationSession::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.avatars),
            Arc::clone(&self.gateway),
        )
    }
}
