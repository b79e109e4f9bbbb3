//! Startup avatar cache.

use std::collections::HashMap;

use futures::future::join_all;
use tracing::info;

use herstory_gateway::{Avatar, InferenceGateway};
use herstory_personas::PersonaRegistry;

/// One avatar per persona, written once at startup and read-only after.
#[derive(Debug, Default)]
pub struct AvatarCache {
    avatars: HashMap<String, Avatar>,
}

impl AvatarCache {
    /// Render avatars for every persona concurrently.
    ///
    /// Completes only when every persona has an avatar, generated or
    /// placeholder. The gateway never fails, so neither does this.
    pub async fn prefetch(registry: &PersonaRegistry, gateway: &dyn InferenceGateway) -> Self {
        info!("Generating avatars for {} personas", registry.len());

        let renders = registry.iter().map(|persona| async move {
            let avatar = gateway.generate_avatar(&persona.avatar_prompt).await;
            (persona.name.clone(), avatar)
        });
        let avatars: HashMap<String, Avatar> = join_all(renders).await.into_iter().collect();

        let placeholders = avatars.values().filter(|a| a.is_placeholder()).count();
        info!(
            "Avatars ready: {} generated, {} placeholder",
            avatars.len() - placeholders,
            placeholders
        );

        Self { avatars }
    }

    pub fn get(&self, persona: &str) -> Option<&Avatar> {
        self.avatars.get(persona)
    }

    pub fn len(&self) -> usize {
        self.avatars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.avatars.is_empty()
    }

    pub fn placeholder_count(&self) -> usize {
        self.avatars.values().filter(|a| a.is_placeholder()).count()
    }
}
