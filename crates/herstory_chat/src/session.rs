//! Conversation session.
//!
//! A session accumulates exchanges. The only state change is the
//! transcript growing by one exchange per successful `ask`, plus the
//! currently selected persona, which may change freely between turns.

use std::sync::Arc;

use tracing::{debug, info};

use herstory_gateway::{Avatar, InferenceGateway};
use herstory_personas::PersonaRegistry;

use crate::avatars::AvatarCache;
use crate::error::{ChatError, ChatResult};
use crate::prompt::compose_prompt;
use crate::transcript::{Exchange, Transcript};

/// What the UI re-renders after a turn.
#[derive(Debug)]
pub struct ChatReply<'a> {
    pub transcript: &'a Transcript,
    pub avatar: &'a Avatar,
}

/// One student's conversation.
pub struct ConversationSession {
    id: String,
    registry: Arc<PersonaRegistry>,
    avatars: Arc<AvatarCache>,
    gateway: Arc<dyn InferenceGateway>,
    transcript: Transcript,
    selected_persona: Option<String>,
}

impl ConversationSession {
    pub(crate) fn new(
        registry: Arc<PersonaRegistry>,
        avatars: Arc<AvatarCache>,
        gateway: Arc<dyn InferenceGateway>,
    ) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        debug!("Opened conversation session {}", id);
        Self {
            id,
            registry,
            avatars,
            gateway,
            transcript: Transcript::new(),
            selected_persona: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn selected_persona(&self) -> Option<&str> {
        self.selected_persona.as_deref()
    }

    /// Switch the selected persona and return its avatar.
    ///
    /// The transcript is left untouched.
    pub fn select_persona(&mut self, persona_name: &str) -> ChatResult<&Avatar> {
        let persona = self.registry.lookup(persona_name)?;
        info!("Session {} switched to {}", self.id, persona.name);
        self.selected_persona = Some(persona.name.clone());
        self.avatar_for(persona_name)
    }

    /// Ask `persona_name` a question.
    ///
    /// Unknown personas fail before anything is sent or recorded. Remote
    /// failures do not fail: the gateway's fallback text becomes the answer.
    pub async fn ask(&mut self, question: &str, persona_name: &str) -> ChatResult<ChatReply<'_>> {
        let persona = self.registry.lookup(persona_name)?.name.clone();
        self.avatar_for(&persona)?;

        let prompt = compose_prompt(&persona, question);
        debug!("Session {} asking {} ({} chars)", self.id, persona, prompt.len());
        let answer = self.gateway.generate_text(&prompt).await;

        self.transcript.push(Exchange::new(persona.clone(), question, answer));
        self.selected_persona = Some(persona);

        let avatar = self.avatar_for(persona_name)?;
        Ok(ChatReply {
            transcript: &self.transcript,
            avatar,
        })
    }

    /// Ask the currently selected persona.
    pub async fn ask_selected(&mut self, question: &str) -> ChatResult<ChatReply<'_>> {
        let persona = self
            .selected_persona
            .clone()
            .ok_or(ChatError::NoPersonaSelected)?;
        self.ask(question, &persona).await
    }

    fn avatar_for(&self, persona_name: &str) -> ChatResult<&Avatar> {
        self.avatars
            .get(persona_name)
            .ok_or_else(|| ChatError::AvatarMissing(persona_name.to_string()))
    }
}

impl std::fmt::Debug for ConversationSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationSession")
            .field("id", &self.id)
            .field("selected_persona", &self.selected_persona)
            .field("exchanges", &self.transcript.len())
            .finish()
    }
}
