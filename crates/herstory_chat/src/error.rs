//! Error types for the chat system.

use thiserror::Error;

use herstory_personas::PersonaError;

/// Result type alias for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat system errors.
///
/// Remote inference failures never appear here; the gateway turns them
/// into displayable answers.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error(transparent)]
    Persona(#[from] PersonaError),

    #[error("No persona selected. Pick one of the leaders first")]
    NoPersonaSelected,

    #[error("No cached avatar for persona: {0}")]
    AvatarMissing(String),
}
