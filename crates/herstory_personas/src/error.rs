//! Error types for persona lookups.

use thiserror::Error;

/// Result type alias for persona operations.
pub type PersonaResult<T> = Result<T, PersonaError>;

/// Errors that can occur when resolving a persona.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonaError {
    #[error("Persona not found: {0}")]
    NotFound(String),
}
