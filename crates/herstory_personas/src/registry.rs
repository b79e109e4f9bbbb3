//! Persona registry.

use serde::Serialize;
use tracing::debug;

use crate::catalog::CATALOG;
use crate::error::{PersonaError, PersonaResult};

/// A leader the student can chat with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Persona {
    /// Display name, also the lookup key
    pub name: String,
    /// Prompt sent to the image model to render this persona
    #[serde(rename = "avatarPrompt")]
    pub avatar_prompt: String,
}

impl Persona {
    pub fn new(name: impl Into<String>, avatar_prompt: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar_prompt: avatar_prompt.into(),
        }
    }
}

/// Ordered, immutable set of personas.
///
/// Lookups are exact and case-sensitive. Catalog order is preserved for
/// [`PersonaRegistry::all_names`] and [`PersonaRegistry::iter`].
#[derive(Debug, Clone)]
pub struct PersonaRegistry {
    personas: Vec<Persona>,
}

impl PersonaRegistry {
    /// Create the registry holding the built-in leader catalog.
    pub fn builtin() -> Self {
        let personas = CATALOG
            .iter()
            .map(|(name, prompt)| Persona::new(*name, *prompt))
            .collect::<Vec<_>>();
        debug!("Loaded {} built-in personas", personas.len());
        Self { personas }
    }

    /// Resolve a persona by its exact name.
    pub fn lookup(&self, name: &str) -> PersonaResult<&Persona> {
        self.personas
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| PersonaError::NotFound(name.to_string()))
    }

    /// Check if a persona is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.personas.iter().any(|p| p.name == name)
    }

    /// All persona names in catalog order.
    pub fn all_names(&self) -> Vec<&str> {
        self.personas.iter().map(|p| p.name.as_str()).collect()
    }

    /// Iterate personas in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Persona> {
        self.personas.iter()
    }

    pub fn len(&self) -> usize {
        self.personas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.personas.is_empty()
    }
}

impl Default for PersonaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
