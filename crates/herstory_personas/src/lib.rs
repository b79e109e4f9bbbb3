//! # herstory_personas - Leader persona catalog
//!
//! The registry is the fixed, ordered set of leaders a student can chat
//! with. Each persona carries the prompt used to generate its avatar.
//!
//! The catalog is compiled in and never changes during a run; lookups are
//! pure and case-sensitive.

pub mod catalog;
pub mod error;
pub mod registry;

pub use catalog::CATALOG;
pub use error::{PersonaError, PersonaResult};
pub use registry::{Persona, PersonaRegistry};
