//! Composite prompt construction.

/// Build the text-model prompt for a question asked of a persona.
///
/// The question is inserted verbatim.
pub fn compose_prompt(persona: &str, question: &str) -> String {
    format!(
        "You are {}. Give leadership and financial literacy advice to a student. Student asks: {}",
        persona, question
    )
}
