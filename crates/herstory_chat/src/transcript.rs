//! Transcript of question/answer exchanges.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// One question and the persona's answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Exchange {
    /// Persona that answered
    pub persona: String,
    /// Question exactly as the student typed it
    pub question: String,
    /// Gateway output, success text or fallback alike
    pub answer: String,
    #[serde(rename = "askedAt")]
    pub asked_at: DateTime<Utc>,
}

impl Exchange {
    pub fn new(
        persona: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            persona: persona.into(),
            question: question.into(),
            answer: answer.into(),
            asked_at: Utc::now(),
        }
    }

    /// Chat bubble for the student side.
    pub fn question_line(&self) -> String {
        format!("You: {}", self.question)
    }

    /// Chat bubble for the persona side.
    pub fn answer_line(&self) -> String {
        format!("{}: {}", self.persona, self.answer)
    }
}

/// Append-only, ordered history. Most recent exchange last.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Transcript {
    exchanges: Vec<Exchange>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, exchange: Exchange) {
        self.exchanges.push(exchange);
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    pub fn last(&self) -> Option<&Exchange> {
        self.exchanges.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Exchange> {
        self.exchanges.iter()
    }

    pub fn exchanges(&self) -> &[Exchange] {
        &self.exchanges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let exchange = Exchange::new("Rosa Parks", "How do I save?", "Pay yourself first.");
        assert_eq!(exchange.question_line(), "You: How do I save?");
        assert_eq!(exchange.answer_line(), "Rosa Parks: Pay yourself first.");
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        assert!(transcript.is_empty());

        transcript.push(Exchange::new("Marie Curie", "one", "a"));
        transcript.push(Exchange::new("Jane Austen", "two", "b"));

        assert_eq!(transcript.len(), 2);
        let questions: Vec<_> = transcript.iter().map(|e| e.question.as_str()).collect();
        assert_eq!(questions, vec!["one", "two"]);
        assert_eq!(transcript.last().unwrap().persona, "Jane Austen");
    }

    #[test]
    fn test_exchange_json_shape() {
        let exchange = Exchange::new("Frida Kahlo", "q", "a");
        let json = serde_json::to_value(&exchange).unwrap();
        assert_eq!(json["persona"], "Frida Kahlo");
        assert_eq!(json["question"], "q");
        assert_eq!(json["answer"], "a");
        assert!(json["askedAt"].is_string());
    }
}
