//! Chat turns and the client-held conversation history.
//!
//! The server keeps no session state: the full history travels with every
//! request and comes back extended by one user and one assistant turn. The
//! engine only ever reads it; turns are never reordered or deleted.

use serde::{Deserialize, Serialize};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single utterance. Immutable once appended to a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Turn {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Turn {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Ordered, append-only sequence of turns. Serializes transparently as a
/// JSON array so it round-trips the wire format unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Conversation {
    turns: Vec<Turn>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_turns(turns: Vec<Turn>) -> Self {
        Conversation { turns }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::user(content));
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.turns.push(Turn::assistant(content));
    }

    /// Most recent assistant turn, if any.
    pub fn last_assistant(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.role == Role::Assistant)
    }

    /// Most recent user turn, if any.
    pub fn last_user(&self) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.role == Role::User)
    }

    /// All user-turn texts joined with single spaces, in order. This is the
    /// input to the whole-history preference extraction.
    pub fn joined_user_text(&self) -> String {
        let texts: Vec<&str> = self
            .turns
            .iter()
            .filter(|t| t.role == Role::User)
            .map(|t| t.content.as_str())
            .collect();
        texts.join(" ")
    }

    /// The trailing `n` turns (fewer if the conversation is shorter).
    pub fn last_n(&self, n: usize) -> &[Turn] {
        let start = self.turns.len().saturating_sub(n);
        &self.turns[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_preserves_order() {
        let mut conversation = Conversation::new();
        conversation.push_user("hola");
        conversation.push_assistant("¡Hola!");
        conversation.push_user("quiero terror");

        let roles: Vec<Role> = conversation.turns().iter().map(|t| t.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(conversation.turns()[0].content, "hola");
    }

    #[test]
    fn test_joined_user_text_skips_assistant_turns() {
        let mut conversation = Conversation::new();
        conversation.push_user("algo de tarantino");
        conversation.push_assistant("¿De los 90s?");
        conversation.push_user("si de los 90s");

        assert_eq!(conversation.joined_user_text(), "algo de tarantino si de los 90s");
    }

    #[test]
    fn test_last_assistant_and_user() {
        let mut conversation = Conversation::new();
        assert!(conversation.last_assistant().is_none());

        conversation.push_user("hola");
        conversation.push_assistant("primera");
        conversation.push_assistant("segunda");

        assert_eq!(conversation.last_assistant().map(|t| t.content.as_str()), Some("segunda"));
        assert_eq!(conversation.last_user().map(|t| t.content.as_str()), Some("hola"));
    }

    #[test]
    fn test_last_n_clamps() {
        let mut conversation = Conversation::new();
        conversation.push_user("uno");
        conversation.push_assistant("dos");

        assert_eq!(conversation.last_n(3).len(), 2);
        assert_eq!(conversation.last_n(1)[0].content, "dos");
    }

    #[test]
    fn test_serde_round_trip_matches_wire_format() {
        let json = r#"[{"role":"user","content":"hola"},{"role":"assistant","content":"¡Hola!"}]"#;
        let conversation: Conversation = serde_json::from_str(json).expect("deserialize");
        assert_eq!(conversation.len(), 2);
        assert_eq!(conversation.turns()[1].role, Role::Assistant);

        let back = serde_json::to_string(&conversation).expect("serialize");
        assert_eq!(back, json);
    }
}
