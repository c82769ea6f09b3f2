//! Append-only conversation transcript.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One message in the transcript.
#[derive(Debug, Clone, Serialize)]
pub struct ConversationTurn {
    pub role: Role,
    /// Raw query text, or the rendered answer.
    pub content: String,
    pub timestamp: DateTime<Utc>,
    /// Course codes cited by an assistant turn, deduplicated. Always empty
    /// for user turns.
    pub sources: Vec<String>,
}

/// Linear query/answer history for one session.
#[derive(Debug, Clone, Serialize)]
pub struct Transcript {
    id: Uuid,
    turns: Vec<ConversationTurn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            turns: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.turns.push(ConversationTurn {
            role: Role::User,
            content: content.into(),
            timestamp: Utc::now(),
            sources: Vec::new(),
        });
    }

    pub fn push_assistant(&mut self, content: impl Into<String>, sources: Vec<String>) {
        self.turns.push(ConversationTurn {
            role: Role::Assistant,
            content: content.into(),
            timestamp: Utc::now(),
            sources,
        });
    }

    pub fn turns(&self) -> &[ConversationTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop every turn. The session id is kept.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_and_clear() {
        let mut t = Transcript::new();
        let id = t.id();
        t.push_user("list all courses");
        t.push_assistant("All ACFI Courses:", vec!["ACFI 801".to_string()]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.turns()[0].role, Role::User);
        assert!(t.turns()[0].sources.is_empty());
        assert_eq!(t.turns()[1].sources, vec!["ACFI 801"]);
        assert!(t.turns()[0].timestamp <= t.turns()[1].timestamp);

        t.clear();
        assert!(t.is_empty());
        assert_eq!(t.id(), id);
    }

    #[test]
    fn test_serializes_roles_lowercase() {
        let mut t = Transcript::new();
        t.push_user("hi");
        let v = serde_json::to_value(&t).unwrap();
        assert_eq!(v["turns"][0]["role"], "user");
    }
}
