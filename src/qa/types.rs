use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who a chat log entry came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Role {
    User,
    Assistant,
    /// A failed request, rendered inline in the log like any other entry.
    Error,
}

/// A single entry in the conversation log. Immutable once appended.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, content: String) -> Self {
        Message {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
        }
    }
}

/// The conversation log. Append-only: entries are never edited or removed,
/// and insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatLog {
    pub messages: Vec<Message>,
}

impl ChatLog {
    pub fn new() -> Self {
        ChatLog::default()
    }

    /// Appends a new message and returns a reference to it.
    pub fn push(&mut self, role: Role, content: String) -> &Message {
        self.messages.push(Message::new(role, content));
        self.messages.last().expect("just pushed")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Request body for `POST /api/ask`.
#[derive(Serialize, Debug, Clone)]
pub struct AskRequest {
    pub question: String,
    /// Hint to the service for how long an answer to produce.
    #[serde(rename = "maxLength")]
    pub max_length: u32,
}

/// Response body from `POST /api/ask`.
///
/// All fields are optional: a well-behaved reply carries `answer`, an
/// application failure carries `error` (and sometimes `message`). The
/// `success` and `details` fields appear in some service versions but are
/// never consulted.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AskResponse {
    pub answer: Option<String>,
    pub error: Option<String>,
    pub message: Option<String>,
    #[allow(dead_code)]
    pub success: Option<bool>,
    #[allow(dead_code)]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_log_push_preserves_order() {
        let mut log = ChatLog::new();
        log.push(Role::User, "first".to_string());
        log.push(Role::Assistant, "second".to_string());
        log.push(Role::Error, "third".to_string());

        assert_eq!(log.len(), 3);
        assert_eq!(log.messages[0].content, "first");
        assert_eq!(log.messages[1].content, "second");
        assert_eq!(log.messages[2].content, "third");
    }

    #[test]
    fn test_chat_log_push_returns_appended_message() {
        let mut log = ChatLog::new();
        let msg = log.push(Role::User, "hello".to_string());
        assert_eq!(msg.role, Role::User);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_message_ids_are_unique() {
        let a = Message::new(Role::User, "a".to_string());
        let b = Message::new(Role::User, "a".to_string());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_ask_request_serializes_max_length_in_camel_case() {
        let req = AskRequest {
            question: "What is the capital of France?".to_string(),
            max_length: 200,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["question"], "What is the capital of France?");
        assert_eq!(json["maxLength"], 200);
    }

    #[test]
    fn test_ask_response_tolerates_sparse_bodies() {
        let resp: AskResponse = serde_json::from_str(r#"{"answer":"Paris"}"#).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("Paris"));
        assert!(resp.error.is_none());

        let resp: AskResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.answer.is_none());
    }

    #[test]
    fn test_ask_response_ignores_unknown_fields() {
        let resp: AskResponse =
            serde_json::from_str(r#"{"answer":"ok","requestId":"abc-123"}"#).unwrap();
        assert_eq!(resp.answer.as_deref(), Some("ok"));
    }
}
