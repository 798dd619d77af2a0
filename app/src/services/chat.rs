// luxecart_server/src/services/chat.rs

//! The storefront's shopping assistant. It is cosmetic: every question gets
//! the same canned help text.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

pub const GREETING: &str = "Hello! I'm your AI shopping assistant. How can I help you today?";
pub const CANNED_REPLY: &str = "I'm here to help! I can assist you with finding products, placing orders, \
tracking shipments, and answering any questions you might have about our store.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
  User,
  Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatMessage {
  pub id: Uuid,
  pub role: ChatRole,
  pub content: String,
  pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
  fn new(role: ChatRole, content: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
    Self {
      id: Uuid::new_v4(),
      role,
      content: content.into(),
      timestamp,
    }
  }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ChatAssistant;

impl ChatAssistant {
  pub fn greeting(&self, now: DateTime<Utc>) -> ChatMessage {
    ChatMessage::new(ChatRole::Assistant, GREETING, now)
  }

  /// Echoes the user's message and appends the assistant's answer.
  /// Blank input yields nothing.
  pub fn exchange(&self, input: &str, now: DateTime<Utc>) -> Option<[ChatMessage; 2]> {
    if input.trim().is_empty() {
      return None;
    }
    Some([
      ChatMessage::new(ChatRole::User, input, now),
      ChatMessage::new(ChatRole::Assistant, CANNED_REPLY, now),
    ])
  }
}
